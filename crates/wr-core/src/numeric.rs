use crate::WrError;

/// Scalar type used for flows, costs and parameter values.
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, WrError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(WrError::NonFinite { what, value: v })
    }
}

/// Check every value of a slice, reporting the first non-finite one.
pub fn ensure_all_finite(values: &[Real], what: &'static str) -> Result<(), WrError> {
    values
        .iter()
        .try_for_each(|&v| ensure_finite(v, what).map(|_| ()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_all_finite_reports_infinity() {
        assert!(ensure_all_finite(&[1.0, 2.0, 3.0], "profile").is_ok());
        let err = ensure_all_finite(&[1.0, Real::INFINITY], "profile").unwrap_err();
        assert_eq!(
            err,
            WrError::NonFinite {
                what: "profile",
                value: Real::INFINITY
            }
        );
    }
}
