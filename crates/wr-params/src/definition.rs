//! Parameter definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use wr_core::{Real, SubIndex, WrError, ensure_all_finite, ensure_finite};

/// A parameter as declared in a model definition.
///
/// The definitions are declarative: time-varying behaviour is evaluated by the
/// simulation engine, not here. Aggregating kinds refer to other table
/// entries by name.
///
/// ```
/// # use wr_params::ParameterDef;
/// let data = r#"{ "type": "Max", "parameter": "inflow", "threshold": 2.0 }"#;
/// let p: ParameterDef = serde_json::from_str(data)?;
/// assert_eq!(p.references(), vec!["inflow"]);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", deny_unknown_fields)]
pub enum ParameterDef {
    /// A single constant value.
    Constant { value: Real },
    /// One value per calendar month, January first.
    MonthlyProfile { values: [Real; 12] },
    /// Values read by the engine from a data file.
    ///
    /// A relative `url` is taken relative to the model's directory.
    Timeseries {
        url: PathBuf,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        column: Option<String>,
    },
    /// Maximum of another parameter and a threshold (default 0).
    Max {
        parameter: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        threshold: Option<Real>,
    },
    /// Minimum of another parameter and a threshold (default 0).
    Min {
        parameter: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        threshold: Option<Real>,
    },
    Negative { parameter: String },
    /// Maximum of the negated parameter and a threshold (default 0).
    NegativeMax {
        parameter: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        threshold: Option<Real>,
    },
    /// Minimum of the negated parameter and a threshold (default 0).
    NegativeMin {
        parameter: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        threshold: Option<Real>,
    },
    /// One of [`AggFunc`] applied across several parameters.
    Aggregated {
        parameters: Vec<String>,
        agg_func: AggFunc,
    },
    Division {
        numerator: String,
        denominator: String,
    },
    /// Flow into a node terminal, delayed by a number of timesteps.
    Delay {
        node: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sub_index: Option<SubIndex>,
        delay: usize,
        initial_value: Real,
    },
}

/// Reduction an `Aggregated` parameter applies to its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggFunc {
    Sum,
    Product,
    Mean,
    Min,
    Max,
}

impl ParameterDef {
    pub fn kind_name(&self) -> &'static str {
        match self {
            ParameterDef::Constant { .. } => "Constant",
            ParameterDef::MonthlyProfile { .. } => "MonthlyProfile",
            ParameterDef::Timeseries { .. } => "Timeseries",
            ParameterDef::Max { .. } => "Max",
            ParameterDef::Min { .. } => "Min",
            ParameterDef::Negative { .. } => "Negative",
            ParameterDef::NegativeMax { .. } => "NegativeMax",
            ParameterDef::NegativeMin { .. } => "NegativeMin",
            ParameterDef::Aggregated { .. } => "Aggregated",
            ParameterDef::Division { .. } => "Division",
            ParameterDef::Delay { .. } => "Delay",
        }
    }

    /// Names of the other parameters this definition depends on.
    pub fn references(&self) -> Vec<&str> {
        match self {
            ParameterDef::Max { parameter, .. }
            | ParameterDef::Min { parameter, .. }
            | ParameterDef::Negative { parameter }
            | ParameterDef::NegativeMax { parameter, .. }
            | ParameterDef::NegativeMin { parameter, .. } => vec![parameter.as_str()],
            ParameterDef::Aggregated { parameters, .. } => {
                parameters.iter().map(String::as_str).collect()
            }
            ParameterDef::Division {
                numerator,
                denominator,
            } => vec![numerator.as_str(), denominator.as_str()],
            ParameterDef::Constant { .. }
            | ParameterDef::MonthlyProfile { .. }
            | ParameterDef::Timeseries { .. }
            | ParameterDef::Delay { .. } => Vec::new(),
        }
    }

    /// Check the values carried by the definition itself.
    pub fn validate(&self) -> Result<(), WrError> {
        match self {
            ParameterDef::Constant { value } => ensure_finite(*value, "constant value").map(|_| ()),
            ParameterDef::MonthlyProfile { values } => ensure_all_finite(values, "monthly profile"),
            ParameterDef::Timeseries { url, .. } => {
                if url.as_os_str().is_empty() {
                    return Err(WrError::InvalidArg {
                        what: "timeseries url must not be empty",
                    });
                }
                Ok(())
            }
            ParameterDef::Max { threshold, .. }
            | ParameterDef::Min { threshold, .. }
            | ParameterDef::NegativeMax { threshold, .. }
            | ParameterDef::NegativeMin { threshold, .. } => match threshold {
                Some(t) => ensure_finite(*t, "threshold").map(|_| ()),
                None => Ok(()),
            },
            ParameterDef::Aggregated { parameters, .. } => {
                if parameters.is_empty() {
                    return Err(WrError::InvalidArg {
                        what: "aggregated parameter needs at least one operand",
                    });
                }
                Ok(())
            }
            ParameterDef::Negative { .. } | ParameterDef::Division { .. } => Ok(()),
            ParameterDef::Delay {
                delay,
                initial_value,
                ..
            } => {
                if *delay == 0 {
                    return Err(WrError::InvalidArg {
                        what: "delay must be at least one timestep",
                    });
                }
                ensure_finite(*initial_value, "delay initial value").map(|_| ())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_references_both_operands() {
        let p = ParameterDef::Division {
            numerator: "a".into(),
            denominator: "b".into(),
        };
        assert_eq!(p.references(), vec!["a", "b"]);
        assert!(ParameterDef::Constant { value: 1.0 }.references().is_empty());
    }

    #[test]
    fn validate_rejects_non_finite_values() {
        let p = ParameterDef::Constant { value: f64::NAN };
        assert!(matches!(p.validate(), Err(WrError::NonFinite { .. })));

        let mut values = [1.0; 12];
        values[7] = f64::INFINITY;
        let p = ParameterDef::MonthlyProfile { values };
        assert!(p.validate().is_err());

        let p = ParameterDef::Min {
            parameter: "x".into(),
            threshold: Some(f64::NEG_INFINITY),
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_delay() {
        let p = ParameterDef::Delay {
            node: "reach".into(),
            sub_index: None,
            delay: 0,
            initial_value: 0.0,
        };
        assert!(matches!(p.validate(), Err(WrError::InvalidArg { .. })));
    }

    #[test]
    fn deserialize_tagged_yaml() {
        let yaml = r#"
type: Timeseries
url: data/inflow.csv
column: flow
"#;
        let p: ParameterDef = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            p,
            ParameterDef::Timeseries {
                url: PathBuf::from("data/inflow.csv"),
                column: Some("flow".into()),
            }
        );
        assert_eq!(p.kind_name(), "Timeseries");
    }

    #[test]
    fn negative_bounds_reference_their_parameter() {
        let data = r#"{ "type": "NegativeMax", "parameter": "release", "threshold": 2.0 }"#;
        let p: ParameterDef = serde_json::from_str(data).unwrap();
        assert_eq!(p.kind_name(), "NegativeMax");
        assert_eq!(p.references(), vec!["release"]);

        let p = ParameterDef::NegativeMin {
            parameter: "release".into(),
            threshold: Some(f64::NAN),
        };
        assert!(matches!(p.validate(), Err(WrError::NonFinite { .. })));
        assert!(
            ParameterDef::NegativeMin {
                parameter: "release".into(),
                threshold: None,
            }
            .validate()
            .is_ok()
        );
    }

    #[test]
    fn aggregated_from_yaml() {
        let yaml = r#"
type: Aggregated
agg_func: mean
parameters: [catchment_a, catchment_b]
"#;
        let p: ParameterDef = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            p,
            ParameterDef::Aggregated {
                parameters: vec!["catchment_a".into(), "catchment_b".into()],
                agg_func: AggFunc::Mean,
            }
        );
        assert_eq!(p.references(), vec!["catchment_a", "catchment_b"]);
        assert!(p.validate().is_ok());

        let bad = r#"{ "type": "Aggregated", "parameters": ["a"], "agg_func": "median" }"#;
        assert!(serde_json::from_str::<ParameterDef>(bad).is_err());
    }

    #[test]
    fn aggregated_without_operands_is_invalid() {
        let p = ParameterDef::Aggregated {
            parameters: Vec::new(),
            agg_func: AggFunc::Sum,
        };
        assert!(matches!(p.validate(), Err(WrError::InvalidArg { .. })));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let data = r#"{ "type": "Constant", "value": 1.0, "scale": 2.0 }"#;
        assert!(serde_json::from_str::<ParameterDef>(data).is_err());
    }
}
