//! Constraint fields.

use serde::{Deserialize, Serialize};
use wr_core::Real;

use crate::definition::ParameterDef;

/// Value of a node attribute such as cost, min flow or max flow.
///
/// Written as a number, a parameter name, or an inline tagged definition:
///
/// ```
/// # use wr_params::{ConstraintField, ParameterDef};
/// let fields: Vec<ConstraintField> = serde_json::from_str(
///     r#"[ 12.5, "cost_curve_A", { "type": "Constant", "value": 3.0 } ]"#,
/// )?;
/// assert_eq!(fields[0], ConstraintField::Literal(12.5));
/// assert_eq!(fields[1], ConstraintField::Reference("cost_curve_A".into()));
/// assert_eq!(fields[2], ConstraintField::Inline(ParameterDef::Constant { value: 3.0 }));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstraintField {
    Literal(Real),
    Reference(String),
    Inline(ParameterDef),
}

impl From<Real> for ConstraintField {
    fn from(v: Real) -> Self {
        ConstraintField::Literal(v)
    }
}

impl From<&str> for ConstraintField {
    fn from(name: &str) -> Self {
        ConstraintField::Reference(name.to_string())
    }
}

impl From<ParameterDef> for ConstraintField {
    fn from(definition: ParameterDef) -> Self {
        ConstraintField::Inline(definition)
    }
}
