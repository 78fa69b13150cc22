use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use wr_core::SubIndex;
use wr_network::{ConstraintRole, ModelBuilder};
use wr_params::{ConstraintField, ParameterTable, resolve};

use super::NodeAttribute;
use crate::error::{SchemaError, SchemaResult};

/// The optional cost and flow bounds shared by single-terminal node kinds.
///
/// An absent field leaves the engine's default in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowConstraints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<ConstraintField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_flow: Option<ConstraintField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_flow: Option<ConstraintField>,
}

impl FlowConstraints {
    /// Fields are applied in this order.
    pub const APPLY_ORDER: [NodeAttribute; 3] = [
        NodeAttribute::Cost,
        NodeAttribute::MaxFlow,
        NodeAttribute::MinFlow,
    ];

    pub fn is_empty(&self) -> bool {
        self.cost.is_none() && self.max_flow.is_none() && self.min_flow.is_none()
    }

    pub fn field(&self, attribute: NodeAttribute) -> Option<&ConstraintField> {
        match attribute {
            NodeAttribute::Cost => self.cost.as_ref(),
            NodeAttribute::MaxFlow => self.max_flow.as_ref(),
            NodeAttribute::MinFlow => self.min_flow.as_ref(),
            NodeAttribute::Delay => None,
        }
    }

    /// Resolve each populated field and hand it to the builder.
    ///
    /// Parameters materialized here are named `"{node}-{slug}"`.
    pub(crate) fn apply(
        &self,
        node: &str,
        sub_index: Option<SubIndex>,
        builder: &mut dyn ModelBuilder,
        path: &Path,
        table: &mut ParameterTable,
    ) -> SchemaResult<()> {
        for attribute in Self::APPLY_ORDER {
            let Some(field) = self.field(attribute) else {
                continue;
            };

            let derived = attribute.derived_name(node);
            let value = resolve(field, &derived, &*builder, path, table).map_err(|source| {
                SchemaError::Attribute {
                    node: node.to_string(),
                    attribute,
                    source,
                }
            })?;
            debug!(node, %attribute, %value, "applying constraint");

            match attribute {
                NodeAttribute::Cost => builder.set_node_cost(node, sub_index, value)?,
                NodeAttribute::MaxFlow => {
                    builder.set_node_constraint(node, sub_index, ConstraintRole::MaxFlow, value)?
                }
                NodeAttribute::MinFlow => {
                    builder.set_node_constraint(node, sub_index, ConstraintRole::MinFlow, value)?
                }
                NodeAttribute::Delay => {}
            }
        }
        Ok(())
    }
}
