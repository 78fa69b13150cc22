use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use wr_core::SubIndex;
use wr_network::{ConstraintRole, ModelBuilder};
use wr_params::{ParameterDef, ParameterTable, materialize};

use super::{NetworkNode, NodeAttribute, ensure_created, ensure_vacant};
use crate::error::{SchemaError, SchemaResult};

/// Delays flow passing through it by a whole number of timesteps.
///
/// Internally an output terminal ends the flow arriving at the node and an
/// input terminal releases it again. A delay parameter named
/// `"{name}-delay"` tracks the inflow; it becomes both the minimum and the
/// maximum flow of the input terminal.
///
/// ```text
///      U  <inflow, 0>  D
///     -*---> O    I --->*-
///             <outflow, 1>
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelayNode {
    pub name: String,
    pub delay: usize,
    #[serde(default)]
    pub initial_value: f64,
}

impl DelayNode {
    pub const INFLOW: SubIndex = SubIndex(0);
    pub const OUTFLOW: SubIndex = SubIndex(1);

    pub fn new(name: impl Into<String>, delay: usize) -> Self {
        Self {
            name: name.into(),
            delay,
            initial_value: 0.0,
        }
    }
}

impl NetworkNode for DelayNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn terminals(&self) -> Vec<Option<SubIndex>> {
        vec![Some(Self::INFLOW), Some(Self::OUTFLOW)]
    }

    fn create_nodes(&self, builder: &mut dyn ModelBuilder) -> SchemaResult<()> {
        ensure_vacant(&*builder, &self.name, &self.terminals())?;
        builder.add_output_node(&self.name, Some(Self::INFLOW))?;
        builder.add_input_node(&self.name, Some(Self::OUTFLOW))?;
        Ok(())
    }

    fn set_constraints(
        &self,
        builder: &mut dyn ModelBuilder,
        path: &Path,
        table: &mut ParameterTable,
    ) -> SchemaResult<()> {
        ensure_created(&*builder, &self.name, &self.terminals())?;

        let definition = ParameterDef::Delay {
            node: self.name.clone(),
            sub_index: Some(Self::INFLOW),
            delay: self.delay,
            initial_value: self.initial_value,
        };
        let derived = NodeAttribute::Delay.derived_name(&self.name);
        let value = materialize(&definition, &derived, path, table).map_err(|source| {
            SchemaError::Attribute {
                node: self.name.clone(),
                attribute: NodeAttribute::Delay,
                source,
            }
        })?;
        debug!(node = %self.name, delay = self.delay, "applying delay");

        let outflow = Some(Self::OUTFLOW);
        builder.set_node_constraint(&self.name, outflow, ConstraintRole::MaxFlow, value.clone())?;
        builder.set_node_constraint(&self.name, outflow, ConstraintRole::MinFlow, value)?;
        Ok(())
    }
}
