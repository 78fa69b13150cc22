use serde::{Deserialize, Serialize};
use std::path::Path;
use wr_network::ModelBuilder;
use wr_params::ParameterTable;

use super::{FlowConstraints, NetworkNode, ensure_created, ensure_vacant};
use crate::error::SchemaResult;

/// A sink where flow leaves the network, e.g. a demand centre.
///
/// Constraints go through the same resolver as every other node kind, so
/// references and inline definitions behave exactly as on an [`super::InputNode`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputNode {
    pub name: String,
    #[serde(flatten)]
    pub constraints: FlowConstraints,
}

impl OutputNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraints: FlowConstraints::default(),
        }
    }
}

impl NetworkNode for OutputNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn create_nodes(&self, builder: &mut dyn ModelBuilder) -> SchemaResult<()> {
        ensure_vacant(&*builder, &self.name, &self.terminals())?;
        builder.add_output_node(&self.name, None)?;
        Ok(())
    }

    fn set_constraints(
        &self,
        builder: &mut dyn ModelBuilder,
        path: &Path,
        table: &mut ParameterTable,
    ) -> SchemaResult<()> {
        ensure_created(&*builder, &self.name, &self.terminals())?;
        self.constraints
            .apply(&self.name, None, builder, path, table)
    }
}
