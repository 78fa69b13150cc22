//! The two-phase constraint application pass.

use std::path::Path;
use tracing::{debug, info};
use wr_network::{ModelBuilder, NetworkError};
use wr_params::ParameterTable;

use crate::error::{SchemaError, SchemaResult};
use crate::nodes::{NetworkNode, NodeDeclaration};

/// Where a declaration is in the configuration lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    Declared,
    Created,
    Constrained,
}

/// What a completed pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigureSummary {
    pub nodes: usize,
    pub terminals: usize,
    pub parameters_added: usize,
}

/// Drives a set of declarations through create-all, then constrain-all.
///
/// Both phases walk the declarations in order and stop at the first error.
/// Nothing is rolled back: after a failure the builder should be discarded.
#[derive(Debug)]
pub struct ConfigurationPass<'a> {
    declarations: &'a [NodeDeclaration],
    states: Vec<NodeState>,
}

impl<'a> ConfigurationPass<'a> {
    pub fn new(declarations: &'a [NodeDeclaration]) -> Self {
        Self {
            declarations,
            states: vec![NodeState::Declared; declarations.len()],
        }
    }

    pub fn states(&self) -> &[NodeState] {
        &self.states
    }

    /// Phase one: register every node's terminals.
    ///
    /// A declaration that has already been created cannot be created again.
    pub fn create_all(&mut self, builder: &mut dyn ModelBuilder) -> SchemaResult<usize> {
        let mut terminals = 0;
        for (decl, state) in self.declarations.iter().zip(self.states.iter_mut()) {
            if *state != NodeState::Declared {
                return Err(NetworkError::DuplicateNode {
                    name: decl.name().to_string(),
                    sub_index: decl.terminals().first().copied().flatten(),
                }
                .into());
            }
            decl.create_nodes(builder)?;
            terminals += decl.terminals().len();
            *state = NodeState::Created;
            debug!(node = decl.name(), kind = decl.kind_name(), "node created");
        }
        Ok(terminals)
    }

    /// Phase two: attach every node's constraints.
    pub fn constrain_all(
        &mut self,
        builder: &mut dyn ModelBuilder,
        path: &Path,
        table: &mut ParameterTable,
    ) -> SchemaResult<()> {
        for (decl, state) in self.declarations.iter().zip(self.states.iter_mut()) {
            match state {
                NodeState::Declared => {
                    return Err(SchemaError::NotCreated {
                        name: decl.name().to_string(),
                    });
                }
                NodeState::Constrained => {
                    return Err(SchemaError::AlreadyConstrained {
                        name: decl.name().to_string(),
                    });
                }
                NodeState::Created => {}
            }
            decl.set_constraints(builder, path, table)?;
            *state = NodeState::Constrained;
        }
        Ok(())
    }

    pub fn run(
        mut self,
        builder: &mut dyn ModelBuilder,
        path: &Path,
        table: &mut ParameterTable,
    ) -> SchemaResult<ConfigureSummary> {
        let parameters_before = table.len();
        let terminals = self.create_all(builder)?;
        self.constrain_all(builder, path, table)?;

        let summary = ConfigureSummary {
            nodes: self.declarations.len(),
            terminals,
            parameters_added: table.len() - parameters_before,
        };
        info!(
            nodes = summary.nodes,
            terminals = summary.terminals,
            parameters_added = summary.parameters_added,
            "network configured"
        );
        Ok(summary)
    }
}

/// Create every declared node, then apply every node's constraints.
pub fn configure(
    declarations: &[NodeDeclaration],
    builder: &mut dyn ModelBuilder,
    path: &Path,
    table: &mut ParameterTable,
) -> SchemaResult<ConfigureSummary> {
    ConfigurationPass::new(declarations).run(builder, path, table)
}
