//! Node declarations.
//!
//! Every node kind registers its terminals with a model builder
//! (`create_nodes`) and later attaches its constraints (`set_constraints`).
//! The builder must have seen `create_nodes` for a node before that node's
//! constraints can be set.

mod delay;
mod flow;
mod input;
mod link;
mod output;

pub use delay::DelayNode;
pub use flow::FlowConstraints;
pub use input::InputNode;
pub use link::LinkNode;
pub use output::OutputNode;

use core::fmt;
use serde::{Deserialize, Serialize};
use std::path::Path;
use wr_core::SubIndex;
use wr_network::{ModelBuilder, NetworkError};
use wr_params::ParameterTable;

use crate::error::{SchemaError, SchemaResult};

/// Node attribute a constraint or derived parameter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeAttribute {
    Cost,
    MaxFlow,
    MinFlow,
    Delay,
}

impl NodeAttribute {
    /// Suffix used when naming a parameter materialized for this attribute.
    pub fn slug(self) -> &'static str {
        match self {
            NodeAttribute::Cost => "cost",
            NodeAttribute::MaxFlow => "max-flow",
            NodeAttribute::MinFlow => "min-flow",
            NodeAttribute::Delay => "delay",
        }
    }

    /// `"{node}-{slug}"`, e.g. `reservoir1-max-flow`.
    pub fn derived_name(self, node: &str) -> String {
        format!("{node}-{}", self.slug())
    }
}

impl fmt::Display for NodeAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeAttribute::Cost => "cost",
            NodeAttribute::MaxFlow => "max_flow",
            NodeAttribute::MinFlow => "min_flow",
            NodeAttribute::Delay => "delay",
        };
        f.write_str(s)
    }
}

/// Capability every node kind provides to the configuration pass.
pub trait NetworkNode {
    fn name(&self) -> &str;

    /// Terminals registered by `create_nodes`, as sub-indices.
    fn terminals(&self) -> Vec<Option<SubIndex>> {
        vec![None]
    }

    fn create_nodes(&self, builder: &mut dyn ModelBuilder) -> SchemaResult<()>;

    fn set_constraints(
        &self,
        builder: &mut dyn ModelBuilder,
        path: &Path,
        table: &mut ParameterTable,
    ) -> SchemaResult<()>;
}

/// One node of a network definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeDeclaration {
    Input(InputNode),
    Output(OutputNode),
    Link(LinkNode),
    Delay(DelayNode),
}

impl NodeDeclaration {
    pub fn kind_name(&self) -> &'static str {
        match self {
            NodeDeclaration::Input(_) => "Input",
            NodeDeclaration::Output(_) => "Output",
            NodeDeclaration::Link(_) => "Link",
            NodeDeclaration::Delay(_) => "Delay",
        }
    }

    fn inner(&self) -> &dyn NetworkNode {
        match self {
            NodeDeclaration::Input(n) => n,
            NodeDeclaration::Output(n) => n,
            NodeDeclaration::Link(n) => n,
            NodeDeclaration::Delay(n) => n,
        }
    }
}

impl NetworkNode for NodeDeclaration {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn terminals(&self) -> Vec<Option<SubIndex>> {
        self.inner().terminals()
    }

    fn create_nodes(&self, builder: &mut dyn ModelBuilder) -> SchemaResult<()> {
        self.inner().create_nodes(builder)
    }

    fn set_constraints(
        &self,
        builder: &mut dyn ModelBuilder,
        path: &Path,
        table: &mut ParameterTable,
    ) -> SchemaResult<()> {
        self.inner().set_constraints(builder, path, table)
    }
}

/// Fail before registering anything if the name is already in use.
///
/// A name belongs to one node, so a clash on any terminal counts, including a
/// terminal this node would not itself register.
pub(crate) fn ensure_vacant(
    builder: &dyn ModelBuilder,
    name: &str,
    terminals: &[Option<SubIndex>],
) -> SchemaResult<()> {
    let taken = terminals
        .iter()
        .find(|&&sub_index| builder.contains_node(name, sub_index))
        .or_else(|| terminals.first().filter(|_| builder.contains_name(name)));
    match taken {
        Some(&sub_index) => Err(NetworkError::DuplicateNode {
            name: name.to_string(),
            sub_index,
        }
        .into()),
        None => Ok(()),
    }
}

/// Fail unless every terminal has been registered.
pub(crate) fn ensure_created(
    builder: &dyn ModelBuilder,
    name: &str,
    terminals: &[Option<SubIndex>],
) -> SchemaResult<()> {
    if terminals
        .iter()
        .all(|&sub_index| builder.contains_node(name, sub_index))
    {
        Ok(())
    } else {
        Err(SchemaError::NotCreated {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_names() {
        assert_eq!(
            NodeAttribute::MaxFlow.derived_name("reservoir1"),
            "reservoir1-max-flow"
        );
        assert_eq!(NodeAttribute::Cost.derived_name("demand1"), "demand1-cost");
        assert_eq!(NodeAttribute::Delay.derived_name("reach"), "reach-delay");
        assert_eq!(NodeAttribute::MinFlow.to_string(), "min_flow");
    }

    #[test]
    fn deserialize_declarations() {
        let yaml = r#"
- type: Input
  name: reservoir1
  max_flow:
    type: Constant
    value: 15.0
- type: Output
  name: demand1
  cost: cost_curve_A
- type: Link
  name: river
  min_flow: 2
- type: Delay
  name: reach
  delay: 3
"#;
        let nodes: Vec<NodeDeclaration> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[0].kind_name(), "Input");
        assert_eq!(nodes[3].name(), "reach");

        match &nodes[1] {
            NodeDeclaration::Output(n) => {
                assert_eq!(n.constraints.cost, Some("cost_curve_A".into()));
                assert!(n.constraints.max_flow.is_none());
            }
            other => panic!("unexpected declaration: {other:?}"),
        }
        match &nodes[2] {
            NodeDeclaration::Link(n) => assert_eq!(n.constraints.min_flow, Some(2.0.into())),
            other => panic!("unexpected declaration: {other:?}"),
        }
        assert_eq!(nodes[3].terminals().len(), 2);
    }
}
