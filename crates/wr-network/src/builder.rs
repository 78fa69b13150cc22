//! The capability surface node declarations configure a model through.

use core::fmt;
use wr_core::{NodeId, Real, SubIndex};

use crate::error::NetworkResult;

/// Kind of terminal registered with a builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Source of flow into the network.
    Input,
    /// Sink where flow leaves the network.
    Output,
    /// Pass-through node.
    Link,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeKind::Input => "input",
            NodeKind::Output => "output",
            NodeKind::Link => "link",
        };
        f.write_str(s)
    }
}

/// Flow bound a constraint call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConstraintRole {
    MaxFlow,
    MinFlow,
}

impl ConstraintRole {
    pub fn as_str(self) -> &'static str {
        match self {
            ConstraintRole::MaxFlow => "max_flow",
            ConstraintRole::MinFlow => "min_flow",
        }
    }
}

impl fmt::Display for ConstraintRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value handed to cost and constraint setters.
///
/// Either a literal the engine stores inline, or the name of an entry in the
/// shared parameter table.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintValue {
    Literal(Real),
    Parameter(String),
}

impl ConstraintValue {
    /// Parameter name, if this value refers to the parameter table.
    pub fn parameter_name(&self) -> Option<&str> {
        match self {
            ConstraintValue::Parameter(name) => Some(name),
            ConstraintValue::Literal(_) => None,
        }
    }
}

impl fmt::Display for ConstraintValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintValue::Literal(v) => write!(f, "{v}"),
            ConstraintValue::Parameter(name) => f.write_str(name),
        }
    }
}

/// Model builder the configuration pass drives.
///
/// Nodes are keyed by name plus an optional sub-index selecting one terminal
/// of a multi-terminal node. A name belongs to one node: adding a
/// `(name, sub_index)` pair that already exists, or mixing a `None` terminal
/// with sub-indexed terminals of the same name, fails with
/// [`crate::NetworkError::DuplicateNode`] and leaves the node set unchanged.
pub trait ModelBuilder {
    fn add_input_node(&mut self, name: &str, sub_index: Option<SubIndex>) -> NetworkResult<NodeId>;

    fn add_output_node(&mut self, name: &str, sub_index: Option<SubIndex>)
    -> NetworkResult<NodeId>;

    fn add_link_node(&mut self, name: &str, sub_index: Option<SubIndex>) -> NetworkResult<NodeId>;

    fn set_node_cost(
        &mut self,
        name: &str,
        sub_index: Option<SubIndex>,
        value: ConstraintValue,
    ) -> NetworkResult<()>;

    fn set_node_constraint(
        &mut self,
        name: &str,
        sub_index: Option<SubIndex>,
        role: ConstraintRole,
        value: ConstraintValue,
    ) -> NetworkResult<()>;

    /// Whether `(name, sub_index)` has been registered.
    fn contains_node(&self, name: &str, sub_index: Option<SubIndex>) -> bool;

    /// Whether any terminal has been registered under `name`.
    fn contains_name(&self, name: &str) -> bool;

    /// Engines that only take named references return `false`; literals are
    /// then materialized as constant parameters before being set.
    fn accepts_inline_literals(&self) -> bool {
        true
    }
}
