//! In-memory model builder.

use std::collections::HashMap;
use tracing::trace;
use wr_core::{NodeId, SubIndex};

use crate::builder::{ConstraintRole, ConstraintValue, ModelBuilder, NodeKind};
use crate::error::{NetworkError, NetworkResult};

/// A registered node terminal and the constraints attached to it so far.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    pub id: NodeId,
    pub name: String,
    pub sub_index: Option<SubIndex>,
    pub kind: NodeKind,
    pub cost: Option<ConstraintValue>,
    pub max_flow: Option<ConstraintValue>,
    pub min_flow: Option<ConstraintValue>,
}

/// One successful mutating call, in the order it was received.
#[derive(Debug, Clone, PartialEq)]
pub enum BuilderCall {
    AddNode {
        kind: NodeKind,
        name: String,
        sub_index: Option<SubIndex>,
    },
    SetCost {
        name: String,
        sub_index: Option<SubIndex>,
        value: ConstraintValue,
    },
    SetConstraint {
        name: String,
        sub_index: Option<SubIndex>,
        role: ConstraintRole,
        value: ConstraintValue,
    },
}

/// Builder that keeps nodes in registration order and logs every call.
///
/// Failed calls leave both the node set and the call log untouched.
#[derive(Debug)]
pub struct Network {
    nodes: Vec<NodeRecord>,
    by_name: HashMap<(String, Option<SubIndex>), NodeId>,
    calls: Vec<BuilderCall>,
    literal_constants: bool,
}

impl Default for Network {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            by_name: HashMap::new(),
            calls: Vec::new(),
            literal_constants: true,
        }
    }
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether literal constraint values are accepted inline.
    pub fn literal_constants(mut self, accept: bool) -> Self {
        self.literal_constants = accept;
        self
    }

    pub fn nodes(&self) -> &[NodeRecord] {
        &self.nodes
    }

    pub fn calls(&self) -> &[BuilderCall] {
        &self.calls
    }

    pub fn node(&self, id: NodeId) -> Option<&NodeRecord> {
        self.nodes.get(id.index() as usize)
    }

    pub fn node_by_name(&self, name: &str, sub_index: Option<SubIndex>) -> Option<&NodeRecord> {
        self.node_index(name, sub_index).and_then(|id| self.node(id))
    }

    fn node_index(&self, name: &str, sub_index: Option<SubIndex>) -> Option<NodeId> {
        self.by_name.get(&(name.to_string(), sub_index)).copied()
    }

    fn add_node(
        &mut self,
        kind: NodeKind,
        name: &str,
        sub_index: Option<SubIndex>,
    ) -> NetworkResult<NodeId> {
        let clash = self.contains_node(name, sub_index)
            || self.contains_node(name, None)
            || (sub_index.is_none() && self.contains_name(name));
        if clash {
            return Err(NetworkError::DuplicateNode {
                name: name.to_string(),
                sub_index,
            });
        }

        let id = NodeId::from_index(self.nodes.len()).map_err(|source| NetworkError::Capacity {
            name: name.to_string(),
            source,
        })?;
        self.nodes.push(NodeRecord {
            id,
            name: name.to_string(),
            sub_index,
            kind,
            cost: None,
            max_flow: None,
            min_flow: None,
        });
        self.by_name.insert((name.to_string(), sub_index), id);
        self.calls.push(BuilderCall::AddNode {
            kind,
            name: name.to_string(),
            sub_index,
        });
        trace!(%kind, name, ?sub_index, %id, "node added");
        Ok(id)
    }

    fn node_mut(&mut self, name: &str, sub_index: Option<SubIndex>) -> NetworkResult<&mut NodeRecord> {
        let id = self
            .node_index(name, sub_index)
            .ok_or_else(|| NetworkError::NodeNotFound {
                name: name.to_string(),
                sub_index,
            })?;
        Ok(&mut self.nodes[id.index() as usize])
    }
}

impl ModelBuilder for Network {
    fn add_input_node(&mut self, name: &str, sub_index: Option<SubIndex>) -> NetworkResult<NodeId> {
        self.add_node(NodeKind::Input, name, sub_index)
    }

    fn add_output_node(
        &mut self,
        name: &str,
        sub_index: Option<SubIndex>,
    ) -> NetworkResult<NodeId> {
        self.add_node(NodeKind::Output, name, sub_index)
    }

    fn add_link_node(&mut self, name: &str, sub_index: Option<SubIndex>) -> NetworkResult<NodeId> {
        self.add_node(NodeKind::Link, name, sub_index)
    }

    fn set_node_cost(
        &mut self,
        name: &str,
        sub_index: Option<SubIndex>,
        value: ConstraintValue,
    ) -> NetworkResult<()> {
        let node = self.node_mut(name, sub_index)?;
        node.cost = Some(value.clone());
        self.calls.push(BuilderCall::SetCost {
            name: name.to_string(),
            sub_index,
            value,
        });
        Ok(())
    }

    fn set_node_constraint(
        &mut self,
        name: &str,
        sub_index: Option<SubIndex>,
        role: ConstraintRole,
        value: ConstraintValue,
    ) -> NetworkResult<()> {
        let node = self.node_mut(name, sub_index)?;
        match role {
            ConstraintRole::MaxFlow => node.max_flow = Some(value.clone()),
            ConstraintRole::MinFlow => node.min_flow = Some(value.clone()),
        }
        self.calls.push(BuilderCall::SetConstraint {
            name: name.to_string(),
            sub_index,
            role,
            value,
        });
        Ok(())
    }

    fn contains_node(&self, name: &str, sub_index: Option<SubIndex>) -> bool {
        self.node_index(name, sub_index).is_some()
    }

    fn contains_name(&self, name: &str) -> bool {
        self.nodes.iter().any(|n| n.name == name)
    }

    fn accepts_inline_literals(&self) -> bool {
        self.literal_constants
    }
}
