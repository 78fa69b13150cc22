use serde::{Deserialize, Serialize};
use std::path::Path;
use wr_network::ModelBuilder;
use wr_params::ParameterTable;

use super::{FlowConstraints, NetworkNode, ensure_created, ensure_vacant};
use crate::error::SchemaResult;

/// A source of flow into the network, e.g. a reservoir release or catchment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputNode {
    pub name: String,
    #[serde(flatten)]
    pub constraints: FlowConstraints,
}

impl InputNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraints: FlowConstraints::default(),
        }
    }
}

impl NetworkNode for InputNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn create_nodes(&self, builder: &mut dyn ModelBuilder) -> SchemaResult<()> {
        ensure_vacant(&*builder, &self.name, &self.terminals())?;
        builder.add_input_node(&self.name, None)?;
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaError;
    use wr_network::{BuilderCall, ConstraintRole, ConstraintValue, Network, NodeKind};
    use wr_params::ParameterDef;

    #[test]
    fn fields_applied_cost_then_max_then_min() {
        let node = InputNode {
            name: "reservoir1".into(),
            constraints: FlowConstraints {
                cost: Some((-1.0).into()),
                max_flow: Some(20.0.into()),
                min_flow: Some(ParameterDef::Constant { value: 2.0 }.into()),
            },
        };
        let mut network = Network::new();
        let mut table = ParameterTable::new();

        node.create_nodes(&mut network).unwrap();
        node.set_constraints(&mut network, Path::new("."), &mut table)
            .unwrap();

        assert_eq!(
            network.calls(),
            &[
                BuilderCall::AddNode {
                    kind: NodeKind::Input,
                    name: "reservoir1".into(),
                    sub_index: None,
                },
                BuilderCall::SetCost {
                    name: "reservoir1".into(),
                    sub_index: None,
                    value: ConstraintValue::Literal(-1.0),
                },
                BuilderCall::SetConstraint {
                    name: "reservoir1".into(),
                    sub_index: None,
                    role: ConstraintRole::MaxFlow,
                    value: ConstraintValue::Literal(20.0),
                },
                BuilderCall::SetConstraint {
                    name: "reservoir1".into(),
                    sub_index: None,
                    role: ConstraintRole::MinFlow,
                    value: ConstraintValue::Parameter("reservoir1-min-flow".into()),
                },
            ]
        );
        assert!(table.contains("reservoir1-min-flow"));
    }

    #[test]
    fn constraints_before_creation_are_rejected() {
        let mut node = InputNode::new("reservoir1");
        node.constraints.max_flow = Some(10.0.into());
        let mut network = Network::new();
        let mut table = ParameterTable::new();

        let err = node
            .set_constraints(&mut network, Path::new("."), &mut table)
            .unwrap_err();

        assert!(matches!(err, SchemaError::NotCreated { ref name } if name == "reservoir1"));
        assert!(network.calls().is_empty());
    }
}
