//! End-to-end configuration scenarios against the in-memory builder.

use std::path::Path;
use wr_network::{BuilderCall, ConstraintRole, ConstraintValue, Network, NetworkError, NodeKind};
use wr_params::{ParameterDef, ParameterTable};
use wr_core::SubIndex;
use wr_schema::{
    DelayNode, InputNode, NetworkNode, NodeDeclaration, OutputNode, SchemaError, configure,
};

fn set_cost_calls(network: &Network) -> usize {
    network
        .calls()
        .iter()
        .filter(|c| matches!(c, BuilderCall::SetCost { .. }))
        .count()
}

#[test]
fn input_with_inline_max_flow() {
    let mut reservoir = InputNode::new("reservoir1");
    reservoir.constraints.max_flow = Some(ParameterDef::Constant { value: 15.0 }.into());
    let decls = vec![NodeDeclaration::Input(reservoir)];

    let mut network = Network::new();
    let mut table = ParameterTable::new();
    configure(&decls, &mut network, Path::new("."), &mut table).unwrap();

    assert_eq!(network.nodes().len(), 1);
    let record = &network.nodes()[0];
    assert_eq!(record.name, "reservoir1");
    assert_eq!(record.kind, NodeKind::Input);

    assert_eq!(table.len(), 1);
    assert_eq!(
        table.get("reservoir1-max-flow"),
        Some(&ParameterDef::Constant { value: 15.0 })
    );

    let constraint_calls: Vec<&BuilderCall> = network
        .calls()
        .iter()
        .filter(|c| matches!(c, BuilderCall::SetConstraint { .. }))
        .collect();
    assert_eq!(
        constraint_calls,
        vec![&BuilderCall::SetConstraint {
            name: "reservoir1".into(),
            sub_index: None,
            role: ConstraintRole::MaxFlow,
            value: ConstraintValue::Parameter("reservoir1-max-flow".into()),
        }]
    );
    assert_eq!(set_cost_calls(&network), 0);
}

#[test]
fn output_with_cost_reference() {
    let mut table = ParameterTable::new();
    table
        .insert(
            "cost_curve_A",
            ParameterDef::MonthlyProfile {
                values: [-10.0, -10.0, -8.0, -6.0, -5.0, -5.0, -5.0, -5.0, -6.0, -8.0, -10.0, -10.0],
            },
        )
        .unwrap();

    let mut demand = OutputNode::new("demand1");
    demand.constraints.cost = Some("cost_curve_A".into());
    let decls = vec![NodeDeclaration::Output(demand)];

    let mut network = Network::new();
    configure(&decls, &mut network, Path::new("."), &mut table).unwrap();

    assert!(network.calls().contains(&BuilderCall::SetCost {
        name: "demand1".into(),
        sub_index: None,
        value: ConstraintValue::Parameter("cost_curve_A".into()),
    }));
    assert_eq!(set_cost_calls(&network), 1);
    assert_eq!(table.len(), 1);
    assert_eq!(table.names().collect::<Vec<_>>(), vec!["cost_curve_A"]);
}

#[test]
fn create_twice_fails_and_leaves_builder_unchanged() {
    let node = InputNode::new("reservoir1");
    let mut network = Network::new();

    node.create_nodes(&mut network).unwrap();
    let nodes_before = network.nodes().to_vec();

    let err = node.create_nodes(&mut network).unwrap_err();
    assert!(matches!(
        err,
        SchemaError::Network(NetworkError::DuplicateNode { ref name, sub_index: None }) if name == "reservoir1"
    ));
    assert_eq!(network.nodes(), nodes_before.as_slice());
}

#[test]
fn name_shared_by_different_node_kinds_is_a_duplicate() {
    let decls = vec![
        NodeDeclaration::Input(InputNode::new("reach")),
        NodeDeclaration::Delay(DelayNode::new("reach", 2)),
    ];
    let mut network = Network::new();
    let mut table = ParameterTable::new();

    let err = configure(&decls, &mut network, Path::new("."), &mut table).unwrap_err();

    assert!(matches!(
        err,
        SchemaError::Network(NetworkError::DuplicateNode { ref name, .. }) if name == "reach"
    ));
    assert_eq!(network.nodes().len(), 1);
    assert!(table.is_empty());
}

#[test]
fn delay_after_input_of_same_name_registers_nothing() {
    let mut network = Network::new();
    InputNode::new("reach").create_nodes(&mut network).unwrap();

    let err = DelayNode::new("reach", 1)
        .create_nodes(&mut network)
        .unwrap_err();
    assert!(matches!(
        err,
        SchemaError::Network(NetworkError::DuplicateNode { sub_index: Some(SubIndex(0)), .. })
    ));
    assert_eq!(network.nodes().len(), 1);

    let mut network = Network::new();
    DelayNode::new("reach", 1).create_nodes(&mut network).unwrap();
    let err = OutputNode::new("reach")
        .create_nodes(&mut network)
        .unwrap_err();
    assert!(matches!(
        err,
        SchemaError::Network(NetworkError::DuplicateNode { sub_index: None, .. })
    ));
    assert_eq!(network.nodes().len(), 2);
}

#[test]
fn derived_name_taken_by_named_parameter_is_a_collision() {
    let mut table = ParameterTable::new();
    table
        .insert("river-max-flow", ParameterDef::Constant { value: 1.0 })
        .unwrap();

    let mut reservoir = InputNode::new("river");
    reservoir.constraints.max_flow = Some(ParameterDef::Constant { value: 50.0 }.into());
    let decls = vec![NodeDeclaration::Input(reservoir)];

    let mut network = Network::new();
    let err = configure(&decls, &mut network, Path::new("."), &mut table).unwrap_err();

    assert!(matches!(
        err,
        SchemaError::Attribute {
            source: wr_params::ParameterError::NameCollision { .. },
            ..
        }
    ));
    assert_eq!(
        table.get("river-max-flow"),
        Some(&ParameterDef::Constant { value: 1.0 })
    );
}

#[test]
fn first_failure_aborts_the_pass() {
    let mut bad = OutputNode::new("demand1");
    bad.constraints.cost = Some("missing".into());
    let mut later = InputNode::new("reservoir1");
    later.constraints.max_flow = Some(ParameterDef::Constant { value: 4.0 }.into());
    let decls = vec![NodeDeclaration::Output(bad), NodeDeclaration::Input(later)];

    let mut network = Network::new();
    let mut table = ParameterTable::new();
    let err = configure(&decls, &mut network, Path::new("."), &mut table).unwrap_err();

    assert!(err.to_string().contains("missing"));
    // Both nodes were created; the second node's constraints were never applied.
    assert_eq!(network.nodes().len(), 2);
    assert!(table.is_empty());
}
