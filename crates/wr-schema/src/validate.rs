//! Network document validation.

use std::collections::HashSet;

use crate::document::{LATEST_VERSION, NetworkDocument};
use crate::nodes::NetworkNode;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate name: {name} in {context}")]
    DuplicateName { name: String, context: String },

    #[error("Empty name in {context}")]
    EmptyName { context: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

/// Structural checks that need no model builder.
///
/// Parameter references and derived-name collisions are only known once the
/// table is built and the nodes are configured, so they are reported then.
pub fn validate_document(document: &NetworkDocument) -> Result<(), ValidationError> {
    if document.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: document.version,
        });
    }

    let mut parameter_names = HashSet::new();
    for parameter in &document.parameters {
        if parameter.name.is_empty() {
            return Err(ValidationError::EmptyName {
                context: "parameters".to_string(),
            });
        }
        if !parameter_names.insert(parameter.name.as_str()) {
            return Err(ValidationError::DuplicateName {
                name: parameter.name.clone(),
                context: "parameters".to_string(),
            });
        }
    }

    let mut node_names = HashSet::new();
    for node in &document.nodes {
        if node.name().is_empty() {
            return Err(ValidationError::EmptyName {
                context: format!("{} nodes", node.kind_name()),
            });
        }
        if !node_names.insert(node.name()) {
            return Err(ValidationError::DuplicateName {
                name: node.name().to_string(),
                context: "nodes".to_string(),
            });
        }
    }

    Ok(())
}
