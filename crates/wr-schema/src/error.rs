use thiserror::Error;
use wr_network::NetworkError;
use wr_params::ParameterError;

use crate::nodes::NodeAttribute;
use crate::validate::ValidationError;

pub type SchemaResult<T> = Result<T, SchemaError>;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Node `{name}` has not been created")]
    NotCreated { name: String },

    #[error("Constraints on node `{name}` have already been applied")]
    AlreadyConstrained { name: String },

    #[error("Failed to resolve `{attribute}` on node `{node}`: {source}")]
    Attribute {
        node: String,
        attribute: NodeAttribute,
        source: ParameterError,
    },

    #[error("Model builder error: {0}")]
    Network(#[from] NetworkError),

    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
