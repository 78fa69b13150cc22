//! Builder error types.

use thiserror::Error;
use wr_core::{SubIndex, WrError, display_sub_index};

pub type NetworkResult<T> = Result<T, NetworkError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    #[error("Node with name `{name}` and sub-index `{}` already exists", display_sub_index(.sub_index))]
    DuplicateNode {
        name: String,
        sub_index: Option<SubIndex>,
    },

    #[error("Node with name `{name}` and sub-index `{}` not found", display_sub_index(.sub_index))]
    NodeNotFound {
        name: String,
        sub_index: Option<SubIndex>,
    },

    #[error("Cannot register node `{name}`: {source}")]
    Capacity { name: String, source: WrError },
}
