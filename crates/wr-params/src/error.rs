//! Parameter errors.

use std::path::PathBuf;
use thiserror::Error;
use wr_core::WrError;

pub type ParameterResult<T> = Result<T, ParameterError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("Parameter `{name}` not found")]
    UnknownParameter { name: String },

    #[error("Parameter `{name}` already exists")]
    NameCollision { name: String },

    #[error("Data file for parameter `{name}` not found: {}", .path.display())]
    MissingDataFile { name: String, path: PathBuf },

    #[error("Data file for parameter `{name}` could not be read: {}: {kind}", .path.display())]
    UnreadableDataFile {
        name: String,
        path: PathBuf,
        kind: std::io::ErrorKind,
    },

    #[error("Invalid definition for parameter `{name}`: {source}")]
    Invalid { name: String, source: WrError },
}
