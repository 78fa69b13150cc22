use thiserror::Error;

pub type WrResult<T> = Result<T, WrError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WrError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
