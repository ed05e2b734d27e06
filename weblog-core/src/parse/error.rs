use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line does not match the combined log format")]
    Malformed,

    #[error("invalid status code '{value}'")]
    InvalidStatus { value: String },

    #[error("invalid response size '{value}'")]
    InvalidBytes { value: String },
}
