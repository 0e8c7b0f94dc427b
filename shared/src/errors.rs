//! Shared error types for the calculator workspace

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SharedError {
    #[error("Deserialization failed: {message}")]
    DeserializationError { message: String },

    #[error("Response carries no result field")]
    MissingResult,

    #[error("Result is not a finite number: {value}")]
    NonNumericResult { value: String },

    #[error("Unknown operation: {input}")]
    UnknownOperation { input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
