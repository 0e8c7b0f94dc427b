//! Calculator error types

use thiserror::Error;
use shared::SharedError;

use crate::types::OperandField;

/// Result type for calculator operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;

/// Calculator error types
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Invalid {field} operand: {input:?}")]
    Validation { field: OperandField, input: String },

    #[error("Request to arithmetic service failed: {message}")]
    Transport { message: String },

    #[error("Arithmetic service returned status {status}")]
    HttpStatus { status: u16 },

    #[error("Unreadable arithmetic service response: {message}")]
    ResponseFormat { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Task join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl CalculatorError {
    /// Short label used when tracing failures, so transport and format problems
    /// stay distinguishable in logs even though the user sees one message
    pub fn kind(&self) -> &'static str {
        match self {
            CalculatorError::Validation { .. } => "validation",
            CalculatorError::Transport { .. } => "transport",
            CalculatorError::HttpStatus { .. } => "http_status",
            CalculatorError::ResponseFormat { .. } => "response_format",
            CalculatorError::Config { .. } => "config",
            CalculatorError::Serialization { .. } => "serialization",
            CalculatorError::Io(_) => "io",
            CalculatorError::Join(_) => "join",
        }
    }

    /// Whether the failure came from talking to the remote service
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            CalculatorError::Transport { .. }
                | CalculatorError::HttpStatus { .. }
                | CalculatorError::ResponseFormat { .. }
        )
    }
}

impl From<SharedError> for CalculatorError {
    fn from(err: SharedError) -> Self {
        CalculatorError::ResponseFormat { message: err.to_string() }
    }
}
