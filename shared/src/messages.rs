//! Wire contract with the remote arithmetic service
//!
//! Requests are form-encoded `num1`/`num2` pairs posted to one endpoint per
//! operation. Replies are JSON objects whose `result` field is either a JSON
//! number or a numeric string (the service formats large and tiny values in
//! scientific notation, e.g. `"1.23e+07"`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{SharedError, SharedResult};

/// Arithmetic operations offered by the remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Add,
    Subtract,
}

impl OperationKind {
    /// Endpoint path relative to the service base URL
    pub fn endpoint(&self) -> &'static str {
        match self {
            OperationKind::Add => "/add/",
            OperationKind::Subtract => "/subtract/",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Add => write!(f, "add"),
            OperationKind::Subtract => write!(f, "subtract"),
        }
    }
}

impl FromStr for OperationKind {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" | "+" => Ok(OperationKind::Add),
            "subtract" | "sub" | "-" => Ok(OperationKind::Subtract),
            _ => Err(SharedError::UnknownOperation { input: s.to_string() }),
        }
    }
}

/// Form body sent to the arithmetic service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationForm {
    pub num1: String,
    pub num2: String,
}

impl OperationForm {
    /// Build the form from two canonical operand values
    pub fn new(num1: f64, num2: f64) -> Self {
        Self {
            num1: num1.to_string(),
            num2: num2.to_string(),
        }
    }
}

/// The `result` field of a reply, as sent by the service
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ResultValue {
    Number(f64),
    Text(String),
}

/// JSON reply of the arithmetic service. Fields other than `result` are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OperationReply {
    pub result: Option<ResultValue>,
}

impl OperationReply {
    /// Decode a reply body
    pub fn from_json(body: &str) -> SharedResult<Self> {
        serde_json::from_str(body).map_err(|e| SharedError::DeserializationError {
            message: e.to_string(),
        })
    }

    /// Extract the numeric result, rejecting missing and non-finite values
    pub fn numeric_result(&self) -> SharedResult<f64> {
        let value = match &self.result {
            Some(ResultValue::Number(n)) => *n,
            Some(ResultValue::Text(text)) => {
                text.trim()
                    .parse::<f64>()
                    .map_err(|_| SharedError::NonNumericResult { value: text.clone() })?
            }
            None => return Err(SharedError::MissingResult),
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(SharedError::NonNumericResult { value: value.to_string() })
        }
    }
}
