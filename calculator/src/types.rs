//! Calculator data types

use std::fmt;
use serde::{Deserialize, Serialize};
use shared::OperationKind;

/// Which of the two operand inputs a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperandField {
    First,
    Second,
}

impl fmt::Display for OperandField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandField::First => write!(f, "first"),
            OperandField::Second => write!(f, "second"),
        }
    }
}

/// View-state of one calculator screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenState {
    pub num1_text: String,
    pub num2_text: String,
    pub result: f64,
    pub has_result: bool,
    pub error_message: String,
}

/// Phase of the screen derived from its state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Error,
    Settled,
}

impl ScreenState {
    /// Create the state a freshly mounted screen starts with
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if !self.error_message.is_empty() {
            Phase::Error
        } else if self.has_result {
            Phase::Settled
        } else {
            Phase::Idle
        }
    }

    /// Result line as the surface shows it, if there is one
    pub fn display_result(&self) -> Option<String> {
        self.has_result.then(|| format!("= {}", self.result))
    }

    /// Error line as the surface shows it, if there is one
    pub fn display_error(&self) -> Option<&str> {
        (!self.error_message.is_empty()).then_some(self.error_message.as_str())
    }

    /// Text of the given operand input
    pub fn operand_text(&self, field: OperandField) -> &str {
        match field {
            OperandField::First => &self.num1_text,
            OperandField::Second => &self.num2_text,
        }
    }

    pub(crate) fn settle_success(&mut self, value: f64) {
        self.result = value;
        self.has_result = true;
        self.error_message.clear();
    }

    pub(crate) fn settle_failure(&mut self, message: &str) {
        self.has_result = false;
        self.error_message = message.to_string();
    }
}

/// A validated request for the arithmetic service
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperationRequest {
    pub kind: OperationKind,
    pub num1: f64,
    pub num2: f64,
}

impl OperationRequest {
    pub fn new(kind: OperationKind, num1: f64, num2: f64) -> Self {
        Self { kind, num1, num2 }
    }
}
