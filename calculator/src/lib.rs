//! Calculator library for the fraction calculator client
//!
//! This library validates two operand inputs (decimals or simple fractions),
//! delegates addition and subtraction to a remote arithmetic service and
//! keeps the screen state a rendering surface draws from.

pub mod calculator_impl;
pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod session;
pub mod state;
pub mod traits;
pub mod types;

// Re-export main types
pub use calculator_impl::Calculator;
pub use config::CalculatorConfig;
pub use crate::core::{parse_operand, validate_operands, ParsedValue};
pub use error::{CalculatorError, CalculatorResult};
pub use services::RealArithmeticClient;
pub use traits::*;
pub use types::*;
pub use shared::OperationKind;
