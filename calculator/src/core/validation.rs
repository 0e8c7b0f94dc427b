//! Operand validation precondition

use crate::core::parser::{parse_operand, ParsedValue};
use crate::error::{CalculatorError, CalculatorResult};
use crate::types::OperandField;

/// Shown when an operand is neither a number nor a well-formed fraction
pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid numbers or fractions.";

/// Shown for any failure talking to the arithmetic service
pub const SERVICE_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Check both operand texts and return their canonical values.
///
/// Empty operands are accepted as `0`. The first invalid operand, in field
/// order, is reported.
pub fn validate_operands(num1: &str, num2: &str) -> CalculatorResult<(f64, f64)> {
    let first = operand_value(OperandField::First, num1)?;
    let second = operand_value(OperandField::Second, num2)?;
    Ok((first, second))
}

fn operand_value(field: OperandField, text: &str) -> CalculatorResult<f64> {
    match parse_operand(text) {
        ParsedValue::Number(value) => Ok(value),
        ParsedValue::Invalid => Err(CalculatorError::Validation {
            field,
            input: text.to_string(),
        }),
    }
}
