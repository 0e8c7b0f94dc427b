//! Pure calculator logic: operand parsing and validation

pub mod parser;
pub mod validation;

pub use parser::{parse_operand, ParsedValue};
pub use validation::{validate_operands, INVALID_INPUT_MESSAGE, SERVICE_FAILURE_MESSAGE};
