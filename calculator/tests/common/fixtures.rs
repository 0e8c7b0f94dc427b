//! Test fixtures and data for calculator tests
//!
//! This module provides consistent test data used across all test suites.

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const INVALID_INPUT_MESSAGE: &'static str = "Please enter valid numbers or fractions.";
    pub const SERVICE_FAILURE_MESSAGE: &'static str = "Something went wrong. Please try again.";

    /// Operand texts that must be rejected before any request is sent
    pub fn invalid_operands() -> Vec<&'static str> {
        vec!["abc", "5/0", "2/0", "1/2/3", "-1/2", "1.5/2", "3 /4", "NaN", "inf", " ", "12abc"]
    }

    /// Operand texts paired with the value sent to the service
    pub fn valid_operands() -> Vec<(&'static str, f64)> {
        vec![
            ("", 0.0),
            ("3", 3.0),
            ("-2.5", -2.5),
            ("3/2", 1.5),
            ("1/4", 0.25),
            ("0", 0.0),
            ("1e2", 100.0),
        ]
    }

    /// Reply body in the shape the arithmetic service produces
    pub fn reply(operation: &str, num1: f64, num2: f64, result: &str) -> serde_json::Value {
        serde_json::json!({
            "operation": operation,
            "num1": num1,
            "num2": num2,
            "result": result,
        })
    }
}
