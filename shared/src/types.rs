//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Global process ID singleton - set once at startup
static PROCESS_ID: OnceLock<ProcessId> = OnceLock::new();

/// Identifies which rendering surface is driving the calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessId {
    /// Line-oriented session that keeps one screen state alive
    #[default]
    Interactive,
    /// Single operation driven from command-line arguments
    OneShot,
}

impl ProcessId {
    /// Initialize the global process ID for an interactive session
    pub fn init_interactive() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::Interactive)
    }

    /// Initialize the global process ID for a one-shot invocation
    pub fn init_one_shot() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::OneShot)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessId::Interactive => write!(f, "calculator_interactive"),
            ProcessId::OneShot => write!(f, "calculator_oneshot"),
        }
    }
}
