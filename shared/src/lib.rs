//! Shared types for the fraction calculator
//!
//! Contains the wire contract with the remote arithmetic service plus the
//! process identity and logging helpers used by every binary in the workspace.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

// Re-export the wire contract with the arithmetic service
pub use messages::{OperationForm, OperationKind, OperationReply, ResultValue};
