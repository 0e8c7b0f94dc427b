//! Calculator services implementations

pub mod arithmetic_client;

#[cfg(test)]
pub mod tests;

pub use arithmetic_client::*;
