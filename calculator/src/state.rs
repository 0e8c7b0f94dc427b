//! Calculator state management

use std::sync::Arc;
use tokio::sync::RwLock;
use crate::types::ScreenState;

/// Shared screen state wrapper
pub type SharedScreenState = Arc<RwLock<ScreenState>>;

/// Create new shared screen state
pub fn create_shared_state(state: ScreenState) -> SharedScreenState {
    Arc::new(RwLock::new(state))
}
