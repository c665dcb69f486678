//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::store::MemoryStore;

/// Shared application state.
///
/// Wraps the in-memory store in a read/write lock so concurrent handlers
/// see serialized mutations; the store itself is not synchronized.
#[derive(Clone, Default)]
pub struct AppState {
    store: Arc<RwLock<MemoryStore>>,
}

impl AppState {
    /// Creates a new application state with an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared store lock.
    pub fn store(&self) -> &RwLock<MemoryStore> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_clones_share_the_store() {
        let state = AppState::new();
        let clone = state.clone();

        state
            .store()
            .write()
            .await
            .register_admin("root", "$opaque")
            .unwrap();

        assert!(clone.store().read().await.admin().is_some());
    }
}
