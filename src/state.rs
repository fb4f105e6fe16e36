//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the companion store behind a trait object so handlers run the same
//! against Postgres and the in-memory store.

use std::sync::Arc;

use crate::companion::CompanionStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the store is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CompanionStore>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn CompanionStore>) -> Self {
        Self { store }
    }
}


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
