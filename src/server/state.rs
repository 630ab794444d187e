//! Application state management.

use std::sync::Arc;

use crate::service::ReceiptService;

/// Shared application state.
#[derive(Clone, Default)]
pub struct AppState {
    service: Arc<ReceiptService>,
}

impl AppState {
    /// Create state backed by an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The receipt service shared by all handlers.
    pub fn service(&self) -> &ReceiptService {
        &self.service
    }
}
