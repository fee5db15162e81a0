//! Application state for the HTTP server.

use std::sync::Arc;

use crate::dataset::LaunchDataset;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Launch table loaded at startup; never written afterwards
    pub dataset: Arc<LaunchDataset>,
}

impl AppState {
    /// Create a new application state around a loaded dataset.
    pub fn new(dataset: Arc<LaunchDataset>) -> Self {
        Self { dataset }
    }
}

impl From<LaunchDataset> for AppState {
    fn from(dataset: LaunchDataset) -> Self {
        Self::new(Arc::new(dataset))
    }
}
