//! Application state for the web layer.

use std::sync::Arc;

use crate::config::AppConfig;

/// Shared application state.
///
/// Sorting keeps no state between requests, so all handlers share is the
/// configuration.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
