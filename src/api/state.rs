//! Application state for the ROI engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded calculator configuration. It is read-only after startup,
/// so handlers share it through an `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded calculator configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}

impl Default for AppState {
    /// State backed by the standard configuration.
    fn default() -> Self {
        Self::new(ConfigLoader::standard())
    }
}
