//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::TrackerConfig;
use crate::sheets::SheetsClient;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the sheet export client. There is no database and no
/// cross-request session state; each cycle stands alone.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: TrackerConfig,
    sheets: SheetsClient,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: TrackerConfig) -> Self {
        let sheets = SheetsClient::new(&config.sheets);
        Self {
            inner: Arc::new(AppStateInner { config, sheets }),
        }
    }

    /// Get a reference to the tracker configuration.
    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.inner.config
    }

    /// Get a reference to the sheet export client.
    #[must_use]
    pub fn sheets(&self) -> &SheetsClient {
        &self.inner.sheets
    }
}
