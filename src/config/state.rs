// Application state module
// Shared read-only state handed to every connection

use std::sync::atomic::AtomicBool;

use super::types::Config;

/// Application state
///
/// The dispatcher is stateless per request; this struct only carries the
/// loaded configuration plus cached values for lock-free access.
pub struct AppState {
    pub config: Config,

    // Cached config values for fast access without locks
    pub cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            cached_access_log: AtomicBool::new(config.logging.access_log),
        }
    }
}
