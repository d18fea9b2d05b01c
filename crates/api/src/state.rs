use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; holds nothing mutable. Migration handling itself is
/// stateless.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (read by the router builder).
    pub config: Arc<ServerConfig>,
    /// When the process started serving, for the health probe.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }
}
