use std::sync::Arc;

use mta_core::inventory::Inventory;
use mta_core::threshold::ConfigSource;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything lives behind `Arc` and is never mutated
/// after startup, so handlers read it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Host inventory loaded at startup.
    pub inventory: Arc<Inventory>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Where the per-request threshold is looked up.
    pub config_source: Arc<dyn ConfigSource + Send + Sync>,
}

impl AppState {
    pub fn new(
        inventory: Inventory,
        config: ServerConfig,
        config_source: Arc<dyn ConfigSource + Send + Sync>,
    ) -> Self {
        Self {
            inventory: Arc::new(inventory),
            config: Arc::new(config),
            config_source,
        }
    }
}
