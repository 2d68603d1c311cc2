use std::sync::Arc;

use axum::extract::FromRef;

use crate::binder::Binder;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Request binder, built once from the configuration.
    pub binder: Arc<Binder>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let binder = Arc::new(Binder::from_config(&config));
        Self {
            config: Arc::new(config),
            binder,
        }
    }
}

impl FromRef<AppState> for Arc<Binder> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.binder)
    }
}
