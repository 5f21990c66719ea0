use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Holds immutable configuration only. Diagnosis is a pure function of the
/// request body, so there is no cache or per-request history here.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}
