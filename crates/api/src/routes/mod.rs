pub mod diagnosis;
pub mod health;
pub mod vibration;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /diagnosis                   full diagnosis of a measurement record (POST)
/// /diagnosis/context           decision engine on a pre-classified context (POST)
///
/// /vibration/limit             severity limit for power + foundation (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/diagnosis", diagnosis::router())
        .nest("/vibration", vibration::router())
}
