use axum::routing::get;
use axum::Router;

use crate::handlers::vibration;
use crate::state::AppState;

/// Routes mounted at `/vibration`.
///
/// ```text
/// GET /limit        -> get_limit
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/limit", get(vibration::get_limit))
}
