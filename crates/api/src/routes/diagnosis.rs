//! Route definitions for diagnosis endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::diagnosis;
use crate::state::AppState;

/// Routes mounted at `/diagnosis`.
///
/// ```text
/// POST /            -> run_diagnosis
/// POST /context     -> recommend_for_context
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(diagnosis::run_diagnosis))
        .route("/context", post(diagnosis::recommend_for_context))
}
