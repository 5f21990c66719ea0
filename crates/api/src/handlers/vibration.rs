use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::response::IntoResponse;
use axum::Json;
use relia_core::classify::vibration;
use relia_core::measurement::{validate_rated_power, FoundationClass};
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;

/// Query parameters for `GET /vibration/limit` (`?power_kw=&foundation=`).
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub power_kw: f64,
    #[serde(default)]
    pub foundation: FoundationClass,
}

/// GET /api/v1/vibration/limit
///
/// Returns the velocity severity limit and warning threshold for a machine.
pub async fn get_limit(
    params: Result<Query<LimitParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    validate_rated_power(params.power_kw)?;

    let band = vibration::severity_band(params.power_kw, params.foundation);
    Ok(Json(DataResponse { data: band }))
}
