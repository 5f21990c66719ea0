//! Handlers for diagnosis endpoints.
//!
//! Both endpoints are pure: the response depends only on the request body.

use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use axum::Json;
use relia_core::context::DiagnosticContext;
use relia_core::diagnosis;
use relia_core::measurement::MeasurementRecord;

use crate::error::AppResult;
use crate::response::DataResponse;

/// POST /api/v1/diagnosis
///
/// Validate a measurement record, classify it, and return the full report
/// with the ordered recommendation list.
pub async fn run_diagnosis(
    payload: Result<Json<MeasurementRecord>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(record) = payload?;

    let report = diagnosis::diagnose(&record).inspect_err(|e| {
        tracing::warn!(error = %e, "Rejected measurement record");
    })?;

    tracing::info!(
        points = report.points.len(),
        limit_mm_s = report.vibration_limit_mm_s,
        vibration = ?report.context.vibration,
        bearing = ?report.context.bearing,
        recommendations = report.recommendations.len(),
        healthy = report.is_healthy(),
        "Diagnosis completed"
    );

    Ok(Json(DataResponse { data: report }))
}

/// POST /api/v1/diagnosis/context
///
/// Run the decision engine on statuses classified elsewhere. Absent fields
/// are treated as the status that fires no rule.
/// Unknown status strings are rejected at deserialization with a 400
/// `BAD_REQUEST`.
pub async fn recommend_for_context(
    payload: Result<Json<DiagnosticContext>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(context) = payload?;

    let recommendations = diagnosis::diagnose_context(&context);
    tracing::debug!(
        recommendations = recommendations.len(),
        "Recommendations generated from context"
    );

    Ok(Json(DataResponse {
        data: recommendations,
    }))
}
