//! HTTP endpoints — inbound SMS webhook and report lookup.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::{error, warn};

use crate::error::PipelineError;
use crate::pipeline::processor::ReportProcessor;
use crate::pipeline::types::InboundMessage;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<ReportProcessor>,
    /// Cap on `GET /reports`.
    pub list_limit: usize,
}

/// Build the Axum router.
pub fn routes(processor: Arc<ReportProcessor>, list_limit: usize) -> Router {
    let state = AppState {
        processor,
        list_limit,
    };

    Router::new()
        .route("/health", get(health))
        .route("/sms", post(receive_sms))
        .route("/reports", get(list_reports))
        .route("/reports/{id}", get(get_report))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ── Health ──────────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "civic-sms"
    }))
}

// ── Inbound SMS ─────────────────────────────────────────────────────────

async fn receive_sms(
    State(state): State<AppState>,
    Json(message): Json<InboundMessage>,
) -> impl IntoResponse {
    match state.processor.process(&message).await {
        Ok(report) => (
            StatusCode::CREATED,
            Json(json!({
                "message": "Report created",
                "reportId": report.id,
                "issueType": report.issue_type,
                "address": report.issue_address,
            })),
        ),
        Err(PipelineError::EmptyBody) => {
            warn!("Rejected inbound SMS with no message body");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "No message body" })),
            )
        }
        Err(e) => {
            error!(error = %e, "Failed to create report from SMS");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to create report" })),
            )
        }
    }
}

// ── Reports ─────────────────────────────────────────────────────────────

async fn list_reports(State(state): State<AppState>) -> impl IntoResponse {
    match state.processor.store().list_reports(state.list_limit).await {
        Ok(reports) => (StatusCode::OK, Json(json!(reports))),
        Err(e) => {
            error!(error = %e, "Failed to list reports");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to list reports" })),
            )
        }
    }
}

async fn get_report(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.processor.store().get_report(&id).await {
        Ok(Some(report)) => (StatusCode::OK, Json(json!(report))),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Report not found" })),
        ),
        Err(e) => {
            error!(report_id = %id, error = %e, "Failed to load report");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to load report" })),
            )
        }
    }
}
