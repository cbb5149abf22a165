//! Usage statistics handler

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::application::{BookingStore, UsageReport};
use crate::config::EstimateConfig;
use crate::interfaces::http::common::ApiResponse;

/// Application state for the statistics handler.
#[derive(Clone)]
pub struct StatsAppState {
    pub store: Arc<BookingStore>,
    pub estimates: EstimateConfig,
}

#[utoipa::path(
    get,
    path = "/api/v1/stats/usage",
    tag = "Statistics",
    responses(
        (status = 200, description = "Usage report over the current booking collection", body = ApiResponse<UsageReport>),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn usage_stats(
    State(state): State<StatsAppState>,
) -> Result<Json<ApiResponse<UsageReport>>, (StatusCode, Json<ApiResponse<UsageReport>>)> {
    // Recomputed from the snapshot on every call, nothing is cached.
    let bookings = state.store.list().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        )
    })?;

    let report = UsageReport::from_bookings(&bookings, &state.estimates);
    Ok(Json(ApiResponse::success(report)))
}
