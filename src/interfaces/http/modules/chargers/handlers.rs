//! Charger catalog handlers

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::application::ChargerDirectory;
use crate::interfaces::http::common::ApiResponse;

use super::dto::ChargerDto;

/// Application state for charger handlers.
#[derive(Clone)]
pub struct ChargerAppState {
    pub directory: Arc<ChargerDirectory>,
    pub currency: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/chargers",
    tag = "Chargers",
    responses(
        (status = 200, description = "Normalized charger catalog (possibly empty)", body = ApiResponse<Vec<ChargerDto>>),
        (status = 502, description = "Upstream catalog fetch failed", body = ApiResponse<Vec<ChargerDto>>)
    )
)]
pub async fn list_chargers(
    State(state): State<ChargerAppState>,
) -> Result<Json<ApiResponse<Vec<ChargerDto>>>, (StatusCode, Json<ApiResponse<Vec<ChargerDto>>>)> {
    // An empty upstream page is a 200 with an empty list; only a failed
    // fetch becomes 502 — the two cases stay distinguishable.
    let chargers = state.directory.fetch_chargers().await.map_err(|e| {
        (
            StatusCode::BAD_GATEWAY,
            Json(ApiResponse::error(e.to_string())),
        )
    })?;

    let dtos = chargers
        .into_iter()
        .map(|c| ChargerDto::from_charger(c, &state.currency))
        .collect();

    Ok(Json(ApiResponse::success(dtos)))
}
