//! Booking HTTP handlers

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;

use crate::application::{BookingService, BookingStore};
use crate::domain::BookingError;
use crate::interfaces::http::common::{ApiResponse, EmptyData, ValidatedJson};

use super::dto::*;

/// Application state for booking handlers.
#[derive(Clone)]
pub struct BookingAppState {
    pub service: Arc<BookingService>,
    pub store: Arc<BookingStore>,
    pub currency: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    tag = "Bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = ApiResponse<BookingDto>),
        (status = 400, description = "Invalid booking date"),
        (status = 402, description = "Card declined"),
        (status = 422, description = "Request validation failed"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create_booking(
    State(state): State<BookingAppState>,
    ValidatedJson(request): ValidatedJson<CreateBookingRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<BookingDto>>),
    (StatusCode, Json<ApiResponse<BookingDto>>),
> {
    let booking_date = match &request.booking_date {
        Some(raw) => Some(
            DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.with_timezone(&chrono::Utc))
                .map_err(|e| {
                    (
                        StatusCode::BAD_REQUEST,
                        Json(ApiResponse::error(format!("Invalid booking_date: {}", e))),
                    )
                })?,
        ),
        None => None,
    };

    let booking = state
        .service
        .book(request.charger, &request.card.into(), booking_date)
        .await
        .map_err(|e| match e {
            // the decline message goes to the user verbatim
            BookingError::Payment(payment) => (
                StatusCode::PAYMENT_REQUIRED,
                Json(ApiResponse::error(payment.to_string())),
            ),
            BookingError::Storage(storage) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(storage.to_string())),
            ),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(BookingDto::from_booking(
            booking,
            &state.currency,
        ))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    tag = "Bookings",
    responses(
        (status = 200, description = "All bookings, newest first", body = ApiResponse<Vec<BookingDto>>),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_bookings(
    State(state): State<BookingAppState>,
) -> Result<Json<ApiResponse<Vec<BookingDto>>>, (StatusCode, Json<ApiResponse<Vec<BookingDto>>>)> {
    let bookings = state.store.list().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        )
    })?;

    let dtos = bookings
        .into_iter()
        .map(|b| BookingDto::from_booking(b, &state.currency))
        .collect();

    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/bookings",
    tag = "Bookings",
    responses(
        (status = 200, description = "Collection cleared", body = ApiResponse<EmptyData>),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn clear_bookings(
    State(state): State<BookingAppState>,
) -> Result<Json<ApiResponse<EmptyData>>, (StatusCode, Json<ApiResponse<EmptyData>>)> {
    state.store.clear().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        )
    })?;

    Ok(Json(ApiResponse::success(EmptyData {})))
}
