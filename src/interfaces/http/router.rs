//! API router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::get,
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{BookingService, BookingStore, ChargerDirectory, UsageReport};
use crate::application::stats::{CountBucket, SpendBucket};
use crate::config::AppConfig;
use crate::domain::Coordinates;
use crate::infrastructure::storage::KeyValueStore;
use crate::interfaces::http::common::{ApiResponse, EmptyData};

use super::modules::{bookings, chargers, health, metrics, stats};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::handlers::health_check,
        chargers::handlers::list_chargers,
        bookings::handlers::create_booking,
        bookings::handlers::list_bookings,
        bookings::handlers::clear_bookings,
        stats::handlers::usage_stats,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            EmptyData,
            // Chargers
            chargers::ChargerDto,
            Coordinates,
            // Bookings
            bookings::CreateBookingRequest,
            bookings::CardDetailsDto,
            bookings::BookingDto,
            // Statistics
            UsageReport,
            CountBucket,
            SpendBucket,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
        )
    ),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Chargers", description = "Normalized charging-point catalog from the open-data provider"),
        (name = "Bookings", description = "Slot reservations with simulated card payment"),
        (name = "Statistics", description = "Aggregate usage metrics over the booking collection"),
    ),
    info(
        title = "PlugPoint Charging Service API",
        version = "0.1.0",
        description = "Browse EV charging points, reserve a slot with a simulated card payment, and review usage statistics",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    directory: Arc<ChargerDirectory>,
    booking_service: Arc<BookingService>,
    booking_store: Arc<BookingStore>,
    store: Arc<dyn KeyValueStore>,
    config: &AppConfig,
    prometheus_handle: PrometheusHandle,
) -> Router {
    let charger_state = chargers::ChargerAppState {
        directory,
        currency: config.pricing.currency.clone(),
    };

    let booking_state = bookings::BookingAppState {
        service: booking_service,
        store: booking_store.clone(),
        currency: config.pricing.currency.clone(),
    };

    let stats_state = stats::StatsAppState {
        store: booking_store,
        estimates: config.estimates.clone(),
    };

    let health_state = health::HealthState {
        store,
        started_at: Arc::new(Instant::now()),
    };

    let metrics_state = metrics::MetricsState {
        handle: prometheus_handle,
    };

    // CORS is permissive: any origin, method and header (no auth surface).
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/chargers", get(chargers::list_chargers).with_state(charger_state))
        .route(
            "/bookings",
            get(bookings::list_bookings)
                .post(bookings::create_booking)
                .delete(bookings::clear_bookings)
                .with_state(booking_state),
        )
        .route("/stats/usage", get(stats::usage_stats).with_state(stats_state));

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .nest("/api/v1", api_routes)
        .route("/health", get(health::health_check).with_state(health_state))
        .route(
            "/metrics",
            get(metrics::prometheus_metrics).with_state(metrics_state),
        )
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

// ── Tests ──────────────────────────────────────────────────────
