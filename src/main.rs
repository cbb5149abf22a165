//! PlugPoint charging service entrypoint
//!
//! REST service over the charger catalog / booking / statistics pipeline.
//! Reads configuration from TOML file (~/.config/plugpoint/config.toml).

use std::sync::Arc;

use tracing::{error, info};

use plugpoint::application::{BookingService, BookingStore, ChargerDirectory, Normalizer};
use plugpoint::config::StorageDriver;
use plugpoint::infrastructure::storage::{FileStore, InMemoryStore, KeyValueStore};
use plugpoint::infrastructure::{OpenDataClient, SimulatedCardGateway};
use plugpoint::shared::{listen_for_shutdown_signals, ShutdownSignal};
use plugpoint::{create_api_router, default_config_path, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("PLUGPOINT_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting PlugPoint charging service...");

    // ── Prometheus metrics recorder (must be installed before any metrics calls) ──
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    info!("📊 Prometheus metrics recorder installed");

    // ── Storage backend ────────────────────────────────────────
    let store: Arc<dyn KeyValueStore> = match app_cfg.storage.driver {
        StorageDriver::File => {
            let data_dir = app_cfg.storage.data_dir();
            info!("Storage: file driver at {}", data_dir.display());
            Arc::new(FileStore::new(data_dir))
        }
        StorageDriver::Memory => {
            info!("Storage: in-memory driver (contents are lost on restart)");
            Arc::new(InMemoryStore::new())
        }
    };

    // ── Pipeline wiring ────────────────────────────────────────
    let catalog_client = Arc::new(OpenDataClient::new(&app_cfg.catalog));
    let normalizer = Normalizer::new(&app_cfg.catalog, app_cfg.pricing.clone());
    let directory = Arc::new(ChargerDirectory::new(catalog_client, normalizer));
    info!("Catalog endpoint: {}", app_cfg.catalog.endpoint_url);

    let booking_store = Arc::new(BookingStore::new(
        store.clone(),
        app_cfg.storage.bookings_key.clone(),
    ));
    let gateway = Arc::new(SimulatedCardGateway::new(&app_cfg.payment));
    let booking_service = Arc::new(BookingService::new(gateway, booking_store.clone()));
    info!(
        "💳 Simulated payment gateway ready ({}ms settlement delay)",
        app_cfg.payment.settlement_delay_ms
    );

    // ── Shutdown handling ──────────────────────────────────────
    let shutdown = ShutdownSignal::new();
    tokio::spawn(listen_for_shutdown_signals(shutdown.clone()));

    // ── REST API server ────────────────────────────────────────
    let router = create_api_router(
        directory,
        booking_service,
        booking_store,
        store,
        &app_cfg,
        prometheus_handle,
    );

    let addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST API server listening on http://{}", addr);
    info!("Swagger UI available at http://{}/docs/", addr);

    let serve_shutdown = shutdown.clone();
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            serve_shutdown.wait().await;
            info!("🛑 REST API server received shutdown signal");
        })
        .await?;

    info!("✅ Shutdown complete");
    Ok(())
}
