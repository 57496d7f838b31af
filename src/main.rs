//! catalog-service server entry point.
//!
//! Starts the Axum HTTP server backed by PostgreSQL and a Kafka producer.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use catalog_service::api;
use catalog_service::app_state::AppState;
use catalog_service::config::CatalogConfig;
use catalog_service::emitter::{EventEmitter, KafkaEventEmitter};
use catalog_service::persistence::{PostgresProductStore, ProductStore};
use catalog_service::service::ProductService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = CatalogConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting catalog-service");

    // Connect to PostgreSQL and apply migrations
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
        .connect(&config.database_url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Build the store, emitter, and service layers
    let store: Arc<dyn ProductStore> = Arc::new(PostgresProductStore::new(pool));
    let emitter: Arc<dyn EventEmitter> = Arc::new(KafkaEventEmitter::new(&config)?);
    let product_service = Arc::new(ProductService::new(store, emitter));

    // Build application state
    let app_state = AppState { product_service };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
