//! One-shot sample-data bootstrap for local development and demos.
//!
//! Connects to the configured database, applies migrations, and inserts a
//! small set of sample products — but only when the table is empty. Writes
//! go straight through the store; no change events are published. The
//! service itself never depends on this binary having run.

use std::sync::Arc;

use rust_decimal::Decimal;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use catalog_service::config::CatalogConfig;
use catalog_service::domain::ProductDraft;
use catalog_service::persistence::{PostgresProductStore, ProductStore};

const SAMPLE_PRODUCTS: &[(&str, &str, &str, i32)] = &[
    ("Laptop", "High-performance laptop", "999.99", 50),
    ("Smartphone", "Latest model smartphone", "699.99", 100),
    ("Headphones", "Wireless noise-cancelling headphones", "199.99", 75),
    ("Monitor", "4K UHD monitor", "399.99", 30),
    ("Keyboard", "Mechanical gaming keyboard", "149.99", 60),
    ("Mouse", "Wireless gaming mouse", "79.99", 80),
    ("Tablet", "10-inch tablet", "499.99", 40),
    ("Smart Watch", "Fitness tracking smart watch", "299.99", 55),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = CatalogConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&config.database_url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let store: Arc<dyn ProductStore> = Arc::new(PostgresProductStore::new(pool));

    let existing = store.find_all().await?;
    if !existing.is_empty() {
        tracing::info!(
            count = existing.len(),
            "product table already populated, skipping seed"
        );
        return Ok(());
    }

    tracing::info!("seeding product table with sample data");
    for (name, description, price, stock) in SAMPLE_PRODUCTS {
        let price: Decimal = price.parse()?;
        let draft = ProductDraft::new(
            (*name).to_string(),
            Some((*description).to_string()),
            price,
            *stock,
            "Electronics".to_string(),
        )?;
        let saved = store.save(draft.into_product()).await?;
        tracing::info!(product_id = ?saved.id, name = %saved.name, "seeded product");
    }

    let count = store.find_all().await?.len();
    tracing::info!(count, "product table seeded");

    Ok(())
}
