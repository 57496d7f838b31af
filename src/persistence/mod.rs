//! Persistence layer: durable storage of product rows.
//!
//! [`ProductStore`] is the seam between the mutation service and storage.
//! The production implementation is PostgreSQL via `sqlx::PgPool`; an
//! in-memory implementation backs service and router tests.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::domain::{Product, ProductId};
use crate::error::CatalogError;

pub use memory::InMemoryProductStore;
pub use postgres::PostgresProductStore;

/// Durable table of product records.
///
/// `save` is dual-mode, keyed on whether the product carries an id: insert
/// when unset (the store assigns a new unique id), full-row update of the
/// existing id otherwise. There is no secondary indexing and no concurrency
/// token; concurrent updates to the same id are last-write-wins.
#[async_trait]
pub trait ProductStore: Send + Sync + std::fmt::Debug {
    /// Returns all products in stable id order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Persistence`] on storage failure.
    async fn find_all(&self) -> Result<Vec<Product>, CatalogError>;

    /// Returns the product with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ProductNotFound`] if the id is absent, or
    /// [`CatalogError::Persistence`] on storage failure.
    async fn find_by_id(&self, id: ProductId) -> Result<Product, CatalogError>;

    /// Returns all products whose category equals `category` exactly
    /// (case-sensitive), in stable id order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Persistence`] on storage failure.
    async fn find_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError>;

    /// Inserts the product if its id is unset, otherwise updates the full
    /// row of the existing id. Returns the persisted product with its id
    /// assigned.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ProductNotFound`] if an update targets an
    /// absent id, or [`CatalogError::Persistence`] on storage failure.
    async fn save(&self, product: Product) -> Result<Product, CatalogError>;

    /// Removes the product by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ProductNotFound`] if the id is absent or the
    /// product was never persisted, or [`CatalogError::Persistence`] on
    /// storage failure.
    async fn delete(&self, product: &Product) -> Result<(), CatalogError>;
}
