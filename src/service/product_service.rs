//! Product service: orchestrates store writes and event emission.

use std::sync::Arc;

use crate::domain::{ChangeKind, Product, ProductDraft, ProductEvent, ProductId};
use crate::emitter::EventEmitter;
use crate::error::CatalogError;
use crate::persistence::ProductStore;

/// Orchestration layer for all product operations.
///
/// Stateless coordinator: holds constructor-passed references to the
/// [`ProductStore`] for persistence and the [`EventEmitter`] for change
/// notifications. Every mutation follows the fixed sequence: validate →
/// store write → build event from the written state → best-effort publish.
/// The store write always commits before the publish, and a publish failure
/// never rolls back or fails the mutation.
#[derive(Debug, Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
    emitter: Arc<dyn EventEmitter>,
}

impl ProductService {
    /// Creates a new `ProductService`.
    #[must_use]
    pub fn new(store: Arc<dyn ProductStore>, emitter: Arc<dyn EventEmitter>) -> Self {
        Self { store, emitter }
    }

    /// Returns all products.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] on storage failure.
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        tracing::debug!("fetching all products");
        self.store.find_all().await
    }

    /// Returns the product with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ProductNotFound`] if the id is absent.
    pub async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        tracing::debug!(product_id = %id, "fetching product");
        self.store.find_by_id(id).await
    }

    /// Returns all products in the given category (exact match).
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] on storage failure.
    pub async fn products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, CatalogError> {
        tracing::debug!(category, "fetching products by category");
        self.store.find_by_category(category).await
    }

    /// Persists a new product and publishes a `CREATED` event.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] on storage failure. Emitter failures do
    /// not fail the mutation.
    pub async fn create_product(&self, draft: ProductDraft) -> Result<Product, CatalogError> {
        let saved = self.store.save(draft.into_product()).await?;
        self.publish_event(ChangeKind::Created, &saved).await;
        tracing::info!(product_id = ?saved.id, name = %saved.name, "product created");
        Ok(saved)
    }

    /// Replaces all mutable fields of an existing product and publishes an
    /// `UPDATED` event. The lookup happens before any write: a missing id
    /// fails the request without touching the store or the emitter.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ProductNotFound`] if the id is absent, or a
    /// [`CatalogError`] on storage failure.
    pub async fn update_product(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Product, CatalogError> {
        let existing = self.store.find_by_id(id).await?;
        let updated = self.store.save(draft.apply(existing)).await?;
        self.publish_event(ChangeKind::Updated, &updated).await;
        tracing::info!(product_id = %id, "product updated");
        Ok(updated)
    }

    /// Removes a product and publishes a `DELETED` event carrying the
    /// pre-delete snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ProductNotFound`] if the id is absent, or a
    /// [`CatalogError`] on storage failure.
    pub async fn delete_product(&self, id: ProductId) -> Result<(), CatalogError> {
        let product = self.store.find_by_id(id).await?;
        self.store.delete(&product).await?;
        self.publish_event(ChangeKind::Deleted, &product).await;
        tracing::info!(product_id = %id, "product deleted");
        Ok(())
    }

    /// Builds and publishes one change event for the given product,
    /// best-effort: delivery failures are logged and discarded so the
    /// mutation that triggered them still succeeds.
    async fn publish_event(&self, kind: ChangeKind, product: &Product) {
        let Some(id) = product.id else {
            tracing::warn!("skipping event for product without an id");
            return;
        };
        let event = ProductEvent::new(kind, id, product);
        match self.emitter.publish(&event).await {
            Ok(()) => {
                tracing::info!(product_id = %id, event_type = %kind, "published product event");
            }
            Err(err) => {
                tracing::error!(
                    product_id = %id,
                    event_type = %kind,
                    error = %err,
                    "failed to publish product event"
                );
            }
        }
    }
}
