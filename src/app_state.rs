//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::ProductService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Product service for all business logic.
    pub product_service: Arc<ProductService>,
}
