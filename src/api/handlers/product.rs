//! Product CRUD handlers: list, get, filter by category, create, update,
//! delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::ProductBody;
use crate::app_state::AppState;
use crate::domain::{Product, ProductId};
use crate::error::{CatalogError, ErrorResponse};

/// `GET /api/products` — List all products.
///
/// # Errors
///
/// Returns a [`CatalogError`] on storage failure.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    summary = "List all products",
    responses(
        (status = 200, description = "All products in stable id order", body = Vec<Product>),
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, CatalogError> {
    let products = state.product_service.list_products().await?;
    Ok(Json(products))
}

/// `GET /api/products/{id}` — Get a single product.
///
/// # Errors
///
/// Returns [`CatalogError::ProductNotFound`] if the product does not exist.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    summary = "Get a product by id",
    params(
        ("id" = i64, Path, description = "Product id"),
    ),
    responses(
        (status = 200, description = "Product details", body = Product),
        (status = 404, description = "Product not found", body = ErrorResponse),
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, CatalogError> {
    let product = state.product_service.get_product(ProductId::new(id)).await?;
    Ok(Json(product))
}

/// `GET /api/products/category/{category}` — List products in a category.
///
/// # Errors
///
/// Returns a [`CatalogError`] on storage failure.
#[utoipa::path(
    get,
    path = "/api/products/category/{category}",
    tag = "Products",
    summary = "List products by category",
    description = "Exact, case-sensitive category match. An unknown category yields an empty list.",
    params(
        ("category" = String, Path, description = "Category name"),
    ),
    responses(
        (status = 200, description = "Matching products", body = Vec<Product>),
    )
)]
pub async fn products_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, CatalogError> {
    let products = state.product_service.products_by_category(&category).await?;
    Ok(Json(products))
}

/// `POST /api/products` — Create a new product.
///
/// # Errors
///
/// Returns [`CatalogError::Validation`] on invalid field values.
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    summary = "Create a product",
    request_body = ProductBody,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Invalid field values", body = ErrorResponse),
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<ProductBody>,
) -> Result<impl IntoResponse, CatalogError> {
    let draft = body.into_draft()?;
    let product = state.product_service.create_product(draft).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// `PUT /api/products/{id}` — Replace all mutable fields of a product.
///
/// # Errors
///
/// Returns [`CatalogError::ProductNotFound`] if the product does not exist,
/// or [`CatalogError::Validation`] on invalid field values.
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    summary = "Update a product",
    description = "Full-state replacement of the five mutable fields; partial updates are unsupported.",
    params(
        ("id" = i64, Path, description = "Product id"),
    ),
    request_body = ProductBody,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Invalid field values", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<ProductBody>,
) -> Result<impl IntoResponse, CatalogError> {
    let draft = body.into_draft()?;
    let product = state
        .product_service
        .update_product(ProductId::new(id), draft)
        .await?;
    Ok(Json(product))
}

/// `DELETE /api/products/{id}` — Remove a product.
///
/// # Errors
///
/// Returns [`CatalogError::ProductNotFound`] if the product does not exist.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    summary = "Delete a product",
    params(
        ("id" = i64, Path, description = "Product id"),
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found", body = ErrorResponse),
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, CatalogError> {
    state
        .product_service
        .delete_product(ProductId::new(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Product resource routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/products/category/{category}", get(products_by_category))
}
