//! PostgreSQL implementation of the persistence layer.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use super::ProductStore;
use crate::domain::{Product, ProductId};
use crate::error::CatalogError;

/// One `products` row as fetched from the database.
type ProductRow = (i64, String, Option<String>, Decimal, i32, String);

fn row_to_product(row: ProductRow) -> Product {
    let (id, name, description, price, stock_quantity, category) = row;
    Product {
        id: Some(ProductId::new(id)),
        name,
        description,
        price,
        stock_quantity,
        category,
    }
}

/// PostgreSQL-backed product store using `sqlx::PgPool`.
///
/// Each mutating statement runs inside an explicit scoped transaction:
/// begin, execute, commit. Any early error return drops the transaction,
/// which rolls back. The event publish never sits inside that boundary.
#[derive(Debug, Clone)]
pub struct PostgresProductStore {
    pool: PgPool,
}

impl PostgresProductStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PostgresProductStore {
    async fn find_all(&self) -> Result<Vec<Product>, CatalogError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price, stock_quantity, category \
             FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CatalogError::Persistence(e.to_string()))?;

        Ok(rows.into_iter().map(row_to_product).collect())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Product, CatalogError> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price, stock_quantity, category \
             FROM products WHERE id = $1",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CatalogError::Persistence(e.to_string()))?;

        row.map(row_to_product)
            .ok_or(CatalogError::ProductNotFound(id))
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price, stock_quantity, category \
             FROM products WHERE category = $1 ORDER BY id",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CatalogError::Persistence(e.to_string()))?;

        Ok(rows.into_iter().map(row_to_product).collect())
    }

    async fn save(&self, product: Product) -> Result<Product, CatalogError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| CatalogError::Persistence(e.to_string()))?;

        let saved = match product.id {
            Some(id) => {
                let result = sqlx::query(
                    "UPDATE products \
                     SET name = $1, description = $2, price = $3, stock_quantity = $4, category = $5 \
                     WHERE id = $6",
                )
                .bind(&product.name)
                .bind(&product.description)
                .bind(product.price)
                .bind(product.stock_quantity)
                .bind(&product.category)
                .bind(id.get())
                .execute(&mut *tx)
                .await
                .map_err(|e| CatalogError::Persistence(e.to_string()))?;

                if result.rows_affected() == 0 {
                    return Err(CatalogError::ProductNotFound(id));
                }
                product
            }
            None => {
                let id = sqlx::query_scalar::<_, i64>(
                    "INSERT INTO products (name, description, price, stock_quantity, category) \
                     VALUES ($1, $2, $3, $4, $5) RETURNING id",
                )
                .bind(&product.name)
                .bind(&product.description)
                .bind(product.price)
                .bind(product.stock_quantity)
                .bind(&product.category)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| CatalogError::Persistence(e.to_string()))?;

                Product {
                    id: Some(ProductId::new(id)),
                    ..product
                }
            }
        };

        tx.commit()
            .await
            .map_err(|e| CatalogError::Persistence(e.to_string()))?;

        Ok(saved)
    }

    async fn delete(&self, product: &Product) -> Result<(), CatalogError> {
        let Some(id) = product.id else {
            return Err(CatalogError::Validation(
                "cannot delete a product that was never persisted".to_string(),
            ));
        };

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| CatalogError::Persistence(e.to_string()))?;

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.get())
            .execute(&mut *tx)
            .await
            .map_err(|e| CatalogError::Persistence(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::ProductNotFound(id));
        }

        tx.commit()
            .await
            .map_err(|e| CatalogError::Persistence(e.to_string()))?;

        Ok(())
    }
}
