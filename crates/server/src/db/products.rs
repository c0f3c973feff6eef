//! Product repository for catalog database operations.

use sqlx::SqlitePool;

use shoplite_core::ProductId;

use super::RepositoryError;
use crate::models::{NewProduct, Product};

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist one product row, returning it with its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, new: &NewProduct) -> Result<Product, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r"
            INSERT INTO products (name, description, price, category, image)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, name, description, price, category, image
            ",
        )
        .bind(&new.name)
        .bind(&new.description)
        .bind(&new.price)
        .bind(&new.category)
        .bind(new.image.as_deref())
        .fetch_one(self.pool)
        .await?;

        Ok(product)
    }

    /// All products in the store's natural order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, category, image FROM products",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, description, price, category, image
            FROM products
            WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    /// All products whose category matches exactly.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, description, price, category, image
            FROM products
            WHERE category = ?1
            ",
        )
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Substring search across name, description, and category.
    ///
    /// `LIKE` on `SQLite` is case-insensitive for ASCII, so the three OR'd
    /// predicates give a case-insensitive union.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn search(&self, term: &str) -> Result<Vec<Product>, RepositoryError> {
        let pattern = format!("%{term}%");

        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, description, price, category, image
            FROM products
            WHERE name LIKE ?1 OR description LIKE ?1 OR category LIKE ?1
            ",
        )
        .bind(&pattern)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }
}
