//! Catalog service.
//!
//! Product creation, listing, category filtering, and substring search.
//! Beyond requiring the fields to be present (checked at the router
//! boundary), submitted values are stored as given - price and category
//! are not validated for type or range.

use sqlx::SqlitePool;

use shoplite_core::ProductId;

use crate::db::RepositoryError;
use crate::db::products::ProductRepository;
use crate::models::{NewProduct, Product};

/// Catalog service over the product repository.
pub struct CatalogService<'a> {
    products: ProductRepository<'a>,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            products: ProductRepository::new(pool),
        }
    }

    /// Persist one product, returning it with its store-assigned id.
    ///
    /// `new.image` is either `None` or a filename handle already issued by
    /// the blob store; the catalog never inspects file contents.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn add_product(&self, new: &NewProduct) -> Result<Product, RepositoryError> {
        self.products.create(new).await
    }

    /// All products, unfiltered, in the store's natural order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        self.products.get_all().await
    }

    /// Get a product by its ID, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        self.products.get_by_id(id).await
    }

    /// All products with an exactly matching category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError> {
        self.products.get_by_category(category).await
    }

    /// Case-insensitive substring search across name, description, and
    /// category (logical OR of the three predicates).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn search(&self, term: &str) -> Result<Vec<Product>, RepositoryError> {
        self.products.search(term).await
    }
}
