//! Order repository.
//!
//! Placement writes the header and every line inside one transaction: the
//! order is visible with all of its lines or not at all.

use chrono::NaiveDate;
use sqlx::SqlitePool;

use shoplite_core::{OrderId, UserId};

use super::RepositoryError;
use crate::models::{NewOrderItem, Order, OrderItem};

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert an order header and all of its lines atomically.
    ///
    /// The transaction commits only if every line insert succeeds; any
    /// failure rolls the header back with it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any insert fails.
    pub async fn create_with_items(
        &self,
        user_id: UserId,
        total_amount: &str,
        date: NaiveDate,
        items: &[NewOrderItem],
    ) -> Result<OrderId, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let (order_id,): (OrderId,) = sqlx::query_as(
            r"
            INSERT INTO orders (user_id, total_amount, date)
            VALUES (?1, ?2, ?3)
            RETURNING id
            ",
        )
        .bind(user_id)
        .bind(total_amount)
        .bind(date)
        .fetch_one(&mut *tx)
        .await?;

        for item in items {
            sqlx::query(
                r"
                INSERT INTO order_items (order_id, product_id, quantity)
                VALUES (?1, ?2, ?3)
                ",
            )
            .bind(order_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(order_id)
    }

    /// All orders placed by one user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_user(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>(
            r"
            SELECT id, user_id, total_amount, date
            FROM orders
            WHERE user_id = ?1
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }

    /// All lines of one order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn items_for_order(
        &self,
        order_id: OrderId,
    ) -> Result<Vec<OrderItem>, RepositoryError> {
        let items = sqlx::query_as::<_, OrderItem>(
            r"
            SELECT order_id, product_id, quantity
            FROM order_items
            WHERE order_id = ?1
            ",
        )
        .bind(order_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }
}
