//! Commerce service.
//!
//! Feedback recording, cart lines, transactional order placement, and
//! per-user order history.

use chrono::Utc;
use sqlx::SqlitePool;

use shoplite_core::{CartItemId, FeedbackId, OrderId, ProductId, UserId};

use crate::db::RepositoryError;
use crate::db::cart::CartRepository;
use crate::db::feedback::FeedbackRepository;
use crate::db::orders::OrderRepository;
use crate::models::{CartItem, Feedback, NewFeedback, NewOrderItem, Order};

/// Commerce service over the feedback, cart, and order repositories.
pub struct CommerceService<'a> {
    feedback: FeedbackRepository<'a>,
    cart: CartRepository<'a>,
    orders: OrderRepository<'a>,
}

impl<'a> CommerceService<'a> {
    /// Create a new commerce service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            feedback: FeedbackRepository::new(pool),
            cart: CartRepository::new(pool),
            orders: OrderRepository::new(pool),
        }
    }

    /// Record one feedback row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn add_feedback(&self, new: &NewFeedback) -> Result<FeedbackId, RepositoryError> {
        self.feedback.create(new).await
    }

    /// All feedback for one product. Unauthenticated read.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn feedback_for_product(
        &self,
        product_id: ProductId,
    ) -> Result<Vec<Feedback>, RepositoryError> {
        self.feedback.get_by_product(product_id).await
    }

    /// Add one line to a user's cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn add_to_cart(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<CartItemId, RepositoryError> {
        self.cart.add(user_id, product_id, quantity).await
    }

    /// All cart lines for one user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn cart_for_user(&self, user_id: UserId) -> Result<Vec<CartItem>, RepositoryError> {
        self.cart.get_by_user(user_id).await
    }

    /// Place an order: one header capturing today's date, plus one line per
    /// item, committed as a single all-or-nothing transaction.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any insert fails; no partial
    /// order is ever left behind.
    pub async fn place_order(
        &self,
        user_id: UserId,
        total_amount: &str,
        items: &[NewOrderItem],
    ) -> Result<OrderId, RepositoryError> {
        let date = Utc::now().date_naive();
        self.orders
            .create_with_items(user_id, total_amount, date, items)
            .await
    }

    /// All orders placed by one user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn orders_for_user(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError> {
        self.orders.get_by_user(user_id).await
    }
}
