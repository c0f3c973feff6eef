//! Domain models backing the HTTP surface.
//!
//! Each model mirrors one relational row shape; there is no long-lived
//! in-memory object graph - every request round-trips to the store.

pub mod cart;
pub mod feedback;
pub mod order;
pub mod product;
pub mod session;
pub mod user;

pub use cart::CartItem;
pub use feedback::{Feedback, NewFeedback};
pub use order::{NewOrderItem, Order, OrderItem};
pub use product::{NewProduct, Product};
pub use session::CurrentUser;
pub use user::User;
