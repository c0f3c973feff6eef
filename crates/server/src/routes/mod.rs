//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                         - Main page
//! GET  /health                   - Health check
//! GET  /health/ready             - Readiness check (store connectivity)
//!
//! # Catalog
//! POST /products                 - Add product (multipart, optional image)
//! GET  /products                 - All products
//! GET  /products/{id}            - Product by id
//! GET  /products/category/{category} - Products of one category
//! GET  /search/{term}            - Substring search across name/description/category
//!
//! # Identity
//! POST /login                    - Login (creates session)
//! POST /register                 - Register (creates session)
//! POST /logout                   - Destroy session, clear cookie
//! GET  /users/{id}               - Profile details (requires auth)
//! GET  /profile.html             - Profile page (requires auth, redirects)
//!
//! # Commerce
//! POST /feedback                 - Record feedback
//! GET  /feedback/{product_id}    - Feedback for a product
//! POST /orders                   - Place order (requires auth)
//! GET  /orders/{user_id}         - Order history (requires auth)
//! POST /addToCart                - Add a cart line (requires auth)
//! GET  /cart/{user_id}           - Cart lines (requires auth)
//! ```

pub mod auth;
pub mod cart;
pub mod feedback;
pub mod orders;
pub mod pages;
pub mod products;
pub mod search;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::index).post(products::create))
        .route("/products/{id}", get(products::show))
        .route("/products/category/{category}", get(products::by_category))
        .route("/search/{term}", get(search::search))
}

/// Create the identity routes router.
pub fn identity_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/logout", post(auth::logout))
        .route("/users/{id}", get(users::show))
}

/// Create the commerce routes router.
pub fn commerce_routes() -> Router<AppState> {
    Router::new()
        .route("/feedback", post(feedback::create))
        .route("/feedback/{product_id}", get(feedback::for_product))
        .route("/orders", post(orders::create))
        .route("/orders/{user_id}", get(orders::for_user))
        .route("/addToCart", post(cart::add))
        .route("/cart/{user_id}", get(cart::for_user))
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Pages
        .route("/", get(pages::main_page))
        .route("/profile.html", get(pages::profile_page))
        // Catalog routes
        .merge(catalog_routes())
        // Identity routes
        .merge(identity_routes())
        // Commerce routes
        .merge(commerce_routes())
}

/// Missing and empty-string form values both count as absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
