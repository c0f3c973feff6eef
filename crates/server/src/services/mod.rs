//! Domain services.
//!
//! One service per domain: identity (`auth`), catalog, and commerce.
//! Services own the domain rules; routes only translate between HTTP and
//! service calls.

pub mod auth;
pub mod catalog;
pub mod commerce;

pub use auth::AuthService;
pub use catalog::CatalogService;
pub use commerce::CommerceService;
