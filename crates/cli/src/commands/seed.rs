//! Seed the catalog with sample products.
//!
//! Applies migrations, then inserts a small sample catalog so a fresh
//! install has something to show.

use tracing::info;

use shoplite_server::db::{self, ProductRepository};
use shoplite_server::models::NewProduct;

/// Sample catalog rows inserted by `shoplite seed`.
fn sample_products() -> Vec<NewProduct> {
    [
        ("Red Hat", "A warm knitted hat", "9.99", "clothing"),
        ("Wool Scarf", "Soft red fabric scarf", "14.50", "clothing"),
        ("Desk Lamp", "Adjustable LED lamp", "24.00", "home"),
        ("Mystery Box", "Contents unknown", "5.00", "reduced"),
    ]
    .into_iter()
    .map(|(name, description, price, category)| NewProduct {
        name: name.to_string(),
        description: description.to_string(),
        price: price.to_string(),
        category: category.to_string(),
        image: None,
    })
    .collect()
}

/// Seed the database.
///
/// # Errors
///
/// Returns an error if the environment is missing the database URL or a
/// database operation fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = super::database_url()?;

    let pool = db::create_pool(&database_url).await?;
    info!("Connected to database");

    // Make sure the schema exists before inserting
    shoplite_server::MIGRATOR.run(&pool).await?;

    let products = ProductRepository::new(&pool);
    let mut inserted = 0usize;
    for product in sample_products() {
        products.create(&product).await?;
        inserted += 1;
    }

    info!("Seeding complete! Products inserted: {inserted}");
    Ok(())
}
