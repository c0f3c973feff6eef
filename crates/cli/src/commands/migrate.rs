//! Database migration command.
//!
//! Applies the embedded migrations from `crates/server/migrations/`.

use tracing::info;

use shoplite_server::db;

/// Run database migrations.
///
/// # Errors
///
/// Returns an error if the environment is missing the database URL, the
/// connection fails, or a migration fails to apply.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = super::database_url()?;

    info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    info!("Running migrations...");
    shoplite_server::MIGRATOR.run(&pool).await?;

    info!("Migrations complete!");
    Ok(())
}
