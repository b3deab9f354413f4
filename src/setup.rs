//! One-shot database setup sequencing.

use crate::config::Config;
use crate::db::{create_tables, init_database, init_db};
use crate::error::SetupError;
use sqlx::sqlite::SqlitePool;
use tracing::info;

/// Perform the complete database setup: open the store, create tables,
/// insert seed data.
///
/// Steps run strictly in order and any failure aborts the remainder. There
/// is no rollback across steps: table creation that succeeded before a seed
/// failure stays in place.
pub async fn setup_database(config: &Config) -> Result<SqlitePool, SetupError> {
    info!("Setting up database at {}...", config.database_path);

    let pool = init_db(&config.database_path).await?;
    create_tables(&pool).await?;
    init_database(&pool).await?;

    info!("Database setup complete");
    Ok(pool)
}
