//! Database connection and schema creation.

use sqlx::sqlite::{SqliteConnection, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use tracing::info;

/// Open the SQLite database, creating the file and parent directory if needed.
pub async fn init_db(db_path: &str) -> Result<SqlitePool, sqlx::Error> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).ok();
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .after_connect(|conn, _meta| Box::pin(async move { configure_pragmas_conn(conn).await }))
        .connect(&format!("sqlite:{}?mode=rwc", db_path))
        .await?;

    info!("Database opened at {}", db_path);
    Ok(pool)
}

/// Create all tables from the embedded schema.
///
/// The schema uses `IF NOT EXISTS` throughout, so running this against an
/// already-initialized store is harmless. Seed data is a separate step.
pub async fn create_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Creating database tables...");
    let schema_sql = include_str!("schema.sql");

    for statement in schema_sql.split(';') {
        let trimmed = statement.trim();
        if !trimmed.is_empty() {
            sqlx::query(trimmed).execute(pool).await?;
        }
    }

    info!("Database tables created successfully");
    Ok(())
}

/// Configure SQLite pragmas on each pooled connection.
async fn configure_pragmas_conn(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    use sqlx::Row;

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&mut *conn)
        .await?;

    // journal_mode returns the mode actually set; must fetch the result row.
    let row = sqlx::query("PRAGMA journal_mode = WAL")
        .fetch_one(&mut *conn)
        .await?;
    let journal_mode: String = row.get(0);
    tracing::debug!("SQLite journal_mode set to: {}", journal_mode);

    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&mut *conn)
        .await?;
    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(&mut *conn)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn open_test_db(temp_dir: &TempDir) -> SqlitePool {
        let db_path = temp_dir
            .path()
            .join("test.db")
            .to_string_lossy()
            .to_string();
        init_db(&db_path).await.expect("init_db failed")
    }

    #[tokio::test]
    async fn test_init_db_creates_database_file() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir
            .path()
            .join("nested").join("test.db")
            .to_string_lossy()
            .to_string();

        let pool = init_db(&db_path).await.expect("init_db failed");
        assert!(Path::new(&db_path).exists());

        let result: (i64,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");
        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn test_create_tables_creates_both_tables() {
        let temp_dir = TempDir::new().unwrap();
        let pool = open_test_db(&temp_dir).await;
        create_tables(&pool).await.expect("create_tables failed");

        for table in ["system_settings", "users"] {
            let result: (String,) =
                sqlx::query_as("SELECT name FROM sqlite_master WHERE type='table' AND name=?")
                    .bind(table)
                    .fetch_one(&pool)
                    .await
                    .expect("table missing");
            assert_eq!(result.0, table);
        }
    }

    #[tokio::test]
    async fn test_create_tables_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let pool = open_test_db(&temp_dir).await;
        create_tables(&pool).await.expect("first run failed");
        create_tables(&pool).await.expect("second run failed");

        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM sqlite_master WHERE type='table'")
                .fetch_one(&pool)
                .await
                .expect("query failed");
        assert!(result.0 >= 2);
    }

    #[tokio::test]
    async fn test_pragmas_configured() {
        let temp_dir = TempDir::new().unwrap();
        let pool = open_test_db(&temp_dir).await;

        let result: (i64,) = sqlx::query_as("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .expect("query failed");
        assert_eq!(result.0, 1);

        let result: (String,) = sqlx::query_as("PRAGMA journal_mode")
            .fetch_one(&pool)
            .await
            .expect("query failed");
        // `journal_mode=WAL` is best-effort; SQLite can fall back depending on environment.
        assert!(
            matches!(result.0.as_str(), "wal" | "delete"),
            "unexpected journal_mode: {}",
            result.0
        );
    }
}
