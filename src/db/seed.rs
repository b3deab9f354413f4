//! Default-data seeding.

use crate::db::Repository;
use crate::domain::{default_settings, demo_user};
use sqlx::sqlite::SqlitePool;
use tracing::info;

/// Insert the default system settings and the demo user.
///
/// All rows go in within a single transaction, committed once at the end.
/// There is no duplicate detection: running this against an already-seeded
/// store fails on the first UNIQUE constraint and the transaction rolls back
/// when dropped.
pub async fn init_database(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for setting in default_settings() {
        Repository::insert_setting(&mut *tx, &setting).await?;
    }

    Repository::insert_user(&mut *tx, &demo_user()).await?;

    tx.commit().await?;
    info!("Database initialized with default data");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_tables, init_db};
    use tempfile::TempDir;

    async fn open_seeded_db(temp_dir: &TempDir) -> SqlitePool {
        let db_path = temp_dir
            .path()
            .join("test.db")
            .to_string_lossy()
            .to_string();
        let pool = init_db(&db_path).await.expect("init_db failed");
        create_tables(&pool).await.expect("create_tables failed");
        init_database(&pool).await.expect("init_database failed");
        pool
    }

    #[tokio::test]
    async fn test_seed_inserts_expected_rows() {
        let temp_dir = TempDir::new().unwrap();
        let pool = open_seeded_db(&temp_dir).await;
        let repo = Repository::new(pool);

        assert_eq!(repo.count_settings().await.unwrap(), 4);
        assert_eq!(repo.count_users().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_second_seed_fails_and_rolls_back() {
        let temp_dir = TempDir::new().unwrap();
        let pool = open_seeded_db(&temp_dir).await;

        let result = init_database(&pool).await;
        assert!(result.is_err(), "duplicate seed should hit UNIQUE constraint");

        // The failed transaction must not leave partial rows behind.
        let repo = Repository::new(pool);
        assert_eq!(repo.count_settings().await.unwrap(), 4);
        assert_eq!(repo.count_users().await.unwrap(), 1);
    }
}
