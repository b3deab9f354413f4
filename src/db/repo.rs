//! Repository layer for setup-time database operations.

use crate::domain::{SystemSetting, User};
use sqlx::sqlite::{SqliteConnection, SqlitePool};
use sqlx::Row;

/// Repository for database operations.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Insert a system setting row.
    ///
    /// Takes a connection so callers can group inserts into one transaction.
    /// No conflict clause: inserting an existing key is a constraint error.
    ///
    /// # Errors
    /// Returns an error if the insert fails, including uniqueness violations.
    pub async fn insert_setting(
        conn: &mut SqliteConnection,
        setting: &SystemSetting,
    ) -> Result<(), sqlx::Error> {
        // Value's Display renders compact JSON and cannot fail.
        let value_json = setting.setting_value.to_string();

        sqlx::query(
            r#"
            INSERT INTO system_settings (setting_key, setting_value, description, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&setting.setting_key)
        .bind(value_json)
        .bind(&setting.description)
        .bind(chrono::Utc::now().timestamp_millis())
        .execute(conn)
        .await?;

        Ok(())
    }

    /// Insert a user row.
    ///
    /// # Errors
    /// Returns an error if the insert fails, including uniqueness violations.
    pub async fn insert_user(conn: &mut SqliteConnection, user: &User) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO users (email, username, hashed_password, preferred_model, is_active, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.hashed_password)
        .bind(user.preferred_model.as_deref())
        .bind(user.is_active)
        .bind(chrono::Utc::now().timestamp_millis())
        .execute(conn)
        .await?;

        Ok(())
    }

    /// Fetch a system setting by key.
    ///
    /// # Errors
    /// Returns an error if the query fails or the stored payload is not JSON.
    pub async fn fetch_setting(&self, key: &str) -> Result<Option<SystemSetting>, sqlx::Error> {
        let row = sqlx::query(
            "SELECT setting_key, setting_value, description FROM system_settings WHERE setting_key = ?",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| {
            let value_json: String = row.get("setting_value");
            let setting_value = serde_json::from_str(&value_json)
                .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
            let description: Option<String> = row.get("description");
            Ok(SystemSetting {
                setting_key: row.get("setting_key"),
                setting_value,
                description: description.unwrap_or_default(),
            })
        })
        .transpose()
    }

    /// Fetch a user by email.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT email, username, hashed_password, preferred_model, is_active
            FROM users WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| User {
            email: row.get("email"),
            username: row.get("username"),
            hashed_password: row.get("hashed_password"),
            preferred_model: row.get("preferred_model"),
            is_active: row.get("is_active"),
        }))
    }

    /// Count rows in the system_settings table.
    pub async fn count_settings(&self) -> Result<i64, sqlx::Error> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM system_settings")
            .fetch_one(&self.pool)
            .await?;
        Ok(result.0)
    }

    /// Count rows in the users table.
    pub async fn count_users(&self) -> Result<i64, sqlx::Error> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(result.0)
    }
}
