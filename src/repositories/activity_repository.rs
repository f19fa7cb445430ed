use sqlx::PgPool;

use crate::models::activity::ActivityLogEntry;
use crate::utils::errors::AppError;

pub struct ActivityRepository {
    pool: PgPool,
}

impl ActivityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, entry: ActivityLogEntry) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO activity_log (id, entry_type, action, details, username, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(entry.id)
        .bind(entry.entry_type)
        .bind(entry.action)
        .bind(entry.details)
        .bind(entry.username)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_recent(&self, limit: i64) -> Result<Vec<ActivityLogEntry>, AppError> {
        let entries = sqlx::query_as::<_, ActivityLogEntry>(
            "SELECT * FROM activity_log ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }
}
