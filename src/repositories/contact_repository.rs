use sqlx::PgPool;
use uuid::Uuid;

use crate::models::contact::ContactMessage;
use crate::utils::errors::AppError;

pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, message: ContactMessage) -> Result<ContactMessage, AppError> {
        let created = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (id, name, email, phone, message, responded, created_at)
            VALUES ($1, $2, $3, $4, $5, FALSE, $6)
            RETURNING *
            "#,
        )
        .bind(message.id)
        .bind(message.name)
        .bind(message.email)
        .bind(message.phone)
        .bind(message.message)
        .bind(message.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn find_all(&self) -> Result<Vec<ContactMessage>, AppError> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            "SELECT * FROM contact_messages ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ContactMessage>, AppError> {
        let message =
            sqlx::query_as::<_, ContactMessage>("SELECT * FROM contact_messages WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(message)
    }

    pub async fn set_responded(
        &self,
        id: Uuid,
        responded: bool,
    ) -> Result<Option<ContactMessage>, AppError> {
        let message = sqlx::query_as::<_, ContactMessage>(
            "UPDATE contact_messages SET responded = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(responded)
        .fetch_optional(&self.pool)
        .await?;

        Ok(message)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
