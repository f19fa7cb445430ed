use sqlx::PgPool;
use uuid::Uuid;

use crate::models::media::MediaAsset;
use crate::utils::errors::AppError;

pub struct MediaRepository {
    pool: PgPool,
}

impl MediaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, asset: MediaAsset) -> Result<MediaAsset, AppError> {
        let created = sqlx::query_as::<_, MediaAsset>(
            r#"
            INSERT INTO media_assets (id, filename, url, file_type, size, provider, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(asset.id)
        .bind(asset.filename)
        .bind(asset.url)
        .bind(asset.file_type)
        .bind(asset.size)
        .bind(asset.provider)
        .bind(asset.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn find_all(&self) -> Result<Vec<MediaAsset>, AppError> {
        let assets =
            sqlx::query_as::<_, MediaAsset>("SELECT * FROM media_assets ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(assets)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<MediaAsset>, AppError> {
        let asset = sqlx::query_as::<_, MediaAsset>("SELECT * FROM media_assets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(asset)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM media_assets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
