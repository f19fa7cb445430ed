use sqlx::PgPool;

use crate::models::site_config::{SiteConfig, SITE_CONFIG_ID};
use crate::utils::errors::AppError;

pub struct SiteConfigRepository {
    pool: PgPool,
}

impl SiteConfigRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lire la ligne singleton, en la créant si absente.
    /// L'upsert à clé fixe évite la création de doublons quand deux
    /// premières lectures arrivent en même temps.
    pub async fn get_or_create(&self) -> Result<SiteConfig, AppError> {
        sqlx::query("INSERT INTO site_config (id) VALUES ($1) ON CONFLICT (id) DO NOTHING")
            .bind(SITE_CONFIG_ID)
            .execute(&self.pool)
            .await?;

        let config = sqlx::query_as::<_, SiteConfig>("SELECT * FROM site_config WHERE id = $1")
            .bind(SITE_CONFIG_ID)
            .fetch_one(&self.pool)
            .await?;

        Ok(config)
    }

    /// Écrire la configuration fusionnée (dernier écrivain gagnant)
    pub async fn update(&self, config: SiteConfig) -> Result<SiteConfig, AppError> {
        let updated = sqlx::query_as::<_, SiteConfig>(
            r#"
            UPDATE site_config
            SET video_url = $2, home_hero_text = $3, contact_address = $4, contact_phone = $5,
                contact_email = $6, working_hours = $7, facebook = $8, instagram = $9,
                twitter = $10, last_updated = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(SITE_CONFIG_ID)
        .bind(config.video_url)
        .bind(config.home_hero_text)
        .bind(config.contact_address)
        .bind(config.contact_phone)
        .bind(config.contact_email)
        .bind(config.working_hours)
        .bind(config.facebook)
        .bind(config.instagram)
        .bind(config.twitter)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }
}
