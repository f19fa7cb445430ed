//! Modèle MediaAsset - mappe à la table `media_assets`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MediaAsset {
    pub id: Uuid,
    pub filename: String,
    pub url: String,
    pub file_type: String,
    pub size: i64,
    pub provider: String,
    pub created_at: DateTime<Utc>,
}
