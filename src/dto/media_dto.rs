use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::media::MediaAsset;

/// Réponse actif média
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAssetResponse {
    pub id: Uuid,
    pub filename: String,
    pub url: String,
    #[serde(rename = "type")]
    pub file_type: String,
    pub size: i64,
    pub provider: String,
    pub created_at: DateTime<Utc>,
}

impl From<MediaAsset> for MediaAssetResponse {
    fn from(asset: MediaAsset) -> Self {
        Self {
            id: asset.id,
            filename: asset.filename,
            url: asset.url,
            file_type: asset.file_type,
            size: asset.size,
            provider: asset.provider,
            created_at: asset.created_at,
        }
    }
}
