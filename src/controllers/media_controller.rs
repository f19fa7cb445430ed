use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::dto::media_dto::MediaAssetResponse;
use crate::models::media::MediaAsset;
use crate::repositories::media_repository::MediaRepository;
use crate::services::activity_logger::record_activity;
use crate::services::storage_service::StorageService;
use crate::services::upload_service::{storage_filename, IncomingFile, MEDIA_POLICY};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct MediaController {
    repository: MediaRepository,
    pool: PgPool,
    storage: Arc<StorageService>,
}

impl MediaController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: MediaRepository::new(state.pool.clone()),
            pool: state.pool.clone(),
            storage: state.storage.clone(),
        }
    }

    pub async fn list(&self) -> Result<Vec<MediaAssetResponse>, AppError> {
        let assets = self.repository.find_all().await?;

        Ok(assets.into_iter().map(MediaAssetResponse::from).collect())
    }

    pub async fn upload(
        &self,
        files: Vec<IncomingFile>,
        admin: &str,
    ) -> Result<Vec<MediaAssetResponse>, AppError> {
        let mut assets = Vec::with_capacity(files.len());

        for file in files {
            let key = format!(
                "{}/{}",
                MEDIA_POLICY.subdir,
                storage_filename(&file.original_name)
            );
            let stored = self.storage.store(&key, &file.data).await?;

            let asset = MediaAsset {
                id: Uuid::new_v4(),
                filename: file.original_name.clone(),
                url: stored.url,
                file_type: file.extension(),
                size: file.data.len() as i64,
                provider: stored.provider.to_string(),
                created_at: Utc::now(),
            };

            let created = self.repository.insert(asset).await?;

            record_activity(
                self.pool.clone(),
                "admin",
                "upload-media",
                format!("Média '{}' ajouté", created.filename),
                Some(admin.to_string()),
            );

            assets.push(created.into());
        }

        Ok(assets)
    }

    /// Supprimer l'enregistrement puis le fichier en best-effort
    pub async fn delete(&self, id: Uuid, admin: &str) -> Result<(), AppError> {
        let asset = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Media asset not found".to_string()))?;

        self.repository.delete(id).await?;

        if let Err(e) = self.storage.remove_by_url(&asset.url).await {
            log::warn!("Fichier média '{}' non supprimé: {}", asset.url, e);
        }

        record_activity(
            self.pool.clone(),
            "admin",
            "delete-media",
            format!("Média '{}' supprimé", asset.filename),
            Some(admin.to_string()),
        );

        Ok(())
    }
}
