use sqlx::PgPool;
use std::sync::Arc;

use crate::dto::site_config_dto::{
    SiteConfigResponse, UpdateSiteConfigRequest, VideoUploadResponse,
};
use crate::repositories::site_config_repository::SiteConfigRepository;
use crate::services::activity_logger::record_activity;
use crate::services::storage_service::StorageService;
use crate::services::upload_service::{storage_filename, IncomingFile, VIDEO_POLICY};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct SiteConfigController {
    repository: SiteConfigRepository,
    pool: PgPool,
    storage: Arc<StorageService>,
}

impl SiteConfigController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: SiteConfigRepository::new(state.pool.clone()),
            pool: state.pool.clone(),
            storage: state.storage.clone(),
        }
    }

    pub async fn get(&self) -> Result<SiteConfigResponse, AppError> {
        let config = self.repository.get_or_create().await?;

        Ok(config.into())
    }

    pub async fn update(
        &self,
        request: UpdateSiteConfigRequest,
        admin: &str,
    ) -> Result<SiteConfigResponse, AppError> {
        let mut config = self.repository.get_or_create().await?;

        if let Some(video_url) = request.video_url {
            config.video_url = Some(video_url);
        }
        if let Some(hero_text) = request.home_hero_text {
            config.home_hero_text = Some(hero_text);
        }
        if let Some(contact_info) = request.contact_info {
            if let Some(address) = contact_info.address {
                config.contact_address = Some(address);
            }
            if let Some(phone) = contact_info.phone {
                config.contact_phone = Some(phone);
            }
            if let Some(email) = contact_info.email {
                config.contact_email = Some(email);
            }
            if let Some(working_hours) = contact_info.working_hours {
                config.working_hours = Some(working_hours);
            }
        }
        if let Some(social_media) = request.social_media {
            if let Some(facebook) = social_media.facebook {
                config.facebook = Some(facebook);
            }
            if let Some(instagram) = social_media.instagram {
                config.instagram = Some(instagram);
            }
            if let Some(twitter) = social_media.twitter {
                config.twitter = Some(twitter);
            }
        }

        let updated = self.repository.update(config).await?;

        record_activity(
            self.pool.clone(),
            "admin",
            "update-config",
            "Configuration du site mise à jour".to_string(),
            Some(admin.to_string()),
        );

        Ok(updated.into())
    }

    /// Remplacer la vidéo du site: stocker la nouvelle, puis supprimer
    /// l'ancienne en best-effort.
    pub async fn replace_video(
        &self,
        file: IncomingFile,
        admin: &str,
    ) -> Result<VideoUploadResponse, AppError> {
        let mut config = self.repository.get_or_create().await?;

        let key = format!(
            "{}/{}",
            VIDEO_POLICY.subdir,
            storage_filename(&file.original_name)
        );
        let stored = self.storage.store(&key, &file.data).await?;

        if let Some(old_url) = config.video_url.take() {
            if let Err(e) = self.storage.remove_by_url(&old_url).await {
                log::warn!("Ancienne vidéo '{}' non supprimée: {}", old_url, e);
            }
        }

        config.video_url = Some(stored.url.clone());
        self.repository.update(config).await?;

        record_activity(
            self.pool.clone(),
            "admin",
            "upload-video",
            format!("Vidéo du site remplacée ({})", file.original_name),
            Some(admin.to_string()),
        );

        Ok(VideoUploadResponse {
            message: "Video replaced successfully".to_string(),
            video_url: stored.url,
        })
    }
}
