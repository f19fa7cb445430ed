use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::site_config::SiteConfig;

/// Coordonnées affichées sur le site
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfoDto {
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub working_hours: Option<String>,
}

/// Liens des réseaux sociaux
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SocialMediaDto {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
}

/// Réponse configuration du site (singleton)
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfigResponse {
    pub video_url: Option<String>,
    pub home_hero_text: Option<String>,
    pub contact_info: ContactInfoDto,
    pub social_media: SocialMediaDto,
    pub last_updated: DateTime<Utc>,
}

impl From<SiteConfig> for SiteConfigResponse {
    fn from(config: SiteConfig) -> Self {
        Self {
            video_url: config.video_url,
            home_hero_text: config.home_hero_text,
            contact_info: ContactInfoDto {
                address: config.contact_address,
                phone: config.contact_phone,
                email: config.contact_email,
                working_hours: config.working_hours,
            },
            social_media: SocialMediaDto {
                facebook: config.facebook,
                instagram: config.instagram,
                twitter: config.twitter,
            },
            last_updated: config.last_updated,
        }
    }
}

/// Mise à jour partielle de la configuration
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSiteConfigRequest {
    pub video_url: Option<String>,
    pub home_hero_text: Option<String>,
    pub contact_info: Option<ContactInfoDto>,
    pub social_media: Option<SocialMediaDto>,
}

/// Réponse de remplacement de la vidéo du site
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoUploadResponse {
    pub message: String,
    pub video_url: String,
}
