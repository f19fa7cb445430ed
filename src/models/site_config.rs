//! Modèle SiteConfig
//!
//! Enregistrement singleton: une seule ligne, clé fixe `id = 1`.
//! Créé paresseusement à la première lecture via INSERT ... ON CONFLICT.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Clé fixe de la ligne singleton
pub const SITE_CONFIG_ID: i16 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SiteConfig {
    pub id: i16,
    pub video_url: Option<String>,
    pub home_hero_text: Option<String>,
    pub contact_address: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub working_hours: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub last_updated: DateTime<Utc>,
}
