//! Modèle ActivityLogEntry
//!
//! Piste d'audit append-only, écrite en effet de bord des mutations
//! administrateur. Jamais mise à jour.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Types d'entrées permis
pub const ACTIVITY_TYPES: &[&str] = &["admin", "vehicle", "message", "visitor"];

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogEntry {
    pub id: Uuid,
    pub entry_type: String,
    pub action: String,
    pub details: Option<String>,
    pub username: Option<String>,
    pub created_at: DateTime<Utc>,
}
