//! Modèle Visitor - mappe à la table `visitors` (append-only)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Visitor {
    pub id: Uuid,
    pub ip: String,
    pub user_agent: Option<String>,
    pub page: String,
    pub visited_at: DateTime<Utc>,
}
