//! Journal d'activité
//!
//! Écriture en dépose-et-oublie: l'insertion part dans une tâche
//! détachée, un échec est journalisé et avalé. Une mutation principale
//! ne doit jamais échouer à cause de sa trace d'audit.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::activity::ActivityLogEntry;
use crate::repositories::activity_repository::ActivityRepository;

pub fn record_activity(
    pool: PgPool,
    entry_type: &'static str,
    action: impl Into<String>,
    details: impl Into<String>,
    username: Option<String>,
) {
    let entry = ActivityLogEntry {
        id: Uuid::new_v4(),
        entry_type: entry_type.to_string(),
        action: action.into(),
        details: Some(details.into()),
        username,
        created_at: Utc::now(),
    };

    tokio::spawn(async move {
        let action = entry.action.clone();
        if let Err(e) = ActivityRepository::new(pool).insert(entry).await {
            log::warn!("Écriture du journal d'activité échouée ({}): {}", action, e);
        }
    });
}
