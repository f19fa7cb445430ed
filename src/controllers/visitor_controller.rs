//! Enregistreur de visites
//!
//! L'enregistrement ne remonte jamais d'erreur à l'appelant: un échec
//! de persistance est journalisé et avalé, la réponse est toujours un
//! succès. Les pages de la liste de surveillance déclenchent une
//! notification asynchrone.

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::dto::visitor_dto::VisitorStatsResponse;
use crate::models::visitor::Visitor;
use crate::repositories::visitor_repository::VisitorRepository;
use crate::services::notification_service::NotificationService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct VisitorController {
    repository: VisitorRepository,
    notifier: Arc<NotificationService>,
    watched_pages: Vec<String>,
}

/// Une page est surveillée si elle est égale à une entrée de la liste
/// ou si elle en est un descendant de chemin.
pub fn is_watched_page(page: &str, watched_pages: &[String]) -> bool {
    watched_pages.iter().any(|watched| {
        let watched = watched.trim_end_matches('/');
        page == watched || page.starts_with(&format!("{}/", watched))
    })
}

impl VisitorController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: VisitorRepository::new(state.pool.clone()),
            notifier: state.notifier.clone(),
            watched_pages: state.config.watched_pages.clone(),
        }
    }

    pub async fn record(
        &self,
        ip: String,
        user_agent: Option<String>,
        page: String,
    ) -> serde_json::Value {
        let visitor = Visitor {
            id: Uuid::new_v4(),
            ip: ip.clone(),
            user_agent,
            page: page.clone(),
            visited_at: Utc::now(),
        };

        if let Err(e) = self.repository.insert(visitor).await {
            log::warn!("Enregistrement de visite échoué pour '{}': {}", page, e);
        }

        if is_watched_page(&page, &self.watched_pages) {
            self.notifier.notify_visit(page, ip);
        }

        serde_json::json!({ "success": true })
    }

    pub async fn stats(&self) -> Result<VisitorStatsResponse, AppError> {
        let total = self.repository.count_total().await?;
        let today = self.repository.count_today().await?;
        let by_page = self.repository.count_by_page(20).await?;
        let last_seven_days = self.repository.daily_counts().await?;

        Ok(VisitorStatsResponse {
            total,
            today,
            by_page,
            last_seven_days,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn watched() -> Vec<String> {
        vec!["/contact".to_string(), "/vehicles".to_string()]
    }

    #[test]
    fn test_exact_match_is_watched() {
        assert!(is_watched_page("/contact", &watched()));
        assert!(is_watched_page("/vehicles", &watched()));
    }

    #[test]
    fn test_child_path_is_watched() {
        assert!(is_watched_page("/vehicles/42", &watched()));
        assert!(is_watched_page("/vehicles/42/photos", &watched()));
    }

    #[test]
    fn test_sibling_prefix_is_not_watched() {
        assert!(!is_watched_page("/vehicles-archive", &watched()));
        assert!(!is_watched_page("/contactez-nous", &watched()));
        assert!(!is_watched_page("/", &watched()));
    }
}
