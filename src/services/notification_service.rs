//! Notifications sortantes
//!
//! Envoi par webhook HTTP configurable. Toutes les notifications sont
//! en dépose-et-oublie: un échec est journalisé et avalé, jamais
//! propagé à l'opération qui l'a déclenché. Sans webhook configuré,
//! le service ne fait rien.

use reqwest::Client;
use serde_json::json;

use crate::config::environment::EnvironmentConfig;

pub struct NotificationService {
    client: Client,
    webhook_url: Option<String>,
    recipient: Option<String>,
}

impl NotificationService {
    pub fn new(config: &EnvironmentConfig, client: Client) -> Self {
        Self {
            client,
            webhook_url: config.notify_webhook_url.clone(),
            recipient: config.notify_recipient.clone(),
        }
    }

    /// Visite d'une page surveillée
    pub fn notify_visit(&self, page: String, ip: String) {
        self.dispatch(
            "page_visit",
            json!({
                "page": page,
                "ip": ip,
            }),
        );
    }

    /// Nouveau message de contact
    pub fn notify_contact(&self, name: String, email: String) {
        self.dispatch(
            "contact_message",
            json!({
                "name": name,
                "email": email,
            }),
        );
    }

    fn dispatch(&self, kind: &'static str, data: serde_json::Value) {
        let Some(url) = self.webhook_url.clone() else {
            log::debug!("Pas de webhook configuré, notification '{}' ignorée", kind);
            return;
        };

        let client = self.client.clone();
        let body = json!({
            "kind": kind,
            "recipient": self.recipient,
            "data": data,
        });

        tokio::spawn(async move {
            match client.post(&url).json(&body).send().await {
                Ok(response) if response.status().is_success() => {}
                Ok(response) => {
                    log::warn!("Notification '{}' refusée ({})", kind, response.status())
                }
                Err(e) => log::warn!("Envoi de la notification '{}' échoué: {}", kind, e),
            }
        });
    }
}
