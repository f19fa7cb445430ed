use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::contact::ContactMessage;

/// Soumission publique du formulaire de contact
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateContactRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(max = 30))]
    pub phone: Option<String>,

    #[validate(length(min = 1))]
    pub message: String,
}

/// Mise à jour du drapeau `responded`
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateContactRequest {
    pub responded: bool,
}

/// Réponse message de contact
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub responded: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ContactMessage> for ContactResponse {
    fn from(message: ContactMessage) -> Self {
        Self {
            id: message.id,
            name: message.name,
            email: message.email,
            phone: message.phone,
            message: message.message,
            responded: message.responded,
            created_at: message.created_at,
        }
    }
}
