use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::dto::contact_dto::{ContactResponse, CreateContactRequest, UpdateContactRequest};
use crate::models::contact::ContactMessage;
use crate::repositories::contact_repository::ContactRepository;
use crate::services::activity_logger::record_activity;
use crate::services::notification_service::NotificationService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct ContactController {
    repository: ContactRepository,
    pool: PgPool,
    notifier: Arc<NotificationService>,
}

impl ContactController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: ContactRepository::new(state.pool.clone()),
            pool: state.pool.clone(),
            notifier: state.notifier.clone(),
        }
    }

    /// Soumission publique anonyme, pas de trace d'audit ici
    pub async fn create(&self, request: CreateContactRequest) -> Result<ContactResponse, AppError> {
        request.validate()?;

        let message = ContactMessage {
            id: Uuid::new_v4(),
            name: request.name,
            email: request.email,
            phone: request.phone,
            message: request.message,
            responded: false,
            created_at: Utc::now(),
        };

        let created = self.repository.create(message).await?;

        self.notifier
            .notify_contact(created.name.clone(), created.email.clone());

        Ok(created.into())
    }

    pub async fn list(&self) -> Result<Vec<ContactResponse>, AppError> {
        let messages = self.repository.find_all().await?;

        Ok(messages.into_iter().map(ContactResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ContactResponse, AppError> {
        let message = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contact message not found".to_string()))?;

        Ok(message.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateContactRequest,
        admin: &str,
    ) -> Result<ContactResponse, AppError> {
        self.set_responded(id, request.responded, admin).await
    }

    /// Marquer un message comme traité
    pub async fn respond(&self, id: Uuid, admin: &str) -> Result<ContactResponse, AppError> {
        self.set_responded(id, true, admin).await
    }

    async fn set_responded(
        &self,
        id: Uuid,
        responded: bool,
        admin: &str,
    ) -> Result<ContactResponse, AppError> {
        let message = self
            .repository
            .set_responded(id, responded)
            .await?
            .ok_or_else(|| AppError::NotFound("Contact message not found".to_string()))?;

        record_activity(
            self.pool.clone(),
            "message",
            "respond",
            format!("Message de '{}' marqué responded={}", message.name, responded),
            Some(admin.to_string()),
        );

        Ok(message.into())
    }

    pub async fn delete(&self, id: Uuid, admin: &str) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;

        if deleted == 0 {
            return Err(AppError::NotFound("Contact message not found".to_string()));
        }

        record_activity(
            self.pool.clone(),
            "message",
            "delete",
            format!("Message {} supprimé", id),
            Some(admin.to_string()),
        );

        Ok(())
    }
}
