//! État partagé de l'application
//!
//! Ce module définit l'état passé à travers le router Axum.

use reqwest::Client;
use sqlx::PgPool;
use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::services::notification_service::NotificationService;
use crate::services::storage_service::StorageService;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub http_client: Client,
    pub storage: Arc<StorageService>,
    pub notifier: Arc<NotificationService>,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        let http_client = Client::new();

        Self {
            pool,
            storage: Arc::new(StorageService::from_config(&config, http_client.clone())),
            notifier: Arc::new(NotificationService::new(&config, http_client.clone())),
            config,
            http_client,
        }
    }
}
