//! Configuration des variables d'environnement

use std::env;

/// Configuration de l'environnement
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
    // Identifiants de l'opérateur unique
    pub admin_username: String,
    pub admin_password_hash: String,
    // Stockage des fichiers
    pub upload_dir: String,
    pub public_upload_prefix: String,
    pub remote_storage_url: Option<String>,
    pub remote_storage_token: Option<String>,
    // Notifications
    pub notify_webhook_url: Option<String>,
    pub notify_recipient: Option<String>,
    // Pages surveillées par l'enregistreur de visites
    pub watched_pages: Vec<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            jwt_expiration: env::var("JWT_EXPIRATION")
                .unwrap_or_else(|_| "86400".to_string())
                .parse()
                .expect("JWT_EXPIRATION must be a valid number"),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.trim().to_string())
                .collect(),
            admin_username: env::var("ADMIN_USERNAME").expect("ADMIN_USERNAME must be set"),
            admin_password_hash: env::var("ADMIN_PASSWORD_HASH")
                .expect("ADMIN_PASSWORD_HASH must be set"),
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()),
            public_upload_prefix: env::var("PUBLIC_UPLOAD_PREFIX")
                .unwrap_or_else(|_| "/uploads".to_string()),
            remote_storage_url: env::var("REMOTE_STORAGE_URL").ok(),
            remote_storage_token: env::var("REMOTE_STORAGE_TOKEN").ok(),
            notify_webhook_url: env::var("NOTIFY_WEBHOOK_URL").ok(),
            notify_recipient: env::var("NOTIFY_RECIPIENT").ok(),
            watched_pages: env::var("WATCHED_PAGES")
                .unwrap_or_else(|_| "/contact,/vehicles".to_string())
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.trim().to_string())
                .collect(),
        }
    }
}

impl EnvironmentConfig {
    /// Vérifier si on est en mode développement
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Vérifier si on est en mode production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtenir l'adresse d'écoute du serveur
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
