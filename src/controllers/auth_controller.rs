//! Vérification des identifiants de l'opérateur
//!
//! Un seul opérateur configuré par l'environnement. Le mot de passe
//! est vérifié contre un hash bcrypt, la comparaison se fait donc en
//! temps constant. Aucun verrouillage ni limitation de tentatives,
//! conformément au comportement de référence.

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};

pub struct AuthController;

impl AuthController {
    pub fn login(
        config: &EnvironmentConfig,
        request: LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        // Les deux vérifications s'exécutent toujours, pas de court-circuit
        let username_ok = request.username == config.admin_username;
        let password_ok =
            bcrypt::verify(&request.password, &config.admin_password_hash).unwrap_or(false);

        if !username_ok || !password_ok {
            return Err(AppError::InvalidCredentials);
        }

        let jwt_config = JwtConfig::from(config);
        let token = generate_token(&request.username, &jwt_config)?;
        let expires_at =
            chrono::Utc::now() + chrono::Duration::seconds(jwt_config.expiration as i64);

        Ok(LoginResponse {
            token,
            username: request.username,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::jwt::verify_token;

    fn test_config() -> EnvironmentConfig {
        EnvironmentConfig {
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 3000,
            jwt_secret: "test-secret".to_string(),
            jwt_expiration: 86400,
            cors_origins: vec![],
            admin_username: "admin".to_string(),
            admin_password_hash: bcrypt::hash("s3cret-pass", 4).unwrap(),
            upload_dir: "uploads".to_string(),
            public_upload_prefix: "/uploads".to_string(),
            remote_storage_url: None,
            remote_storage_token: None,
            notify_webhook_url: None,
            notify_recipient: None,
            watched_pages: vec![],
        }
    }

    #[test]
    fn test_login_with_valid_credentials() {
        let config = test_config();
        let response = AuthController::login(
            &config,
            LoginRequest {
                username: "admin".to_string(),
                password: "s3cret-pass".to_string(),
            },
        )
        .unwrap();

        let claims = verify_token(&response.token, &JwtConfig::from(&config)).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn test_login_with_wrong_password() {
        let config = test_config();
        let result = AuthController::login(
            &config,
            LoginRequest {
                username: "admin".to_string(),
                password: "wrong".to_string(),
            },
        );

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[test]
    fn test_login_with_wrong_username() {
        let config = test_config();
        let result = AuthController::login(
            &config,
            LoginRequest {
                username: "root".to_string(),
                password: "s3cret-pass".to_string(),
            },
        );

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }
}
