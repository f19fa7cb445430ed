//! Utilitaires JWT
//!
//! Ce module contient les fonctions de génération et de vérification
//! des tokens JWT de l'administrateur.

use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{config::environment::EnvironmentConfig, utils::errors::AppError};

/// Claims du token administrateur
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,  // username
    pub role: String, // toujours "admin" à l'émission
    pub exp: usize,   // expiration timestamp
    pub iat: usize,   // issued at timestamp
}

/// Configuration JWT
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration: u64,
}

impl From<&EnvironmentConfig> for JwtConfig {
    fn from(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            expiration: config.jwt_expiration,
        }
    }
}

/// Générer un token pour l'opérateur authentifié
pub fn generate_token(username: &str, config: &JwtConfig) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(config.expiration as i64);

    let claims = JwtClaims {
        sub: username.to_string(),
        role: "admin".to_string(),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let encoding_key = EncodingKey::from_secret(config.secret.as_ref());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Internal(format!("Error generating token: {}", e)))
}

/// Vérifier et décoder un token
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<JwtClaims, AppError> {
    let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

    let token_data =
        decode::<JwtClaims>(token, &decoding_key, &Validation::default()).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken(e.to_string()),
            }
        })?;

    Ok(token_data.claims)
}

/// Extraire le token d'un header Authorization.
/// Le header doit être exactement `Bearer <token>`: deux parties
/// séparées par un espace, schéma littéral `Bearer`.
pub fn extract_token_from_header(auth_header: &str) -> Result<&str, AppError> {
    let parts: Vec<&str> = auth_header.split(' ').collect();

    if parts.len() != 2 || parts[0] != "Bearer" || parts[1].is_empty() {
        return Err(AppError::MalformedHeader);
    }

    Ok(parts[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key".to_string(),
            expiration: 86400,
        }
    }

    #[test]
    fn test_generate_and_verify_roundtrip() {
        let config = test_config();
        let token = generate_token("admin", &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, 86400);
    }

    #[test]
    fn test_verify_with_wrong_secret_fails() {
        let config = test_config();
        let token = generate_token("admin", &config).unwrap();

        let other = JwtConfig {
            secret: "another-secret".to_string(),
            expiration: 86400,
        };
        match verify_token(&token, &other) {
            Err(AppError::InvalidToken(_)) => {}
            other => panic!("expected InvalidToken, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_expired_token_is_token_expired() {
        let config = test_config();
        let now = chrono::Utc::now();

        // Token émis il y a 25 heures avec une durée de vie de 24h
        let claims = JwtClaims {
            sub: "admin".to_string(),
            role: "admin".to_string(),
            exp: (now - chrono::Duration::hours(1)).timestamp() as usize,
            iat: (now - chrono::Duration::hours(25)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_ref()),
        )
        .unwrap();

        match verify_token(&token, &config) {
            Err(AppError::TokenExpired) => {}
            other => panic!("expected TokenExpired, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let config = test_config();
        match verify_token("not.a.token", &config) {
            Err(AppError::InvalidToken(_)) => {}
            other => panic!("expected InvalidToken, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_extract_token_from_header() {
        assert_eq!(extract_token_from_header("Bearer abc123").unwrap(), "abc123");

        assert!(matches!(
            extract_token_from_header("bearer abc123"),
            Err(AppError::MalformedHeader)
        ));
        assert!(matches!(
            extract_token_from_header("Bearer"),
            Err(AppError::MalformedHeader)
        ));
        assert!(matches!(
            extract_token_from_header("Bearer abc 123"),
            Err(AppError::MalformedHeader)
        ));
        assert!(matches!(
            extract_token_from_header("Token abc123"),
            Err(AppError::MalformedHeader)
        ));
        assert!(matches!(
            extract_token_from_header("Bearer "),
            Err(AppError::MalformedHeader)
        ));
    }
}
