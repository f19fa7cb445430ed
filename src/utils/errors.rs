//! Gestion des erreurs
//!
//! Ce module définit tous les types d'erreurs du système
//! et leur conversion en réponses HTTP.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Erreurs principales de l'application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Authorization token required")]
    MissingToken,

    #[error("Malformed authorization header")]
    MalformedHeader,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid file: {0}")]
    InvalidFile(String),

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Réponse d'erreur de l'API: `{ "message": ... }` plus un détail
/// optionnel pour les erreurs de validation champ par champ.
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl ErrorResponse {
    fn plain(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Database(e) => {
                eprintln!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::plain("An error occurred while accessing the database"),
                )
            }

            AppError::Validation(e) => {
                eprintln!("Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        message: "The provided data is invalid".to_string(),
                        details: Some(json!(e)),
                    },
                )
            }

            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::plain("Invalid credentials"),
            ),

            AppError::MissingToken => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::plain("Authorization token required"),
            ),

            AppError::MalformedHeader => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::plain("Malformed authorization header"),
            ),

            AppError::TokenExpired => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::plain("Token expired"),
            ),

            AppError::InvalidToken(msg) => {
                eprintln!("Invalid token: {}", msg);
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse::plain("Invalid token"),
                )
            }

            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, ErrorResponse::plain(msg)),

            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::plain(msg)),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::plain(msg)),

            AppError::InvalidFile(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::plain(msg)),

            AppError::UploadFailed(msg) => {
                eprintln!("Upload failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::plain(msg),
                )
            }

            AppError::Internal(msg) => {
                eprintln!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::plain("An unexpected error occurred"),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Résultat typé pour les opérations qui peuvent échouer
pub type AppResult<T> = Result<T, AppError>;

/// Helper pour créer une erreur de validation sur un champ
pub fn validation_error(field: &'static str, message: &str) -> AppError {
    use validator::ValidationError;

    let mut error = ValidationError::new("invalid");
    error.message = Some(message.to_string().into());

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Helper pour créer une erreur de ressource introuvable
pub fn not_found_error(resource: &str) -> AppError {
    AppError::NotFound(format!("{} not found", resource))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_message() {
        assert_eq!(AppError::InvalidCredentials.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_not_found_helper() {
        let err = not_found_error("Vehicle");
        match err {
            AppError::NotFound(msg) => assert_eq!(msg, "Vehicle not found"),
            _ => panic!("expected NotFound"),
        }
    }

    #[test]
    fn test_validation_error_has_field() {
        let err = validation_error("year", "year out of range");
        match err {
            AppError::Validation(errors) => {
                assert!(errors.field_errors().contains_key("year"));
            }
            _ => panic!("expected Validation"),
        }
    }
}
