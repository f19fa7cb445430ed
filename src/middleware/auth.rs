//! Middleware d'authentification JWT
//!
//! Extraction du token Bearer, vérification de signature et
//! d'expiration, injection de l'identité décodée dans la requête.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
    Extension,
};

use crate::{
    state::AppState,
    utils::errors::AppError,
    utils::jwt::{extract_token_from_header, verify_token, JwtConfig},
};

/// Identité décodée, injectée dans les extensions de la requête
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin {
    pub username: String,
    pub role: String,
}

/// Middleware d'authentification: header absent, header malformé,
/// token expiré et token invalide donnent chacun leur erreur 401.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AppError::MissingToken)?;

    let token = extract_token_from_header(auth_header)?;
    let claims = verify_token(token, &JwtConfig::from(&state.config))?;

    request.extensions_mut().insert(AuthenticatedAdmin {
        username: claims.sub,
        role: claims.role,
    });

    Ok(next.run(request).await)
}

/// Vérification du rôle décodé. Le login n'émet que des tokens
/// `role = "admin"`, ce garde rejette tout autre token signé.
pub async fn admin_only_middleware(
    Extension(admin): Extension<AuthenticatedAdmin>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if admin.role != "admin" {
        return Err(AppError::Forbidden(
            "Admin privileges required".to_string(),
        ));
    }

    Ok(next.run(request).await)
}
