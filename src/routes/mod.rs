//! Routes de l'API
//!
//! Un module de routes par ressource. Les sous-ensembles protégés
//! reçoivent le middleware d'authentification via `route_layer`, les
//! fichiers uploadés sont servis statiquement sous `/uploads`.

pub mod admin_routes;
pub mod contact_routes;
pub mod media_routes;
pub mod vehicle_routes;
pub mod visitor_routes;

use axum::{extract::DefaultBodyLimit, response::Json, routing::get, Router};
use serde_json::json;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Limite de corps de requête: couvre la vidéo de 100 Mo plus
/// l'enrobage multipart.
const MAX_BODY_BYTES: usize = 110 * 1024 * 1024;

pub fn create_router(state: AppState) -> Router {
    let cors = if state.config.is_production() {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    } else {
        cors_middleware()
    };

    Router::new()
        .route("/api/health", get(health))
        .nest("/api/admin", admin_routes::create_admin_router(state.clone()))
        .nest(
            "/api/vehicles",
            vehicle_routes::create_vehicle_router(state.clone()),
        )
        .nest(
            "/api/contact",
            contact_routes::create_contact_router(state.clone()),
        )
        .nest(
            "/api/visitors",
            visitor_routes::create_visitor_router(state.clone()),
        )
        .nest("/api/media", media_routes::create_media_router(state.clone()))
        .nest_service("/uploads", ServeDir::new(&state.config.upload_dir))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Endpoint de vivacité
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "auto-export-backend",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
