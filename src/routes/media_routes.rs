use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    middleware,
    routing::{delete, get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::media_controller::MediaController;
use crate::dto::media_dto::MediaAssetResponse;
use crate::middleware::auth::{admin_only_middleware, auth_middleware, AuthenticatedAdmin};
use crate::services::upload_service::{collect_files, MEDIA_POLICY};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Gestion des médias, entièrement réservée à l'opérateur
pub fn create_media_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_media))
        .route("/", post(upload_media))
        .route("/:id", delete(delete_media))
        .route_layer(middleware::from_fn(admin_only_middleware))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn list_media(
    State(state): State<AppState>,
) -> Result<Json<Vec<MediaAssetResponse>>, AppError> {
    let response = MediaController::new(&state).list().await?;
    Ok(Json(response))
}

async fn upload_media(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedAdmin>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<Vec<MediaAssetResponse>>), AppError> {
    let files = collect_files(multipart, &MEDIA_POLICY).await?;

    let response = MediaController::new(&state)
        .upload(files, &admin.username)
        .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn delete_media(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Extension(admin): Extension<AuthenticatedAdmin>,
) -> Result<Json<serde_json::Value>, AppError> {
    MediaController::new(&state)
        .delete(id, &admin.username)
        .await?;
    Ok(Json(serde_json::json!({
        "message": "Media asset deleted successfully"
    })))
}
