use axum::{
    extract::{Multipart, State},
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::controllers::site_config_controller::SiteConfigController;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::dto::site_config_dto::{
    SiteConfigResponse, UpdateSiteConfigRequest, VideoUploadResponse,
};
use crate::middleware::auth::{admin_only_middleware, auth_middleware, AuthenticatedAdmin};
use crate::models::activity::ActivityLogEntry;
use crate::repositories::activity_repository::ActivityRepository;
use crate::services::activity_logger::record_activity;
use crate::services::upload_service::{collect_files, VIDEO_POLICY};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_admin_router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/site-config", get(get_site_config).put(update_site_config))
        .route("/upload-video", post(upload_video))
        .route("/activity", get(recent_activity))
        .route_layer(middleware::from_fn(admin_only_middleware))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new().route("/login", post(login)).merge(protected)
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthController::login(&state.config, request)?;

    record_activity(
        state.pool.clone(),
        "admin",
        "login",
        format!("Connexion de '{}'", response.username),
        Some(response.username.clone()),
    );

    Ok(Json(response))
}

async fn get_site_config(
    State(state): State<AppState>,
) -> Result<Json<SiteConfigResponse>, AppError> {
    let response = SiteConfigController::new(&state).get().await?;
    Ok(Json(response))
}

async fn update_site_config(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedAdmin>,
    Json(request): Json<UpdateSiteConfigRequest>,
) -> Result<Json<SiteConfigResponse>, AppError> {
    let response = SiteConfigController::new(&state)
        .update(request, &admin.username)
        .await?;
    Ok(Json(response))
}

async fn upload_video(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedAdmin>,
    multipart: Multipart,
) -> Result<Json<VideoUploadResponse>, AppError> {
    let mut files = collect_files(multipart, &VIDEO_POLICY).await?;
    // une seule vidéo par requête
    let file = files.remove(0);

    let response = SiteConfigController::new(&state)
        .replace_video(file, &admin.username)
        .await?;
    Ok(Json(response))
}

async fn recent_activity(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActivityLogEntry>>, AppError> {
    let entries = ActivityRepository::new(state.pool.clone())
        .find_recent(100)
        .await?;
    Ok(Json(entries))
}
