use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::contact_controller::ContactController;
use crate::dto::contact_dto::{ContactResponse, CreateContactRequest, UpdateContactRequest};
use crate::middleware::auth::{admin_only_middleware, auth_middleware, AuthenticatedAdmin};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Soumission publique, gestion réservée à l'opérateur
pub fn create_contact_router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", get(list_messages))
        .route("/:id", get(get_message))
        .route("/:id", put(update_message))
        .route("/:id/respond", put(respond_message))
        .route("/:id", delete(delete_message))
        .route_layer(middleware::from_fn(admin_only_middleware))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/", post(submit_message))
        .merge(protected)
}

async fn submit_message(
    State(state): State<AppState>,
    Json(request): Json<CreateContactRequest>,
) -> Result<(StatusCode, Json<ContactResponse>), AppError> {
    let response = ContactController::new(&state).create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactResponse>>, AppError> {
    let response = ContactController::new(&state).list().await?;
    Ok(Json(response))
}

async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ContactResponse>, AppError> {
    let response = ContactController::new(&state).get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Extension(admin): Extension<AuthenticatedAdmin>,
    Json(request): Json<UpdateContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    let response = ContactController::new(&state)
        .update(id, request, &admin.username)
        .await?;
    Ok(Json(response))
}

async fn respond_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Extension(admin): Extension<AuthenticatedAdmin>,
) -> Result<Json<ContactResponse>, AppError> {
    let response = ContactController::new(&state)
        .respond(id, &admin.username)
        .await?;
    Ok(Json(response))
}

async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Extension(admin): Extension<AuthenticatedAdmin>,
) -> Result<Json<serde_json::Value>, AppError> {
    ContactController::new(&state)
        .delete(id, &admin.username)
        .await?;
    Ok(Json(serde_json::json!({
        "message": "Contact message deleted successfully"
    })))
}
