use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    middleware,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleRequest, VehicleFilters, VehicleImagesResponse,
    VehicleResponse,
};
use crate::middleware::auth::{admin_only_middleware, auth_middleware, AuthenticatedAdmin};
use crate::services::upload_service::{collect_files, VEHICLE_IMAGE_POLICY};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Lectures publiques, écritures réservées à l'opérateur
pub fn create_vehicle_router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_vehicle))
        .route("/:id", put(update_vehicle))
        .route("/:id", delete(delete_vehicle))
        .route("/upload/:id", post(upload_vehicle_images))
        .route_layer(middleware::from_fn(admin_only_middleware))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/", get(list_vehicles))
        .route("/featured", get(list_featured_vehicles))
        .route("/:id", get(get_vehicle))
        .merge(protected)
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(filters): Query<VehicleFilters>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let response = VehicleController::new(&state).list(filters).await?;
    Ok(Json(response))
}

async fn list_featured_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let response = VehicleController::new(&state).list_featured().await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleResponse>, AppError> {
    let response = VehicleController::new(&state).get_by_id(id).await?;
    Ok(Json(response))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedAdmin>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<VehicleResponse>), AppError> {
    let response = VehicleController::new(&state)
        .create(request, &admin.username)
        .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Extension(admin): Extension<AuthenticatedAdmin>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<VehicleResponse>, AppError> {
    let response = VehicleController::new(&state)
        .update(id, request, &admin.username)
        .await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Extension(admin): Extension<AuthenticatedAdmin>,
) -> Result<Json<serde_json::Value>, AppError> {
    VehicleController::new(&state)
        .delete(id, &admin.username)
        .await?;
    Ok(Json(serde_json::json!({
        "message": "Vehicle deleted successfully"
    })))
}

async fn upload_vehicle_images(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Extension(admin): Extension<AuthenticatedAdmin>,
    multipart: Multipart,
) -> Result<Json<VehicleImagesResponse>, AppError> {
    let files = collect_files(multipart, &VEHICLE_IMAGE_POLICY).await?;

    let response = VehicleController::new(&state)
        .attach_images(id, files, &admin.username)
        .await?;
    Ok(Json(response))
}
