//! Rutas del directorio de conductores

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;
use uuid::Uuid;

use crate::controllers::DriverController;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::dto::driver_dto::{
    CheckExistsRequest, CheckExistsResponse, DriverLocationResponse, DriverResponse,
    DriverStatusResponse, DriverSummary, RegisterDriverRequest, UpdateLocationRequest,
    UpdateStatusRequest,
};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/drivers/register", post(register_driver))
        .route("/drivers/check-exists", post(check_exists))
        .route("/drivers", get(list_driver_summaries))
        .route("/all-drivers", get(list_all_drivers))
        .route("/drivers/status/:email", get(get_driver_status))
        .route("/drivers/:id", get(get_driver).put(update_driver_profile))
        .route(
            "/driver/:id/location",
            get(get_driver_location).put(update_driver_location),
        )
        .route("/driver/:id/status", put(update_driver_status))
        .route("/driver/:id", delete(delete_driver))
}

/// Login montado en la raíz, fuera del prefijo /api
pub fn create_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

async fn register_driver(
    State(state): State<AppState>,
    Json(request): Json<RegisterDriverRequest>,
) -> Result<Json<ApiResponse<DriverResponse>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let driver = controller.register(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        driver,
        "Driver registered successfully".to_string(),
    )))
}

async fn check_exists(
    State(state): State<AppState>,
    Json(request): Json<CheckExistsRequest>,
) -> Result<Json<CheckExistsResponse>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.check_exists(request).await?;
    Ok(Json(response))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.login(request, &state.jwt_config()).await?;
    Ok(Json(response))
}

async fn get_driver(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DriverResponse>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let driver = controller.get_by_id(id).await?;
    Ok(Json(driver))
}

async fn get_driver_status(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<DriverStatusResponse>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let status = controller.get_status(&email).await?;
    Ok(Json(DriverStatusResponse { status }))
}

async fn get_driver_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DriverLocationResponse>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let current_location = controller.get_location(id).await?;
    Ok(Json(DriverLocationResponse { current_location }))
}

async fn update_driver_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(updates): Json<serde_json::Map<String, serde_json::Value>>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let affected = controller.update_profile(id, updates).await?;
    Ok(Json(json!({
        "message": "Driver updated successfully",
        "affectedRows": affected
    })))
}

async fn update_driver_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    controller.update_status(id, &request.status).await?;
    Ok(Json(json!({ "success": true, "status": request.status })))
}

async fn update_driver_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateLocationRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    controller
        .update_location(id, &request.current_district)
        .await?;
    Ok(Json(json!({
        "success": true,
        "message": "District updated successfully"
    })))
}

async fn delete_driver(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(json!({ "success": true })))
}

async fn list_all_drivers(
    State(state): State<AppState>,
) -> Result<Json<Vec<DriverResponse>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let drivers = controller.list_all().await?;
    Ok(Json(drivers))
}

async fn list_driver_summaries(
    State(state): State<AppState>,
) -> Result<Json<Vec<DriverSummary>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let drivers = controller.list_summary().await?;
    Ok(Json(drivers))
}
