//! Rutas del ledger de viajes

use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use serde_json::json;
use uuid::Uuid;

use crate::controllers::TripController;
use crate::dto::trip_dto::{
    AcceptTripRequest, ActiveTripsResponse, AssignDriverRequest, CompleteTripRequest,
    CompleteTripResponse, CreateTripRequest, CreateTripResponse, TripResponse,
    UpdateFieldRequest,
};
use crate::models::TripStatus;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_trip_router() -> Router<AppState> {
    Router::new()
        .route("/trips", post(create_trip).get(list_trips))
        .route("/trips/update-field", put(update_trip_field))
        .route("/trips/assign-driver", put(assign_driver))
        .route("/trips/active/:email", get(active_trips))
        .route("/trips/accepted/:email", get(accepted_trips))
        .route("/trips/wip/:email", get(wip_trips))
        .route("/trips/:id", get(get_trip).delete(delete_trip))
        .route("/trips/:id/accept", put(accept_trip))
        .route("/trips/:id/start", put(start_trip))
        .route("/trips/:id/complete", put(complete_trip))
}

async fn create_trip(
    State(state): State<AppState>,
    Json(request): Json<CreateTripRequest>,
) -> Result<Json<CreateTripResponse>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_trips(State(state): State<AppState>) -> Result<Json<Vec<TripResponse>>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let trips = controller.list_all().await?;
    Ok(Json(trips))
}

async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TripResponse>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let trip = controller.get_by_id(id).await?;
    Ok(Json(trip))
}

async fn accept_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AcceptTripRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = TripController::new(state.pool.clone());
    controller.accept(id, &request.driver_email).await?;
    Ok(Json(json!({ "message": "Trip accepted successfully" })))
}

async fn assign_driver(
    State(state): State<AppState>,
    Json(request): Json<AssignDriverRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = TripController::new(state.pool.clone());
    controller
        .assign(request.trip_id, &request.driver_email)
        .await?;
    Ok(Json(json!({ "message": "Driver assigned successfully" })))
}

async fn start_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = TripController::new(state.pool.clone());
    controller.start(id).await?;
    Ok(Json(json!({ "message": "Trip started successfully" })))
}

async fn complete_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CompleteTripRequest>,
) -> Result<Json<CompleteTripResponse>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.complete(id, request).await?;
    Ok(Json(response))
}

async fn update_trip_field(
    State(state): State<AppState>,
    Json(request): Json<UpdateFieldRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = TripController::new(state.pool.clone());
    controller.update_field(request).await?;
    Ok(Json(json!({ "message": "Trip updated successfully" })))
}

async fn active_trips(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<ActiveTripsResponse>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.active_for_driver(&email).await?;
    Ok(Json(response))
}

async fn accepted_trips(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<TripResponse>>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let trips = controller
        .list_by_driver_and_status(&email, TripStatus::Accept.as_str())
        .await?;
    Ok(Json(trips))
}

async fn wip_trips(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<TripResponse>>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let trips = controller
        .list_by_driver_and_status(&email, TripStatus::Wip.as_str())
        .await?;
    Ok(Json(trips))
}

async fn delete_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = TripController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(json!({
        "message": "Trip deleted successfully",
        "deletedId": id
    })))
}
