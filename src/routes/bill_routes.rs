//! Rutas de facturas

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::BillController;
use crate::dto::bill_dto::{BillResponse, CreateBillRequest, CreateBillResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_bill_router() -> Router<AppState> {
    Router::new()
        .route("/bills", post(create_bill))
        .route("/bills/:driver_email", get(bills_for_driver))
        .route("/all-bills", get(all_bills))
}

async fn create_bill(
    State(state): State<AppState>,
    Json(request): Json<CreateBillRequest>,
) -> Result<Json<CreateBillResponse>, AppError> {
    let controller = BillController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn bills_for_driver(
    State(state): State<AppState>,
    Path(driver_email): Path<String>,
) -> Result<Json<Vec<BillResponse>>, AppError> {
    let controller = BillController::new(state.pool.clone());
    let bills = controller.list_for_driver(&driver_email).await?;
    Ok(Json(bills))
}

async fn all_bills(State(state): State<AppState>) -> Result<Json<Vec<BillResponse>>, AppError> {
    let controller = BillController::new(state.pool.clone());
    let bills = controller.list_all().await?;
    Ok(Json(bills))
}
