//! Controller de facturas
//!
//! Las facturas son registros inmutables derivados de un viaje completado.
//! No se valida que el viaje referenciado esté realmente en 'completed':
//! el endpoint acepta facturas sueltas (ver DESIGN.md).

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::bill_dto::{BillResponse, CreateBillRequest, CreateBillResponse};
use crate::models::Bill;
use crate::repositories::BillRepository;
use crate::utils::errors::AppError;

pub struct BillController {
    repository: BillRepository,
}

impl BillController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: BillRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateBillRequest) -> Result<CreateBillResponse, AppError> {
        let (Some(driver_email), Some(customer_name), Some(final_bill)) = (
            request.driver_email,
            request.customer_name,
            request.final_bill,
        ) else {
            return Err(AppError::Validation(
                "Required fields are missing: driverEmail, customerName, finalBill".to_string(),
            ));
        };

        if driver_email.trim().is_empty() || customer_name.trim().is_empty() {
            return Err(AppError::Validation(
                "driverEmail and customerName must not be empty".to_string(),
            ));
        }

        let bill = Bill {
            id: Uuid::new_v4(),
            driver_email,
            customer_name,
            phone: request.phone,
            pickup_location: request.pickup_location,
            drop_location: request.drop_location,
            pickup_date: request.pickup_date,
            pickup_time: request.pickup_time,
            trip_type: request.trip_type,
            car: request.car,
            start_meter: request.start_meter,
            end_meter: request.end_meter,
            total_km: request.total_km,
            final_km: request.final_km,
            km_price: request.km_price,
            total_km_price: request.total_km_price,
            luggage_charge: request.luggage_charge,
            pet_charge: request.pet_charge,
            toll_charge: request.toll_charge,
            hills_charge: request.hills_charge,
            betta_charge: request.betta_charge,
            state_charge: request.state_charge,
            total_entered_charges: request.total_entered_charges,
            final_bill,
            created_at: Utc::now(),
        };

        let saved = self.repository.create(&bill).await?;

        Ok(CreateBillResponse {
            message: "Bill saved successfully".to_string(),
            bill_id: saved.id,
        })
    }

    pub async fn list_for_driver(&self, driver_email: &str) -> Result<Vec<BillResponse>, AppError> {
        if driver_email.trim().is_empty() {
            return Err(AppError::Validation("driverEmail is required".to_string()));
        }

        let bills = self.repository.list_for_driver(driver_email).await?;
        Ok(bills.into_iter().map(BillResponse::from).collect())
    }

    pub async fn list_all(&self) -> Result<Vec<BillResponse>, AppError> {
        let bills = self.repository.list_all().await?;
        Ok(bills.into_iter().map(BillResponse::from).collect())
    }
}
