//! Modelo de Bill
//!
//! Registro inmutable derivado de un viaje completado. Se crea una vez
//! y nunca se modifica.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Bill {
    pub id: Uuid,
    pub driver_email: String,
    pub customer_name: String,
    pub phone: Option<String>,
    pub pickup_location: Option<String>,
    pub drop_location: Option<String>,
    pub pickup_date: Option<String>,
    pub pickup_time: Option<String>,
    pub trip_type: Option<String>,
    pub car: Option<String>,
    pub start_meter: Decimal,
    pub end_meter: Decimal,
    pub total_km: Decimal,
    pub final_km: Decimal,
    pub km_price: Decimal,
    pub total_km_price: Decimal,
    pub luggage_charge: Decimal,
    pub pet_charge: Decimal,
    pub toll_charge: Decimal,
    pub hills_charge: Decimal,
    pub betta_charge: Decimal,
    pub state_charge: Decimal,
    pub total_entered_charges: Decimal,
    pub final_bill: Decimal,
    pub created_at: DateTime<Utc>,
}
