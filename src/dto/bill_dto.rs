//! DTOs de Bill

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Bill;

/// Request para guardar una factura. driverEmail, customerName y finalBill
/// son obligatorios; los cargos ausentes defaultean a 0.
#[derive(Debug, Deserialize)]
pub struct CreateBillRequest {
    #[serde(rename = "driverEmail")]
    pub driver_email: Option<String>,
    #[serde(rename = "customerName")]
    pub customer_name: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "pickupLocation")]
    pub pickup_location: Option<String>,
    #[serde(rename = "dropLocation")]
    pub drop_location: Option<String>,
    #[serde(rename = "pickupDate")]
    pub pickup_date: Option<String>,
    #[serde(rename = "pickupTime")]
    pub pickup_time: Option<String>,
    #[serde(rename = "tripType")]
    pub trip_type: Option<String>,
    pub car: Option<String>,
    #[serde(default, rename = "startMeter")]
    pub start_meter: Decimal,
    #[serde(default, rename = "endMeter")]
    pub end_meter: Decimal,
    #[serde(default, rename = "totalKm")]
    pub total_km: Decimal,
    #[serde(default, rename = "finalKm")]
    pub final_km: Decimal,
    #[serde(default, rename = "kmPrice")]
    pub km_price: Decimal,
    #[serde(default, rename = "totalKmPrice")]
    pub total_km_price: Decimal,
    #[serde(default, rename = "luggageCharge")]
    pub luggage_charge: Decimal,
    #[serde(default, rename = "petCharge")]
    pub pet_charge: Decimal,
    #[serde(default, rename = "tollCharge")]
    pub toll_charge: Decimal,
    #[serde(default, rename = "hillsCharge")]
    pub hills_charge: Decimal,
    #[serde(default, rename = "bettaCharge")]
    pub betta_charge: Decimal,
    #[serde(default, rename = "stateCharge")]
    pub state_charge: Decimal,
    #[serde(default, rename = "totalEnteredCharges")]
    pub total_entered_charges: Decimal,
    #[serde(rename = "finalBill")]
    pub final_bill: Option<Decimal>,
}

/// Response de factura
#[derive(Debug, Serialize)]
pub struct BillResponse {
    pub id: Uuid,
    #[serde(rename = "driverEmail")]
    pub driver_email: String,
    #[serde(rename = "customerName")]
    pub customer_name: String,
    pub phone: Option<String>,
    #[serde(rename = "pickupLocation")]
    pub pickup_location: Option<String>,
    #[serde(rename = "dropLocation")]
    pub drop_location: Option<String>,
    #[serde(rename = "pickupDate")]
    pub pickup_date: Option<String>,
    #[serde(rename = "pickupTime")]
    pub pickup_time: Option<String>,
    #[serde(rename = "tripType")]
    pub trip_type: Option<String>,
    pub car: Option<String>,
    #[serde(rename = "startMeter")]
    pub start_meter: Decimal,
    #[serde(rename = "endMeter")]
    pub end_meter: Decimal,
    #[serde(rename = "totalKm")]
    pub total_km: Decimal,
    #[serde(rename = "finalKm")]
    pub final_km: Decimal,
    #[serde(rename = "kmPrice")]
    pub km_price: Decimal,
    #[serde(rename = "totalKmPrice")]
    pub total_km_price: Decimal,
    #[serde(rename = "luggageCharge")]
    pub luggage_charge: Decimal,
    #[serde(rename = "petCharge")]
    pub pet_charge: Decimal,
    #[serde(rename = "tollCharge")]
    pub toll_charge: Decimal,
    #[serde(rename = "hillsCharge")]
    pub hills_charge: Decimal,
    #[serde(rename = "bettaCharge")]
    pub betta_charge: Decimal,
    #[serde(rename = "stateCharge")]
    pub state_charge: Decimal,
    #[serde(rename = "totalEnteredCharges")]
    pub total_entered_charges: Decimal,
    #[serde(rename = "finalBill")]
    pub final_bill: Decimal,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<Bill> for BillResponse {
    fn from(bill: Bill) -> Self {
        Self {
            id: bill.id,
            driver_email: bill.driver_email,
            customer_name: bill.customer_name,
            phone: bill.phone,
            pickup_location: bill.pickup_location,
            drop_location: bill.drop_location,
            pickup_date: bill.pickup_date,
            pickup_time: bill.pickup_time,
            trip_type: bill.trip_type,
            car: bill.car,
            start_meter: bill.start_meter,
            end_meter: bill.end_meter,
            total_km: bill.total_km,
            final_km: bill.final_km,
            km_price: bill.km_price,
            total_km_price: bill.total_km_price,
            luggage_charge: bill.luggage_charge,
            pet_charge: bill.pet_charge,
            toll_charge: bill.toll_charge,
            hills_charge: bill.hills_charge,
            betta_charge: bill.betta_charge,
            state_charge: bill.state_charge,
            total_entered_charges: bill.total_entered_charges,
            final_bill: bill.final_bill,
            created_at: bill.created_at,
        }
    }
}

/// Response al crear una factura
#[derive(Debug, Serialize)]
pub struct CreateBillResponse {
    pub message: String,
    #[serde(rename = "billId")]
    pub bill_id: Uuid,
}
