//! DTOs de Trip
//!
//! Requests y responses del ledger de viajes. Los campos numéricos ausentes
//! se interpretan como 0; los textuales como null.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Trip;

/// Request para crear un viaje
#[derive(Debug, Default, Deserialize)]
pub struct CreateTripRequest {
    #[serde(rename = "pickupLocation")]
    pub pickup_location: Option<String>,
    #[serde(rename = "dropLocation")]
    pub drop_location: Option<String>,
    #[serde(rename = "tripType")]
    pub trip_type: Option<String>,
    pub car: Option<String>,
    #[serde(rename = "pickupDate")]
    pub pickup_date: Option<String>,
    #[serde(rename = "pickupTime")]
    pub pickup_time: Option<String>,
    #[serde(default)]
    pub days: i32,
    #[serde(default, rename = "kmPrice")]
    pub km_price: Decimal,
    #[serde(default)]
    pub km: Decimal,
    #[serde(default)]
    pub betta: Decimal,
    pub phone: Option<String>,
    pub state: Option<String>,
    #[serde(rename = "customerName")]
    pub customer_name: Option<String>,
    #[serde(rename = "customerRemark")]
    pub customer_remark: Option<String>,
    #[serde(default)]
    pub adult: i32,
    #[serde(default)]
    pub child: i32,
    #[serde(default)]
    pub luggage: Decimal,
    #[serde(rename = "customerCurrentLocation")]
    pub customer_current_location: Option<String>,
}

/// Request de aceptación (bidding) de un driver
#[derive(Debug, Deserialize)]
pub struct AcceptTripRequest {
    #[serde(rename = "driverEmail")]
    pub driver_email: String,
}

/// Request de asignación administrativa
#[derive(Debug, Deserialize)]
pub struct AssignDriverRequest {
    #[serde(rename = "tripId")]
    pub trip_id: Uuid,
    #[serde(rename = "driverEmail")]
    pub driver_email: String,
}

/// Request para completar un viaje. startMeter, endMeter y finalBill
/// son obligatorios; el resto de cargos defaultea a 0.
#[derive(Debug, Deserialize)]
pub struct CompleteTripRequest {
    #[serde(rename = "startMeter")]
    pub start_meter: Option<Decimal>,
    #[serde(rename = "endMeter")]
    pub end_meter: Option<Decimal>,
    #[serde(default)]
    pub luggage: Decimal,
    #[serde(default)]
    pub pet: Decimal,
    #[serde(default)]
    pub toll: Decimal,
    #[serde(default)]
    pub hills: Decimal,
    #[serde(default, rename = "totalKm")]
    pub total_km: Decimal,
    #[serde(default, rename = "finalKm")]
    pub final_km: Decimal,
    #[serde(rename = "finalBill")]
    pub final_bill: Option<Decimal>,
}

/// Request de actualización de un único campo whitelisteado
#[derive(Debug, Deserialize)]
pub struct UpdateFieldRequest {
    #[serde(rename = "tripId")]
    pub trip_id: Uuid,
    pub field: String,
    pub value: Decimal,
}

/// Response de viaje con las claves camelCase del frontend
#[derive(Debug, Serialize)]
pub struct TripResponse {
    pub id: Uuid,
    #[serde(rename = "pickupLocation")]
    pub pickup_location: Option<String>,
    #[serde(rename = "dropLocation")]
    pub drop_location: Option<String>,
    #[serde(rename = "tripType")]
    pub trip_type: Option<String>,
    pub car: Option<String>,
    #[serde(rename = "pickupDate")]
    pub pickup_date: Option<String>,
    #[serde(rename = "pickupTime")]
    pub pickup_time: Option<String>,
    pub days: i32,
    #[serde(rename = "kmPrice")]
    pub km_price: Decimal,
    pub km: Decimal,
    pub betta: Decimal,
    pub phone: Option<String>,
    pub state: Option<String>,
    #[serde(rename = "customerName")]
    pub customer_name: Option<String>,
    #[serde(rename = "customerRemark")]
    pub customer_remark: Option<String>,
    pub adult: i32,
    pub child: i32,
    pub luggage: Decimal,
    #[serde(rename = "customerCurrentLocation")]
    pub customer_current_location: Option<String>,
    pub status: String,
    #[serde(rename = "acceptedDrivers")]
    pub accepted_drivers: Vec<String>,
    #[serde(rename = "driverEmail")]
    pub driver_email: Option<String>,
    #[serde(rename = "assignedAt")]
    pub assigned_at: Option<DateTime<Utc>>,
    #[serde(rename = "startMeter")]
    pub start_meter: Option<Decimal>,
    #[serde(rename = "endMeter")]
    pub end_meter: Option<Decimal>,
    #[serde(rename = "luggageCharge")]
    pub luggage_charge: Option<Decimal>,
    #[serde(rename = "petCharge")]
    pub pet_charge: Option<Decimal>,
    #[serde(rename = "tollCharge")]
    pub toll_charge: Option<Decimal>,
    #[serde(rename = "hillsCharge")]
    pub hills_charge: Option<Decimal>,
    #[serde(rename = "totalKm")]
    pub total_km: Option<Decimal>,
    #[serde(rename = "finalKm")]
    pub final_km: Option<Decimal>,
    #[serde(rename = "finalBill")]
    pub final_bill: Option<Decimal>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<Trip> for TripResponse {
    fn from(trip: Trip) -> Self {
        let accepted_drivers = trip.accepted_driver_emails();
        Self {
            id: trip.id,
            pickup_location: trip.pickup_location,
            drop_location: trip.drop_location,
            trip_type: trip.trip_type,
            car: trip.car,
            pickup_date: trip.pickup_date,
            pickup_time: trip.pickup_time,
            days: trip.days,
            km_price: trip.km_price,
            km: trip.km,
            betta: trip.betta,
            phone: trip.phone,
            state: trip.state,
            customer_name: trip.customer_name,
            customer_remark: trip.customer_remark,
            adult: trip.adult,
            child: trip.child,
            luggage: trip.luggage,
            customer_current_location: trip.customer_current_location,
            status: trip.status,
            accepted_drivers,
            driver_email: trip.driver_email,
            assigned_at: trip.assigned_at,
            start_meter: trip.start_meter,
            end_meter: trip.end_meter,
            luggage_charge: trip.luggage_charge,
            pet_charge: trip.pet_charge,
            toll_charge: trip.toll_charge,
            hills_charge: trip.hills_charge,
            total_km: trip.total_km,
            final_km: trip.final_km,
            final_bill: trip.final_bill,
            created_at: trip.created_at,
        }
    }
}

/// Viajes activos de un driver, partidos en dos buckets
#[derive(Debug, Serialize)]
pub struct ActiveTripsResponse {
    #[serde(rename = "acceptedTrips")]
    pub accepted_trips: Vec<TripResponse>,
    #[serde(rename = "wipTrips")]
    pub wip_trips: Vec<TripResponse>,
}

/// Response al completar un viaje
#[derive(Debug, Serialize)]
pub struct CompleteTripResponse {
    pub message: String,
    #[serde(rename = "tripId")]
    pub trip_id: Uuid,
    #[serde(rename = "finalBill")]
    pub final_bill: Decimal,
}

/// Response al crear un viaje
#[derive(Debug, Serialize)]
pub struct CreateTripResponse {
    pub message: String,
    #[serde(rename = "tripId")]
    pub trip_id: Uuid,
}
