//! DTOs de Driver
//!
//! Requests y responses del directorio de conductores. Las claves JSON
//! son las que envía el frontend (phoneNumber, rcNumber, fcDate, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::Driver;

/// Request para registrar un conductor
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterDriverRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[serde(rename = "phoneNumber")]
    #[validate(length(min = 5, max = 20))]
    pub phone_number: String,

    #[validate(length(min = 4))]
    pub password: String,

    #[serde(rename = "rcNumber")]
    #[validate(length(min = 1))]
    pub rc_number: String,

    #[serde(rename = "fcDate")]
    pub fc_date: Option<String>,

    #[serde(rename = "insuranceNumber")]
    #[validate(length(min = 1))]
    pub insurance_number: String,

    #[serde(rename = "insuranceExpiryDate")]
    pub insurance_expiry_date: Option<String>,

    #[serde(rename = "drivingLicense")]
    pub driving_license: Option<String>,

    #[serde(rename = "drivingLicenseExpiryDate")]
    pub driving_license_expiry_date: Option<String>,

    pub status: Option<String>,
}

/// Request para consultar colisiones de campos únicos
#[derive(Debug, Deserialize)]
pub struct CheckExistsRequest {
    pub email: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(rename = "rcNumber")]
    pub rc_number: String,
    #[serde(rename = "insuranceNumber")]
    pub insurance_number: String,
}

/// Cuatro booleanos independientes, uno por campo único.
/// No se corta en la primera colisión: cada flag es significativo por sí solo.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckExistsResponse {
    pub email: bool,
    #[serde(rename = "phoneNumber")]
    pub phone_number: bool,
    #[serde(rename = "rcNumber")]
    pub rc_number: bool,
    #[serde(rename = "insuranceNumber")]
    pub insurance_number: bool,
}

impl CheckExistsResponse {
    pub fn any(&self) -> bool {
        self.email || self.phone_number || self.rc_number || self.insurance_number
    }
}

/// Response de conductor (sin el secreto)
#[derive(Debug, Serialize)]
pub struct DriverResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(rename = "rcNumber")]
    pub rc_number: String,
    #[serde(rename = "fcDate")]
    pub fc_date: Option<String>,
    #[serde(rename = "insuranceNumber")]
    pub insurance_number: String,
    #[serde(rename = "insuranceExpiryDate")]
    pub insurance_expiry_date: Option<String>,
    #[serde(rename = "drivingLicense")]
    pub driving_license: Option<String>,
    #[serde(rename = "drivingLicenseExpiryDate")]
    pub driving_license_expiry_date: Option<String>,
    pub status: String,
    #[serde(rename = "currentLocation")]
    pub current_location: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        Self {
            id: driver.id,
            name: driver.name,
            email: driver.email,
            phone_number: driver.phone,
            rc_number: driver.rc_number,
            fc_date: driver.fc_expiry,
            insurance_number: driver.insurance_number,
            insurance_expiry_date: driver.insurance_expiry,
            driving_license: driver.driving_license,
            driving_license_expiry_date: driver.dl_expiry,
            status: driver.status,
            current_location: driver.current_location,
            created_at: driver.created_at,
        }
    }
}

/// Response resumida para listados (email + nombre)
#[derive(Debug, Serialize)]
pub struct DriverSummary {
    pub email: String,
    pub name: String,
}

/// Request para actualizar el estado del conductor
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Request para actualizar la ubicación actual
#[derive(Debug, Deserialize)]
pub struct UpdateLocationRequest {
    #[serde(rename = "currentDistrict")]
    pub current_district: String,
}

/// Response con el estado del conductor
#[derive(Debug, Serialize)]
pub struct DriverStatusResponse {
    pub status: String,
}

/// Response con la ubicación actual
#[derive(Debug, Serialize)]
pub struct DriverLocationResponse {
    #[serde(rename = "currentLocation")]
    pub current_location: Option<String>,
}
