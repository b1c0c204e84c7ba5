//! Modelo de Driver
//!
//! Este módulo contiene el struct Driver y el enum de estado del conductor.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado del conductor. Solo 'active' y 'paused' son estados válidos.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DriverStatus {
    Active,
    Paused,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::Active => "active",
            DriverStatus::Paused => "paused",
        }
    }

    /// Parsear un estado recibido del cliente. Cualquier otro valor se rechaza.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(DriverStatus::Active),
            "paused" => Some(DriverStatus::Paused),
            _ => None,
        }
    }
}

/// Driver principal - mapea exactamente a la tabla drivers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Driver {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub rc_number: String,
    pub fc_expiry: Option<String>,
    pub insurance_number: String,
    pub insurance_expiry: Option<String>,
    pub driving_license: Option<String>,
    pub dl_expiry: Option<String>,
    pub status: String,
    pub current_location: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Mapa explícito de claves JSON del cliente a columnas de la tabla drivers.
/// Las claves que no están aquí se ignoran en las actualizaciones de perfil.
pub const PROFILE_FIELD_MAP: &[(&str, &str)] = &[
    ("name", "name"),
    ("email", "email"),
    ("password", "password_hash"),
    ("phoneNumber", "phone"),
    ("rcNumber", "rc_number"),
    ("drivingLicense", "driving_license"),
    ("drivingLicenseExpiryDate", "dl_expiry"),
    ("fcDate", "fc_expiry"),
    ("insuranceNumber", "insurance_number"),
    ("insuranceExpiryDate", "insurance_expiry"),
    ("current_location", "current_location"),
    ("status", "status"),
];

/// Resolver una clave JSON de perfil a su columna
pub fn profile_column(key: &str) -> Option<&'static str> {
    PROFILE_FIELD_MAP
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, col)| *col)
}
