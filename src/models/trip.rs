//! Modelo de Trip
//!
//! Este módulo contiene el struct Trip y la máquina de estados del viaje:
//! pending → accept → WIP → completed. 'completed' es terminal.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado del viaje. Los literales coinciden con los valores persistidos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripStatus {
    Pending,
    Accept,
    Wip,
    Completed,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Pending => "pending",
            TripStatus::Accept => "accept",
            TripStatus::Wip => "WIP",
            TripStatus::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(TripStatus::Pending),
            "accept" => Some(TripStatus::Accept),
            "WIP" => Some(TripStatus::Wip),
            "completed" => Some(TripStatus::Completed),
            _ => None,
        }
    }

    /// Un driver puede pujar mientras el viaje está en bidding
    pub fn can_accept(&self) -> bool {
        matches!(self, TripStatus::Pending | TripStatus::Accept)
    }

    /// La asignación administrativa no puede pisar un viaje en curso o terminado
    pub fn can_assign(&self) -> bool {
        matches!(self, TripStatus::Pending | TripStatus::Accept)
    }

    /// Solo se puede iniciar un viaje ya aceptado
    pub fn can_start(&self) -> bool {
        matches!(self, TripStatus::Accept)
    }

    /// Solo se puede completar un viaje en curso
    pub fn can_complete(&self) -> bool {
        matches!(self, TripStatus::Wip)
    }
}

/// Trip principal - mapea exactamente a la tabla trips.
/// `accepted_drivers` se persiste como array JSONB con semántica de conjunto.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trip {
    pub id: Uuid,
    pub pickup_location: Option<String>,
    pub drop_location: Option<String>,
    pub trip_type: Option<String>,
    pub car: Option<String>,
    pub pickup_date: Option<String>,
    pub pickup_time: Option<String>,
    pub days: i32,
    pub km: Decimal,
    pub km_price: Decimal,
    pub betta: Decimal,
    pub adult: i32,
    pub child: i32,
    pub luggage: Decimal,
    pub phone: Option<String>,
    pub state: Option<String>,
    pub customer_name: Option<String>,
    pub customer_remark: Option<String>,
    pub customer_current_location: Option<String>,
    pub status: String,
    pub accepted_drivers: serde_json::Value,
    pub driver_email: Option<String>,
    pub assigned_at: Option<DateTime<Utc>>,
    pub start_meter: Option<Decimal>,
    pub end_meter: Option<Decimal>,
    pub luggage_charge: Option<Decimal>,
    pub pet_charge: Option<Decimal>,
    pub toll_charge: Option<Decimal>,
    pub hills_charge: Option<Decimal>,
    pub total_km: Option<Decimal>,
    pub final_km: Option<Decimal>,
    pub final_bill: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

impl Trip {
    /// Estado tipado del viaje
    pub fn trip_status(&self) -> Option<TripStatus> {
        TripStatus::parse(&self.status)
    }

    /// Emails del conjunto accepted_drivers
    pub fn accepted_driver_emails(&self) -> Vec<String> {
        self.accepted_drivers
            .as_array()
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(|s| s.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Campos del viaje que admiten actualización individual.
/// Cualquier otro nombre de campo se rechaza: el whitelist es la defensa
/// contra una superficie de escritura sin restricciones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripField {
    StartMeter,
    EndMeter,
    Luggage,
    Pet,
    Toll,
    Hills,
}

impl TripField {
    /// Resolver el nombre de campo del cliente a su columna
    pub fn parse(field: &str) -> Option<Self> {
        match field {
            "startMeter" => Some(TripField::StartMeter),
            "endMeter" => Some(TripField::EndMeter),
            "luggage" => Some(TripField::Luggage),
            "pet" => Some(TripField::Pet),
            "toll" => Some(TripField::Toll),
            "hills" => Some(TripField::Hills),
            _ => None,
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            TripField::StartMeter => "start_meter",
            TripField::EndMeter => "end_meter",
            TripField::Luggage => "luggage_charge",
            TripField::Pet => "pet_charge",
            TripField::Toll => "toll_charge",
            TripField::Hills => "hills_charge",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_round_trip() {
        for status in [
            TripStatus::Pending,
            TripStatus::Accept,
            TripStatus::Wip,
            TripStatus::Completed,
        ] {
            assert_eq!(TripStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TripStatus::parse("wip"), None); // el literal persistido es 'WIP'
        assert_eq!(TripStatus::parse("cancelled"), None);
    }

    #[test]
    fn test_start_only_legal_from_accept() {
        assert!(TripStatus::Accept.can_start());
        assert!(!TripStatus::Pending.can_start());
        assert!(!TripStatus::Wip.can_start());
        assert!(!TripStatus::Completed.can_start());
    }

    #[test]
    fn test_complete_only_legal_from_wip() {
        assert!(TripStatus::Wip.can_complete());
        assert!(!TripStatus::Accept.can_complete());
        assert!(!TripStatus::Completed.can_complete());
    }

    #[test]
    fn test_completed_is_terminal() {
        let status = TripStatus::Completed;
        assert!(!status.can_accept());
        assert!(!status.can_assign());
        assert!(!status.can_start());
        assert!(!status.can_complete());
    }

    #[test]
    fn test_assign_rejected_once_in_progress() {
        assert!(TripStatus::Pending.can_assign());
        assert!(TripStatus::Accept.can_assign());
        assert!(!TripStatus::Wip.can_assign());
        assert!(!TripStatus::Completed.can_assign());
    }

    #[test]
    fn test_field_whitelist() {
        assert_eq!(TripField::parse("startMeter"), Some(TripField::StartMeter));
        assert_eq!(TripField::parse("toll"), Some(TripField::Toll));
        // status no está en el whitelist: nunca se muta por update-field
        assert_eq!(TripField::parse("status"), None);
        assert_eq!(TripField::parse("driverEmail"), None);
        assert_eq!(TripField::parse("finalBill"), None);
    }

    #[test]
    fn test_accepted_driver_emails_tolerates_non_array() {
        let mut trip = test_trip();
        trip.accepted_drivers = json!(["a@x.com", "b@x.com"]);
        assert_eq!(trip.accepted_driver_emails(), vec!["a@x.com", "b@x.com"]);

        trip.accepted_drivers = json!(null);
        assert!(trip.accepted_driver_emails().is_empty());
    }

    fn test_trip() -> Trip {
        Trip {
            id: Uuid::new_v4(),
            pickup_location: None,
            drop_location: None,
            trip_type: None,
            car: None,
            pickup_date: None,
            pickup_time: None,
            days: 0,
            km: Decimal::ZERO,
            km_price: Decimal::ZERO,
            betta: Decimal::ZERO,
            adult: 0,
            child: 0,
            luggage: Decimal::ZERO,
            phone: None,
            state: None,
            customer_name: None,
            customer_remark: None,
            customer_current_location: None,
            status: "pending".to_string(),
            accepted_drivers: json!([]),
            driver_email: None,
            assigned_at: None,
            start_meter: None,
            end_meter: None,
            luggage_charge: None,
            pet_charge: None,
            toll_charge: None,
            hills_charge: None,
            total_km: None,
            final_km: None,
            final_bill: None,
            created_at: Utc::now(),
        }
    }
}
