//! Controller del ledger de viajes
//!
//! Orquesta la máquina de estados pending → accept → WIP → completed.
//! Los guards de transición viven en el SQL del repositorio; aquí se
//! traduce "ninguna fila afectada" a NotFound o InvalidState según exista
//! o no el viaje.

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::trip_dto::{
    ActiveTripsResponse, CompleteTripRequest, CompleteTripResponse, CreateTripRequest,
    CreateTripResponse, TripResponse, UpdateFieldRequest,
};
use crate::models::{Trip, TripField, TripStatus};
use crate::repositories::TripRepository;
use crate::utils::errors::AppError;

pub struct TripController {
    repository: TripRepository,
}

impl TripController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TripRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateTripRequest) -> Result<CreateTripResponse, AppError> {
        let trip = self.repository.create(&request).await?;

        Ok(CreateTripResponse {
            message: "Trip stored successfully".to_string(),
            trip_id: trip.id,
        })
    }

    /// Aceptación (bidding) de un driver. Idempotente por driver; el update
    /// atómico del repositorio garantiza que N aceptaciones concurrentes no
    /// se pierden entre sí.
    pub async fn accept(&self, trip_id: Uuid, driver_email: &str) -> Result<TripResponse, AppError> {
        if driver_email.trim().is_empty() {
            return Err(AppError::Validation("driverEmail is required".to_string()));
        }

        match self.repository.accept(trip_id, driver_email).await? {
            Some(trip) => Ok(trip.into()),
            None => Err(self.transition_failure(trip_id, "accept").await?),
        }
    }

    /// Asignación administrativa: fija el driver directamente, sin pasar por
    /// el bidding. Un viaje en WIP o completado no es reasignable.
    pub async fn assign(&self, trip_id: Uuid, driver_email: &str) -> Result<TripResponse, AppError> {
        if driver_email.trim().is_empty() {
            return Err(AppError::Validation("driverEmail is required".to_string()));
        }

        match self.repository.assign(trip_id, driver_email).await? {
            Some(trip) => Ok(trip.into()),
            None => Err(self.transition_failure(trip_id, "assign a driver to").await?),
        }
    }

    /// accept → WIP. Se rechaza, no se ignora, si el estado actual no es
    /// exactamente 'accept'.
    pub async fn start(&self, trip_id: Uuid) -> Result<TripResponse, AppError> {
        match self.repository.start(trip_id).await? {
            Some(trip) => Ok(trip.into()),
            None => Err(self.transition_failure(trip_id, "start").await?),
        }
    }

    /// WIP → completed. startMeter, endMeter y finalBill son obligatorios y
    /// se validan antes de cualquier acceso a storage.
    pub async fn complete(
        &self,
        trip_id: Uuid,
        request: CompleteTripRequest,
    ) -> Result<CompleteTripResponse, AppError> {
        let (Some(start_meter), Some(end_meter), Some(final_bill)) =
            (request.start_meter, request.end_meter, request.final_bill)
        else {
            return Err(AppError::Validation(
                "Required fields are missing: startMeter, endMeter, finalBill".to_string(),
            ));
        };

        match self
            .repository
            .complete(trip_id, start_meter, end_meter, final_bill, &request)
            .await?
        {
            Some(trip) => Ok(CompleteTripResponse {
                message: "Trip marked as completed successfully".to_string(),
                trip_id: trip.id,
                final_bill,
            }),
            None => Err(self.transition_failure(trip_id, "complete").await?),
        }
    }

    /// Mutación genérica de un campo, restringida al whitelist fijo.
    pub async fn update_field(&self, request: UpdateFieldRequest) -> Result<(), AppError> {
        let field = TripField::parse(&request.field)
            .ok_or_else(|| AppError::Validation(format!("Invalid field name '{}'", request.field)))?;

        let affected = self
            .repository
            .update_field(request.trip_id, field, request.value)
            .await?;

        if affected == 0 {
            return Err(AppError::NotFound("Trip not found".to_string()));
        }

        Ok(())
    }

    pub async fn get_by_id(&self, trip_id: Uuid) -> Result<TripResponse, AppError> {
        let trip = self
            .repository
            .find_by_id(trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

        Ok(trip.into())
    }

    pub async fn list_all(&self) -> Result<Vec<TripResponse>, AppError> {
        let trips = self.repository.list_all().await?;
        Ok(trips.into_iter().map(TripResponse::from).collect())
    }

    pub async fn list_by_driver_and_status(
        &self,
        driver_email: &str,
        status: &str,
    ) -> Result<Vec<TripResponse>, AppError> {
        let status = TripStatus::parse(status)
            .ok_or_else(|| AppError::Validation(format!("Invalid status '{}'", status)))?;

        let trips = self
            .repository
            .list_by_driver_and_status(driver_email, status.as_str())
            .await?;

        Ok(trips.into_iter().map(TripResponse::from).collect())
    }

    /// Viajes activos del driver, partidos en dos buckets nombrados
    pub async fn active_for_driver(
        &self,
        driver_email: &str,
    ) -> Result<ActiveTripsResponse, AppError> {
        if driver_email.trim().is_empty() {
            return Err(AppError::Validation("driverEmail is required".to_string()));
        }

        let trips = self.repository.list_active_for_driver(driver_email).await?;

        let (accepted, wip): (Vec<Trip>, Vec<Trip>) = trips
            .into_iter()
            .partition(|t| t.trip_status() == Some(TripStatus::Accept));

        Ok(ActiveTripsResponse {
            accepted_trips: accepted.into_iter().map(TripResponse::from).collect(),
            wip_trips: wip.into_iter().map(TripResponse::from).collect(),
        })
    }

    pub async fn delete(&self, trip_id: Uuid) -> Result<(), AppError> {
        let affected = self.repository.delete(trip_id).await?;
        if affected == 0 {
            return Err(AppError::NotFound("Trip not found".to_string()));
        }

        Ok(())
    }

    /// Un UPDATE guardado por estado no afectó filas: o el viaje no existe
    /// (NotFound) o está en un estado desde el que la transición es ilegal
    /// (InvalidState, con el estado actual en el mensaje).
    async fn transition_failure(
        &self,
        trip_id: Uuid,
        operation: &str,
    ) -> Result<AppError, AppError> {
        match self.repository.find_by_id(trip_id).await? {
            None => Ok(AppError::NotFound("Trip not found".to_string())),
            Some(trip) => Ok(AppError::InvalidState(format!(
                "Cannot {} trip in status '{}'",
                operation, trip.status
            ))),
        }
    }
}
