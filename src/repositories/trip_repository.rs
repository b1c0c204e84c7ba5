//! Repositorio de trips
//!
//! SQL del ledger de viajes. Las transiciones de estado se imponen con
//! predicados de status en el WHERE de cada UPDATE: si no hay fila
//! afectada, el caller distingue NotFound de InvalidState releyendo el
//! estado actual.

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::trip_dto::{CompleteTripRequest, CreateTripRequest};
use crate::models::{Trip, TripField};
use crate::utils::errors::AppError;

pub struct TripRepository {
    pool: PgPool,
}

impl TripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: &CreateTripRequest) -> Result<Trip, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            INSERT INTO trips (
                id, pickup_location, drop_location, trip_type, car, pickup_date,
                pickup_time, days, km_price, km, betta, phone, state,
                customer_name, customer_remark, adult, child, luggage,
                customer_current_location, status, accepted_drivers, created_at
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                $15, $16, $17, $18, $19, 'pending', '[]'::jsonb, now()
            )
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.pickup_location)
        .bind(&request.drop_location)
        .bind(&request.trip_type)
        .bind(&request.car)
        .bind(&request.pickup_date)
        .bind(&request.pickup_time)
        .bind(request.days)
        .bind(request.km_price)
        .bind(request.km)
        .bind(request.betta)
        .bind(&request.phone)
        .bind(&request.state)
        .bind(&request.customer_name)
        .bind(&request.customer_remark)
        .bind(request.adult)
        .bind(request.child)
        .bind(request.luggage)
        .bind(&request.customer_current_location)
        .fetch_one(&self.pool)
        .await?;

        Ok(trip)
    }

    /// Aceptación de un driver. La unión del conjunto se calcula del lado del
    /// servidor dentro de un único UPDATE: dos aceptaciones simultáneas nunca
    /// se pisan porque no hay round trip de lectura-modificación-escritura.
    /// Idempotente para el mismo email.
    pub async fn accept(
        &self,
        trip_id: Uuid,
        driver_email: &str,
    ) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            UPDATE trips
            SET accepted_drivers = CASE
                    WHEN jsonb_exists(accepted_drivers, $2) THEN accepted_drivers
                    ELSE accepted_drivers || to_jsonb($2::text)
                END,
                status = 'accept'
            WHERE id = $1 AND status IN ('pending', 'accept')
            RETURNING *
            "#,
        )
        .bind(trip_id)
        .bind(driver_email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(trip)
    }

    /// Asignación administrativa. No puede pisar un viaje en curso o terminado.
    pub async fn assign(
        &self,
        trip_id: Uuid,
        driver_email: &str,
    ) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            UPDATE trips
            SET driver_email = $2, status = 'accept', assigned_at = now()
            WHERE id = $1 AND status IN ('pending', 'accept')
            RETURNING *
            "#,
        )
        .bind(trip_id)
        .bind(driver_email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(trip)
    }

    /// accept → WIP. Cualquier otro estado origen no afecta filas.
    pub async fn start(&self, trip_id: Uuid) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            "UPDATE trips SET status = 'WIP' WHERE id = $1 AND status = 'accept' RETURNING *",
        )
        .bind(trip_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(trip)
    }

    /// WIP → completed. Escribe todos los campos de cierre en una sola
    /// sentencia; los campos de cierre se pueblan exactamente una vez.
    pub async fn complete(
        &self,
        trip_id: Uuid,
        start_meter: Decimal,
        end_meter: Decimal,
        final_bill: Decimal,
        request: &CompleteTripRequest,
    ) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            UPDATE trips
            SET start_meter = $2,
                end_meter = $3,
                luggage_charge = $4,
                pet_charge = $5,
                toll_charge = $6,
                hills_charge = $7,
                total_km = $8,
                final_km = $9,
                final_bill = $10,
                status = 'completed'
            WHERE id = $1 AND status = 'WIP'
            RETURNING *
            "#,
        )
        .bind(trip_id)
        .bind(start_meter)
        .bind(end_meter)
        .bind(request.luggage)
        .bind(request.pet)
        .bind(request.toll)
        .bind(request.hills)
        .bind(request.total_km)
        .bind(request.final_km)
        .bind(final_bill)
        .fetch_optional(&self.pool)
        .await?;

        Ok(trip)
    }

    /// Actualización de un campo whitelisteado. La columna sale del enum
    /// TripField, nunca de input del cliente.
    pub async fn update_field(
        &self,
        trip_id: Uuid,
        field: TripField,
        value: Decimal,
    ) -> Result<u64, AppError> {
        let query = format!("UPDATE trips SET {} = $2 WHERE id = $1", field.column());
        let result = sqlx::query(&query)
            .bind(trip_id)
            .bind(value)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn find_by_id(&self, trip_id: Uuid) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE id = $1")
            .bind(trip_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(trip)
    }

    pub async fn list_all(&self) -> Result<Vec<Trip>, AppError> {
        let trips = sqlx::query_as::<_, Trip>("SELECT * FROM trips ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(trips)
    }

    pub async fn list_by_driver_and_status(
        &self,
        driver_email: &str,
        status: &str,
    ) -> Result<Vec<Trip>, AppError> {
        let trips = sqlx::query_as::<_, Trip>(
            "SELECT * FROM trips WHERE driver_email = $1 AND status = $2 ORDER BY created_at DESC",
        )
        .bind(driver_email)
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }

    /// Viajes en accept o WIP para un driver
    pub async fn list_active_for_driver(
        &self,
        driver_email: &str,
    ) -> Result<Vec<Trip>, AppError> {
        let trips = sqlx::query_as::<_, Trip>(
            r#"
            SELECT * FROM trips
            WHERE driver_email = $1 AND status IN ('accept', 'WIP')
            ORDER BY created_at DESC
            "#,
        )
        .bind(driver_email)
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }

    pub async fn delete(&self, trip_id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM trips WHERE id = $1")
            .bind(trip_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
