//! Repositorio de drivers
//!
//! Todo el SQL del directorio de conductores vive aquí. Cada mutación es
//! un único UPDATE sobre un registro, sin efectos cruzados.

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::models::Driver;
use crate::utils::errors::AppError;

/// Fila cruda de la consulta de colisiones de campos únicos
#[derive(Debug, sqlx::FromRow)]
pub struct UniqueFieldRow {
    pub email: String,
    pub phone: String,
    pub rc_number: String,
    pub insurance_number: String,
}

pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, driver: &Driver) -> Result<Driver, AppError> {
        let result = sqlx::query_as::<_, Driver>(
            r#"
            INSERT INTO drivers (
                id, name, email, phone, password_hash, rc_number, fc_expiry,
                insurance_number, insurance_expiry, driving_license, dl_expiry,
                status, current_location, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(driver.id)
        .bind(&driver.name)
        .bind(&driver.email)
        .bind(&driver.phone)
        .bind(&driver.password_hash)
        .bind(&driver.rc_number)
        .bind(&driver.fc_expiry)
        .bind(&driver.insurance_number)
        .bind(&driver.insurance_expiry)
        .bind(&driver.driving_license)
        .bind(&driver.dl_expiry)
        .bind(&driver.status)
        .bind(&driver.current_location)
        .bind(driver.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Driver>, AppError> {
        let result = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Driver>, AppError> {
        let result = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    /// Una sola consulta OR sobre los cuatro campos únicos. El caller decide
    /// qué campo colisionó comprobando pertenencia por campo en el resultado.
    pub async fn find_unique_collisions(
        &self,
        email: &str,
        phone: &str,
        rc_number: &str,
        insurance_number: &str,
    ) -> Result<Vec<UniqueFieldRow>, AppError> {
        let rows = sqlx::query_as::<_, UniqueFieldRow>(
            r#"
            SELECT email, phone, rc_number, insurance_number FROM drivers
            WHERE email = $1 OR phone = $2 OR rc_number = $3 OR insurance_number = $4
            "#,
        )
        .bind(email)
        .bind(phone)
        .bind(rc_number)
        .bind(insurance_number)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Actualización parcial de perfil. Las columnas llegan ya whitelisteadas
    /// por el controller (ver models::driver::PROFILE_FIELD_MAP).
    pub async fn update_columns(
        &self,
        id: Uuid,
        columns: &[(&'static str, String)],
    ) -> Result<u64, AppError> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE drivers SET ");

        let mut separated = builder.separated(", ");
        for (column, value) in columns {
            separated.push(format!("{} = ", column));
            separated.push_bind_unseparated(value.clone());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id);

        let result = builder.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE drivers SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn update_location(&self, id: Uuid, location: &str) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE drivers SET current_location = $2 WHERE id = $1")
            .bind(id)
            .bind(location)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM drivers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn list_all(&self) -> Result<Vec<Driver>, AppError> {
        let result = sqlx::query_as::<_, Driver>("SELECT * FROM drivers ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }

    /// Listado resumido: email + nombre
    pub async fn list_summary(&self) -> Result<Vec<(String, String)>, AppError> {
        let result: Vec<(String, String)> =
            sqlx::query_as("SELECT email, name FROM drivers ORDER BY name")
                .fetch_all(&self.pool)
                .await?;

        Ok(result)
    }

    pub async fn find_status_by_email(&self, email: &str) -> Result<Option<String>, AppError> {
        let result: Option<(String,)> =
            sqlx::query_as("SELECT status FROM drivers WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

        Ok(result.map(|r| r.0))
    }

    pub async fn find_location_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<Option<String>>, AppError> {
        let result: Option<(Option<String>,)> =
            sqlx::query_as("SELECT current_location FROM drivers WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(result.map(|r| r.0))
    }
}
