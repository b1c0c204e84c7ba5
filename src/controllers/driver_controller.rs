//! Controller del directorio de conductores
//!
//! Validación y orquestación de las operaciones sobre drivers. Toda la
//! validación ocurre antes de tocar la base de datos.

use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::dto::driver_dto::{
    CheckExistsRequest, CheckExistsResponse, DriverResponse, DriverSummary,
    RegisterDriverRequest,
};
use crate::models::driver::{profile_column, Driver, DriverStatus};
use crate::repositories::DriverRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};

pub struct DriverController {
    repository: DriverRepository,
}

impl DriverController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DriverRepository::new(pool),
        }
    }

    pub async fn register(
        &self,
        request: RegisterDriverRequest,
    ) -> Result<DriverResponse, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        // El estado inicial lo puede fijar el caller; cualquier valor fuera
        // de {active, paused} se rechaza.
        let status = match &request.status {
            Some(value) => DriverStatus::parse(value)
                .ok_or_else(|| AppError::Validation(format!("Invalid status '{}'", value)))?,
            None => DriverStatus::Active,
        };

        // Reportamos cada campo que colisiona, no un fallo genérico: el
        // frontend le dice al usuario exactamente qué corregir.
        let exists = self
            .check_exists(CheckExistsRequest {
                email: request.email.clone(),
                phone_number: request.phone_number.clone(),
                rc_number: request.rc_number.clone(),
                insurance_number: request.insurance_number.clone(),
            })
            .await?;

        if exists.any() {
            let mut collided = Vec::new();
            if exists.email {
                collided.push("email");
            }
            if exists.phone_number {
                collided.push("phoneNumber");
            }
            if exists.rc_number {
                collided.push("rcNumber");
            }
            if exists.insurance_number {
                collided.push("insuranceNumber");
            }
            return Err(AppError::Conflict(format!(
                "Driver already exists with the same: {}",
                collided.join(", ")
            )));
        }

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

        let driver = Driver {
            id: Uuid::new_v4(),
            name: request.name,
            email: request.email,
            phone: request.phone_number,
            password_hash,
            rc_number: request.rc_number,
            fc_expiry: request.fc_date,
            insurance_number: request.insurance_number,
            insurance_expiry: request.insurance_expiry_date,
            driving_license: request.driving_license,
            dl_expiry: request.driving_license_expiry_date,
            status: status.as_str().to_string(),
            current_location: None,
            created_at: Utc::now(),
        };

        let saved = self.repository.create(&driver).await?;
        Ok(saved.into())
    }

    /// Cuatro booleanos independientes calculados sobre una única consulta OR.
    /// No se corta en la primera colisión.
    pub async fn check_exists(
        &self,
        request: CheckExistsRequest,
    ) -> Result<CheckExistsResponse, AppError> {
        let rows = self
            .repository
            .find_unique_collisions(
                &request.email,
                &request.phone_number,
                &request.rc_number,
                &request.insurance_number,
            )
            .await?;

        Ok(CheckExistsResponse {
            email: rows.iter().any(|r| r.email == request.email),
            phone_number: rows.iter().any(|r| r.phone == request.phone_number),
            rc_number: rows.iter().any(|r| r.rc_number == request.rc_number),
            insurance_number: rows
                .iter()
                .any(|r| r.insurance_number == request.insurance_number),
        })
    }

    /// Login con verificación bcrypt. El error es idéntico para email
    /// desconocido y password incorrecto.
    pub async fn login(
        &self,
        request: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let driver = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let valid = verify(&request.password, &driver.password_hash)
            .map_err(|e| AppError::Internal(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::InvalidCredentials);
        }

        let token = generate_token(driver.id, &driver.email, jwt_config)?;

        Ok(LoginResponse {
            token,
            user: driver.into(),
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<DriverResponse, AppError> {
        let driver = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

        Ok(driver.into())
    }

    pub async fn get_status(&self, email: &str) -> Result<String, AppError> {
        self.repository
            .find_status_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))
    }

    pub async fn get_location(&self, id: Uuid) -> Result<Option<String>, AppError> {
        self.repository
            .find_location_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))
    }

    /// Actualización parcial de perfil. Solo las claves del mapa explícito
    /// clave→columna se aplican; las desconocidas se ignoran en silencio.
    pub async fn update_profile(
        &self,
        id: Uuid,
        updates: serde_json::Map<String, serde_json::Value>,
    ) -> Result<u64, AppError> {
        let mut columns: Vec<(&'static str, String)> = Vec::new();

        for (key, value) in &updates {
            let Some(column) = profile_column(key) else {
                continue;
            };

            let raw = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                _ => continue,
            };

            // El password nunca se guarda en claro
            let stored = if column == "password_hash" {
                hash(&raw, DEFAULT_COST)
                    .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?
            } else {
                raw
            };

            columns.push((column, stored));
        }

        if columns.is_empty() {
            return Err(AppError::Validation(
                "No valid fields to update".to_string(),
            ));
        }

        let affected = self.repository.update_columns(id, &columns).await?;
        if affected == 0 {
            return Err(AppError::NotFound("Driver not found".to_string()));
        }

        Ok(affected)
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<(), AppError> {
        let status = DriverStatus::parse(status)
            .ok_or_else(|| AppError::Validation(format!("Invalid status '{}'", status)))?;

        let affected = self.repository.update_status(id, status.as_str()).await?;
        if affected == 0 {
            return Err(AppError::NotFound("Driver not found".to_string()));
        }

        Ok(())
    }

    pub async fn update_location(&self, id: Uuid, district: &str) -> Result<(), AppError> {
        if district.trim().is_empty() {
            return Err(AppError::Validation(
                "currentDistrict is required".to_string(),
            ));
        }

        let affected = self.repository.update_location(id, district).await?;
        if affected == 0 {
            return Err(AppError::NotFound("Driver not found".to_string()));
        }

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let affected = self.repository.delete(id).await?;
        if affected == 0 {
            return Err(AppError::NotFound("Driver not found".to_string()));
        }

        Ok(())
    }

    /// Listado completo, sin el secreto
    pub async fn list_all(&self) -> Result<Vec<DriverResponse>, AppError> {
        let drivers = self.repository.list_all().await?;
        Ok(drivers.into_iter().map(DriverResponse::from).collect())
    }

    /// Listado resumido: email + nombre
    pub async fn list_summary(&self) -> Result<Vec<DriverSummary>, AppError> {
        let rows = self.repository.list_summary().await?;
        Ok(rows
            .into_iter()
            .map(|(email, name)| DriverSummary { email, name })
            .collect())
    }
}
