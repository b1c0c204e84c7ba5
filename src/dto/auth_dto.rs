//! DTOs de autenticación

use serde::{Deserialize, Serialize};

use super::driver_dto::DriverResponse;

/// Request de login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response de login: token de sesión (7 días) + conductor sin secreto
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: DriverResponse,
}
