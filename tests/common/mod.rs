//! Helpers compartidos por los tests de integración.
//!
//! Los tests requieren una base PostgreSQL accesible vía DATABASE_URL y se
//! saltan (return temprano) cuando la variable no está definida.

#![allow(dead_code)]

use sqlx::PgPool;

use taxi_dispatch::config::database::DatabaseConfig;
use taxi_dispatch::database::schema;

/// Pool de test con el schema inicializado
pub async fn test_pool() -> PgPool {
    let config = DatabaseConfig::default();
    let pool = config
        .create_test_pool()
        .await
        .expect("Failed to connect to test database");

    schema::init_schema(&pool)
        .await
        .expect("Failed to initialize schema");

    pool
}

/// Sufijo único por test para aislar identidades entre ejecuciones
pub fn unique_tag() -> u128 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos()
}

pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.com", prefix, unique_tag())
}
