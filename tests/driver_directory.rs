//! Tests de integración del directorio de conductores.

use taxi_dispatch::controllers::DriverController;
use taxi_dispatch::dto::auth_dto::LoginRequest;
use taxi_dispatch::dto::driver_dto::{CheckExistsRequest, RegisterDriverRequest};
use taxi_dispatch::utils::errors::AppError;
use taxi_dispatch::utils::jwt::{verify_token, JwtConfig};

mod common;
use common::{test_pool, unique_tag};

fn register_request(tag: u128) -> RegisterDriverRequest {
    RegisterDriverRequest {
        name: "Test Driver".to_string(),
        email: format!("driver-{}@example.com", tag),
        phone_number: format!("99{}", tag % 100_000_000),
        password: "secret123".to_string(),
        rc_number: format!("RC-{}", tag),
        fc_date: Some("2026-01-01".to_string()),
        insurance_number: format!("INS-{}", tag),
        insurance_expiry_date: Some("2026-06-01".to_string()),
        driving_license: Some(format!("DL-{}", tag)),
        driving_license_expiry_date: Some("2027-01-01".to_string()),
        status: None,
    }
}

fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret".to_string(),
        expiration: 7 * 24 * 3600,
    }
}

#[tokio::test]
async fn test_register_defaults_to_active_and_strips_secret() {
    if std::env::var("DATABASE_URL").is_err() {
        println!("Skipping test because DATABASE_URL is not set");
        return;
    }

    let controller = DriverController::new(test_pool().await);
    let request = register_request(unique_tag());
    let email = request.email.clone();

    let driver = controller.register(request).await.unwrap();
    assert_eq!(driver.status, "active");
    assert_eq!(driver.email, email);

    // la respuesta no expone el secreto de ninguna forma
    let json = serde_json::to_value(&driver).unwrap();
    assert!(json.get("password").is_none());
    assert!(json.get("passwordHash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email_reports_collided_field() {
    if std::env::var("DATABASE_URL").is_err() {
        println!("Skipping test because DATABASE_URL is not set");
        return;
    }

    let controller = DriverController::new(test_pool().await);
    let tag = unique_tag();

    controller.register(register_request(tag)).await.unwrap();

    // mismo email, resto de campos únicos distintos
    let mut duplicate = register_request(unique_tag());
    duplicate.email = format!("driver-{}@example.com", tag);

    let err = controller.register(duplicate).await.unwrap_err();
    match err {
        AppError::Conflict(msg) => {
            assert!(msg.contains("email"));
            assert!(!msg.contains("phoneNumber"));
        }
        other => panic!("expected Conflict, got {:?}", other),
    }
}

#[tokio::test]
async fn test_check_exists_reports_each_field_independently() {
    if std::env::var("DATABASE_URL").is_err() {
        println!("Skipping test because DATABASE_URL is not set");
        return;
    }

    let controller = DriverController::new(test_pool().await);
    let tag = unique_tag();
    let registered = register_request(tag);
    let phone = registered.phone_number.clone();
    controller.register(register_request(tag)).await.unwrap();

    // solo el teléfono colisiona
    let other = unique_tag();
    let exists = controller
        .check_exists(CheckExistsRequest {
            email: format!("other-{}@example.com", other),
            phone_number: phone,
            rc_number: format!("RC-{}", other),
            insurance_number: format!("INS-{}", other),
        })
        .await
        .unwrap();

    assert!(!exists.email);
    assert!(exists.phone_number);
    assert!(!exists.rc_number);
    assert!(!exists.insurance_number);
}

#[tokio::test]
async fn test_login_issues_token_for_valid_credentials() {
    if std::env::var("DATABASE_URL").is_err() {
        println!("Skipping test because DATABASE_URL is not set");
        return;
    }

    let controller = DriverController::new(test_pool().await);
    let request = register_request(unique_tag());
    let email = request.email.clone();
    controller.register(request).await.unwrap();

    let jwt_config = test_jwt_config();
    let response = controller
        .login(
            LoginRequest {
                email: email.clone(),
                password: "secret123".to_string(),
            },
            &jwt_config,
        )
        .await
        .unwrap();

    assert_eq!(response.user.email, email);

    let claims = verify_token(&response.token, &jwt_config).unwrap();
    assert_eq!(claims.email, email);
    assert_eq!(claims.sub, response.user.id.to_string());
}

#[tokio::test]
async fn test_login_failure_is_identical_for_bad_email_and_bad_password() {
    if std::env::var("DATABASE_URL").is_err() {
        println!("Skipping test because DATABASE_URL is not set");
        return;
    }

    let controller = DriverController::new(test_pool().await);
    let request = register_request(unique_tag());
    let email = request.email.clone();
    controller.register(request).await.unwrap();

    let jwt_config = test_jwt_config();

    let wrong_password = controller
        .login(
            LoginRequest {
                email,
                password: "wrong".to_string(),
            },
            &jwt_config,
        )
        .await
        .unwrap_err();

    let unknown_email = controller
        .login(
            LoginRequest {
                email: format!("nobody-{}@example.com", unique_tag()),
                password: "secret123".to_string(),
            },
            &jwt_config,
        )
        .await
        .unwrap_err();

    // el error no revela cuál de los dos campos falló
    assert!(matches!(wrong_password, AppError::InvalidCredentials));
    assert!(matches!(unknown_email, AppError::InvalidCredentials));
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
}

#[tokio::test]
async fn test_update_status_rejects_unknown_values() {
    if std::env::var("DATABASE_URL").is_err() {
        println!("Skipping test because DATABASE_URL is not set");
        return;
    }

    let controller = DriverController::new(test_pool().await);
    let driver = controller
        .register(register_request(unique_tag()))
        .await
        .unwrap();

    let err = controller
        .update_status(driver.id, "blocked")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    controller.update_status(driver.id, "paused").await.unwrap();
    let updated = controller.get_by_id(driver.id).await.unwrap();
    assert_eq!(updated.status, "paused");
}

#[tokio::test]
async fn test_update_profile_ignores_unknown_keys() {
    if std::env::var("DATABASE_URL").is_err() {
        println!("Skipping test because DATABASE_URL is not set");
        return;
    }

    let controller = DriverController::new(test_pool().await);
    let driver = controller
        .register(register_request(unique_tag()))
        .await
        .unwrap();

    // claves desconocidas se ignoran; las conocidas se aplican
    let mut updates = serde_json::Map::new();
    updates.insert("name".to_string(), serde_json::json!("Renamed Driver"));
    updates.insert("bogusField".to_string(), serde_json::json!("ignored"));
    controller.update_profile(driver.id, updates).await.unwrap();

    let updated = controller.get_by_id(driver.id).await.unwrap();
    assert_eq!(updated.name, "Renamed Driver");

    // un payload solo con claves desconocidas es un error de validación
    let mut bogus = serde_json::Map::new();
    bogus.insert("bogusField".to_string(), serde_json::json!("x"));
    let err = controller.update_profile(driver.id, bogus).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_update_location_and_delete() {
    if std::env::var("DATABASE_URL").is_err() {
        println!("Skipping test because DATABASE_URL is not set");
        return;
    }

    let controller = DriverController::new(test_pool().await);
    let driver = controller
        .register(register_request(unique_tag()))
        .await
        .unwrap();

    controller
        .update_location(driver.id, "Anna Nagar")
        .await
        .unwrap();
    let location = controller.get_location(driver.id).await.unwrap();
    assert_eq!(location.as_deref(), Some("Anna Nagar"));

    let err = controller.update_location(driver.id, "  ").await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    controller.delete(driver.id).await.unwrap();
    let err = controller.get_by_id(driver.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
