//! Tests de integración de la máquina de estados del viaje.
//!
//! Requieren PostgreSQL vía DATABASE_URL; se saltan si no está definida.

use rust_decimal::Decimal;
use uuid::Uuid;

use taxi_dispatch::controllers::TripController;
use taxi_dispatch::dto::trip_dto::{
    CompleteTripRequest, CreateTripRequest, UpdateFieldRequest,
};
use taxi_dispatch::utils::errors::AppError;

mod common;
use common::{test_pool, unique_email};

fn basic_trip_request() -> CreateTripRequest {
    CreateTripRequest {
        pickup_location: Some("Madurai".to_string()),
        drop_location: Some("Chennai".to_string()),
        customer_name: Some("Kumar".to_string()),
        ..CreateTripRequest::default()
    }
}

fn complete_request(start: i64, end: i64, bill: i64) -> CompleteTripRequest {
    CompleteTripRequest {
        start_meter: Some(Decimal::from(start)),
        end_meter: Some(Decimal::from(end)),
        luggage: Decimal::ZERO,
        pet: Decimal::ZERO,
        toll: Decimal::ZERO,
        hills: Decimal::ZERO,
        total_km: Decimal::from(end - start),
        final_km: Decimal::from(end - start),
        final_bill: Some(Decimal::from(bill)),
    }
}

#[tokio::test]
async fn test_full_lifecycle_pending_to_completed() {
    if std::env::var("DATABASE_URL").is_err() {
        println!("Skipping test because DATABASE_URL is not set");
        return;
    }

    let controller = TripController::new(test_pool().await);
    let driver = unique_email("lifecycle");

    // pending
    let created = controller.create(basic_trip_request()).await.unwrap();
    let trip = controller.get_by_id(created.trip_id).await.unwrap();
    assert_eq!(trip.status, "pending");
    assert!(trip.accepted_drivers.is_empty());
    assert!(trip.driver_email.is_none());

    // pending --accept--> accept
    let trip = controller.accept(created.trip_id, &driver).await.unwrap();
    assert_eq!(trip.status, "accept");
    assert_eq!(trip.accepted_drivers, vec![driver.clone()]);

    // accept --start--> WIP
    let trip = controller.start(created.trip_id).await.unwrap();
    assert_eq!(trip.status, "WIP");

    // WIP --complete--> completed
    let response = controller
        .complete(created.trip_id, complete_request(100, 150, 500))
        .await
        .unwrap();
    assert_eq!(response.final_bill, Decimal::from(500));

    let trip = controller.get_by_id(created.trip_id).await.unwrap();
    assert_eq!(trip.status, "completed");
    assert_eq!(trip.start_meter, Some(Decimal::from(100)));
    assert_eq!(trip.end_meter, Some(Decimal::from(150)));
    assert_eq!(trip.final_bill, Some(Decimal::from(500)));
}

#[tokio::test]
async fn test_accept_is_idempotent_per_driver() {
    if std::env::var("DATABASE_URL").is_err() {
        println!("Skipping test because DATABASE_URL is not set");
        return;
    }

    let controller = TripController::new(test_pool().await);
    let driver = unique_email("idempotent");

    let created = controller.create(basic_trip_request()).await.unwrap();
    controller.accept(created.trip_id, &driver).await.unwrap();
    let trip = controller.accept(created.trip_id, &driver).await.unwrap();

    // el conjunto contiene al driver exactamente una vez
    assert_eq!(trip.accepted_drivers, vec![driver]);
    assert_eq!(trip.status, "accept");
}

#[tokio::test]
async fn test_start_on_pending_trip_is_rejected() {
    if std::env::var("DATABASE_URL").is_err() {
        println!("Skipping test because DATABASE_URL is not set");
        return;
    }

    let controller = TripController::new(test_pool().await);

    let created = controller.create(basic_trip_request()).await.unwrap();
    let err = controller.start(created.trip_id).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));

    // el estado no cambió
    let trip = controller.get_by_id(created.trip_id).await.unwrap();
    assert_eq!(trip.status, "pending");
}

#[tokio::test]
async fn test_assign_on_wip_trip_is_rejected() {
    if std::env::var("DATABASE_URL").is_err() {
        println!("Skipping test because DATABASE_URL is not set");
        return;
    }

    let controller = TripController::new(test_pool().await);
    let bidder = unique_email("bidder");
    let admin_pick = unique_email("admin-pick");

    let created = controller.create(basic_trip_request()).await.unwrap();
    controller.accept(created.trip_id, &bidder).await.unwrap();
    controller.start(created.trip_id).await.unwrap();

    let err = controller
        .assign(created.trip_id, &admin_pick)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));

    // el viaje quedó intacto
    let trip = controller.get_by_id(created.trip_id).await.unwrap();
    assert_eq!(trip.status, "WIP");
    assert!(trip.driver_email.is_none());
}

#[tokio::test]
async fn test_assign_sets_driver_and_status() {
    if std::env::var("DATABASE_URL").is_err() {
        println!("Skipping test because DATABASE_URL is not set");
        return;
    }

    let controller = TripController::new(test_pool().await);
    let driver = unique_email("assigned");

    let created = controller.create(basic_trip_request()).await.unwrap();
    let trip = controller.assign(created.trip_id, &driver).await.unwrap();

    assert_eq!(trip.status, "accept");
    assert_eq!(trip.driver_email.as_deref(), Some(driver.as_str()));
    assert!(trip.assigned_at.is_some());
}

#[tokio::test]
async fn test_complete_requires_meter_and_bill_fields() {
    if std::env::var("DATABASE_URL").is_err() {
        println!("Skipping test because DATABASE_URL is not set");
        return;
    }

    let controller = TripController::new(test_pool().await);
    let driver = unique_email("incomplete");

    let created = controller.create(basic_trip_request()).await.unwrap();
    controller.accept(created.trip_id, &driver).await.unwrap();
    controller.start(created.trip_id).await.unwrap();

    let mut request = complete_request(100, 150, 500);
    request.final_bill = None;

    let err = controller.complete(created.trip_id, request).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    // la validación ocurre antes de tocar storage: sigue en WIP
    let trip = controller.get_by_id(created.trip_id).await.unwrap();
    assert_eq!(trip.status, "WIP");
}

#[tokio::test]
async fn test_complete_on_pending_trip_is_rejected() {
    if std::env::var("DATABASE_URL").is_err() {
        println!("Skipping test because DATABASE_URL is not set");
        return;
    }

    let controller = TripController::new(test_pool().await);

    let created = controller.create(basic_trip_request()).await.unwrap();
    let err = controller
        .complete(created.trip_id, complete_request(100, 150, 500))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));
}

#[tokio::test]
async fn test_completed_is_terminal() {
    if std::env::var("DATABASE_URL").is_err() {
        println!("Skipping test because DATABASE_URL is not set");
        return;
    }

    let controller = TripController::new(test_pool().await);
    let driver = unique_email("terminal");
    let late = unique_email("late");

    let created = controller.create(basic_trip_request()).await.unwrap();
    controller.accept(created.trip_id, &driver).await.unwrap();
    controller.start(created.trip_id).await.unwrap();
    controller
        .complete(created.trip_id, complete_request(10, 20, 100))
        .await
        .unwrap();

    // ninguna transición posterior prospera
    let err = controller.accept(created.trip_id, &late).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));

    let err = controller.assign(created.trip_id, &late).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));

    let err = controller.start(created.trip_id).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));

    let err = controller
        .complete(created.trip_id, complete_request(20, 30, 200))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));
}

#[tokio::test]
async fn test_update_field_whitelist() {
    if std::env::var("DATABASE_URL").is_err() {
        println!("Skipping test because DATABASE_URL is not set");
        return;
    }

    let controller = TripController::new(test_pool().await);

    let created = controller.create(basic_trip_request()).await.unwrap();

    // 'status' no está en el whitelist
    let err = controller
        .update_field(UpdateFieldRequest {
            trip_id: created.trip_id,
            field: "status".to_string(),
            value: Decimal::ZERO,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let trip = controller.get_by_id(created.trip_id).await.unwrap();
    assert_eq!(trip.status, "pending");

    // un campo permitido sí se aplica
    controller
        .update_field(UpdateFieldRequest {
            trip_id: created.trip_id,
            field: "toll".to_string(),
            value: Decimal::from(75),
        })
        .await
        .unwrap();

    let trip = controller.get_by_id(created.trip_id).await.unwrap();
    assert_eq!(trip.toll_charge, Some(Decimal::from(75)));
}

#[tokio::test]
async fn test_operations_on_missing_trip_fail_not_found() {
    if std::env::var("DATABASE_URL").is_err() {
        println!("Skipping test because DATABASE_URL is not set");
        return;
    }

    let controller = TripController::new(test_pool().await);
    let ghost = Uuid::new_v4();

    let err = controller
        .accept(ghost, &unique_email("ghost"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = controller.start(ghost).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = controller.get_by_id(ghost).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = controller.delete(ghost).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_active_trips_partitioned_by_bucket() {
    if std::env::var("DATABASE_URL").is_err() {
        println!("Skipping test because DATABASE_URL is not set");
        return;
    }

    let controller = TripController::new(test_pool().await);
    let driver = unique_email("buckets");

    // un viaje asignado que sigue en accept
    let accepted = controller.create(basic_trip_request()).await.unwrap();
    controller.assign(accepted.trip_id, &driver).await.unwrap();

    // otro asignado y arrancado
    let wip = controller.create(basic_trip_request()).await.unwrap();
    controller.assign(wip.trip_id, &driver).await.unwrap();
    controller.start(wip.trip_id).await.unwrap();

    let active = controller.active_for_driver(&driver).await.unwrap();
    assert_eq!(active.accepted_trips.len(), 1);
    assert_eq!(active.accepted_trips[0].id, accepted.trip_id);
    assert_eq!(active.wip_trips.len(), 1);
    assert_eq!(active.wip_trips[0].id, wip.trip_id);
}
