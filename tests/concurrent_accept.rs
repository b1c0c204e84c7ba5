//! Test de concurrencia de AcceptTrip.
//!
//! Reproduce la carrera clásica de lost-update en la aceptación: N drivers
//! aceptando el mismo viaje a la vez. Con lectura-modificación-escritura
//! dos aceptaciones simultáneas pueden leer el mismo conjunto previo y
//! pisarse entre sí; la unión atómica del lado del servidor lo impide.

use std::collections::HashSet;

use taxi_dispatch::controllers::TripController;
use taxi_dispatch::dto::trip_dto::CreateTripRequest;
use taxi_dispatch::repositories::TripRepository;

mod common;
use common::{test_pool, unique_tag};

const NUM_CONCURRENT_DRIVERS: usize = 10;

#[tokio::test]
async fn test_concurrent_acceptance_is_lossless() {
    if std::env::var("DATABASE_URL").is_err() {
        println!("Skipping test because DATABASE_URL is not set");
        return;
    }

    let pool = test_pool().await;
    let controller = TripController::new(pool.clone());

    let created = controller
        .create(CreateTripRequest::default())
        .await
        .expect("Failed to create trip");

    let tag = unique_tag();
    let emails: Vec<String> = (0..NUM_CONCURRENT_DRIVERS)
        .map(|i| format!("driver-{}-{}@example.com", tag, i))
        .collect();

    let mut handles = vec![];
    for email in &emails {
        let pool = pool.clone();
        let email = email.clone();
        let trip_id = created.trip_id;
        handles.push(tokio::spawn(async move {
            TripRepository::new(pool).accept(trip_id, &email).await
        }));
    }

    for handle in handles {
        handle
            .await
            .expect("Task join failed")
            .expect("Accept failed")
            .expect("Trip should exist");
    }

    // Ninguna aceptación se perdió: las N están en el conjunto
    let trip = controller.get_by_id(created.trip_id).await.unwrap();
    assert_eq!(
        trip.accepted_drivers.len(),
        NUM_CONCURRENT_DRIVERS,
        "Lost update in acceptedDrivers under concurrency"
    );

    let accepted: HashSet<_> = trip.accepted_drivers.iter().cloned().collect();
    for email in &emails {
        assert!(accepted.contains(email), "Missing acceptance for {}", email);
    }
    assert_eq!(trip.status, "accept");
}

#[tokio::test]
async fn test_concurrent_acceptance_same_driver_stays_deduplicated() {
    if std::env::var("DATABASE_URL").is_err() {
        println!("Skipping test because DATABASE_URL is not set");
        return;
    }

    let pool = test_pool().await;
    let controller = TripController::new(pool.clone());

    let created = controller
        .create(CreateTripRequest::default())
        .await
        .expect("Failed to create trip");

    let email = format!("repeat-{}@example.com", unique_tag());

    let mut handles = vec![];
    for _ in 0..NUM_CONCURRENT_DRIVERS {
        let pool = pool.clone();
        let email = email.clone();
        let trip_id = created.trip_id;
        handles.push(tokio::spawn(async move {
            TripRepository::new(pool).accept(trip_id, &email).await
        }));
    }

    for handle in handles {
        handle.await.expect("Task join failed").expect("Accept failed");
    }

    // semántica de conjunto: el mismo email aparece una sola vez
    let trip = controller.get_by_id(created.trip_id).await.unwrap();
    assert_eq!(trip.accepted_drivers, vec![email]);
}
