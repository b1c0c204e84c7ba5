//! Repositorios sobre PostgreSQL
//!
//! Cada repositorio recibe el pool explícitamente; no hay estado global.

pub mod bill_repository;
pub mod driver_repository;
pub mod trip_repository;

pub use bill_repository::BillRepository;
pub use driver_repository::DriverRepository;
pub use trip_repository::TripRepository;
