//! Modelos del dominio
//!
//! Drivers, trips (con su máquina de estados) y bills.

pub mod bill;
pub mod driver;
pub mod trip;

pub use bill::Bill;
pub use driver::{Driver, DriverStatus};
pub use trip::{Trip, TripField, TripStatus};
