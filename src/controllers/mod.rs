//! Controllers del sistema
//!
//! Orquestación y validación; el SQL vive en los repositorios.

pub mod bill_controller;
pub mod driver_controller;
pub mod trip_controller;

pub use bill_controller::BillController;
pub use driver_controller::DriverController;
pub use trip_controller::TripController;
