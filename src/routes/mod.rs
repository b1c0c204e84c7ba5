//! Rutas de la API

pub mod bill_routes;
pub mod driver_routes;
pub mod trip_routes;
