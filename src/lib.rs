//! Backend de despacho de taxis
//!
//! Directorio de conductores + ledger de viajes con su máquina de estados
//! (pending → accept → WIP → completed) y facturas derivadas.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
