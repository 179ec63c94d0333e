//! API de registro de motos em memória
//!
//! CRUD de motos sobre um mapa concorrente em memória, com ids
//! monotônicos atribuídos pelo registro e unicidade de placa.

pub mod config;
pub mod middleware;
pub mod models;
pub mod registry;
pub mod routes;
pub mod state;
pub mod utils;
