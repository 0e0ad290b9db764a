//! Services Layer
//!
//! Business workflows extracted from HTTP handlers. Handlers stay thin and
//! call into these with the shared `AppState`.

pub mod hero_power_service;
pub mod hero_service;
pub mod power_service;
