//! Domain layer - Pure business abstractions
//!
//! This layer contains NO web framework dependencies (no Axum).
//! Entities, repository traits, validation rules and response views.

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod validation;
pub mod views;

pub use entities::*;
pub use errors::DomainError;
pub use repositories::*;
