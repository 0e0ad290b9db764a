pub mod error;
pub mod health;
pub mod hero_powers;
pub mod heroes;
pub mod powers;

use axum::{
    Router,
    routing::{get, post},
};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::index))
        // Health check
        .route("/health", get(health::health_check))
        // Heroes
        .route("/heroes", get(heroes::list_heroes))
        .route("/heroes/:id", get(heroes::get_hero))
        // Powers
        .route("/powers", get(powers::list_powers))
        .route(
            "/powers/:id",
            get(powers::get_power).patch(powers::update_power),
        )
        // Hero powers
        .route("/hero_powers", post(hero_powers::create_hero_power))
        .with_state(state)
}
