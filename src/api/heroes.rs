use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::Value;

use crate::api::error::ApiError;
use crate::domain::views::{self, HERO_SUMMARY_FIELDS};
use crate::infrastructure::AppState;
use crate::services::hero_service;

#[utoipa::path(
    get,
    path = "/heroes",
    responses(
        (status = 200, description = "All heroes as {id, name, super_name}")
    )
)]
pub async fn list_heroes(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let heroes = hero_service::list_heroes(&state).await?;
    let body: Vec<Value> = heroes
        .iter()
        .map(|hero| views::only(hero, HERO_SUMMARY_FIELDS))
        .collect();
    Ok(Json(body))
}

#[utoipa::path(
    get,
    path = "/heroes/{id}",
    params(("id" = i32, Path, description = "Hero id")),
    responses(
        (status = 200, description = "Hero with its hero_powers"),
        (status = 404, description = "Hero not found")
    )
)]
pub async fn get_hero(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let hero = hero_service::get_hero_detail(&state, id).await?;
    Ok(Json(hero))
}
