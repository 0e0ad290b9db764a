use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::Value;

use crate::api::error::{ApiError, AppJson};
use crate::domain::validation::UpdatePowerRequest;
use crate::domain::views::{self, POWER_SUMMARY_FIELDS};
use crate::infrastructure::AppState;
use crate::services::power_service;

#[utoipa::path(
    get,
    path = "/powers",
    responses(
        (status = 200, description = "All powers as {id, name, description}")
    )
)]
pub async fn list_powers(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let powers = power_service::list_powers(&state).await?;
    let body: Vec<Value> = powers
        .iter()
        .map(|power| views::only(power, POWER_SUMMARY_FIELDS))
        .collect();
    Ok(Json(body))
}

#[utoipa::path(
    get,
    path = "/powers/{id}",
    params(("id" = i32, Path, description = "Power id")),
    responses(
        (status = 200, description = "The power"),
        (status = 404, description = "Power not found")
    )
)]
pub async fn get_power(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let power = power_service::get_power(&state, id).await?;
    Ok(Json(views::power_view(&power)))
}

#[utoipa::path(
    patch,
    path = "/powers/{id}",
    params(("id" = i32, Path, description = "Power id")),
    responses(
        (status = 200, description = "Updated power"),
        (status = 400, description = "Description invalid or commit failed"),
        (status = 404, description = "Power not found")
    )
)]
pub async fn update_power(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(request): AppJson<UpdatePowerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let power = power_service::update_power(&state, id, request).await?;
    Ok(Json(views::power_view(&power)))
}
