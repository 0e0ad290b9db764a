use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};

use crate::api::error::{ApiError, AppJson};
use crate::domain::validation::CreateHeroPowerRequest;
use crate::infrastructure::AppState;
use crate::services::hero_power_service;

#[utoipa::path(
    post,
    path = "/hero_powers",
    responses(
        (status = 201, description = "Association created, with trimmed hero and power"),
        (status = 400, description = "Validation failed or commit rejected"),
        (status = 404, description = "Hero or power not found")
    )
)]
pub async fn create_hero_power(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateHeroPowerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created = hero_power_service::create_hero_power(&state, request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
