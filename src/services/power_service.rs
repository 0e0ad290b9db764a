//! Power Service - lookups and description updates

use crate::domain::validation::{UpdatePowerRequest, validate_power_update};
use crate::domain::{DomainError, Power};
use crate::infrastructure::AppState;

/// List all powers
pub async fn list_powers(state: &AppState) -> Result<Vec<Power>, DomainError> {
    state.power_repo.find_all().await
}

/// Get a power by id
pub async fn get_power(state: &AppState, id: i32) -> Result<Power, DomainError> {
    state
        .power_repo
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound("Power"))
}

/// Apply a partial update. Without a usable description the power is returned unchanged.
pub async fn update_power(
    state: &AppState,
    id: i32,
    request: UpdatePowerRequest,
) -> Result<Power, DomainError> {
    let power = get_power(state, id).await?;

    let Some(description) = validate_power_update(&request)? else {
        tracing::debug!("No description supplied for power {}, nothing to update", id);
        return Ok(power);
    };

    let updated = state.power_repo.update_description(id, description).await?;
    tracing::info!("Updated description of power {}", id);
    Ok(updated)
}
