//! Hero Power Service - association creation
//!
//! Validation runs first, then both referenced records are resolved, then the
//! insert commits. Any failure leaves storage untouched.

use crate::domain::validation::{CreateHeroPowerRequest, validate_hero_power};
use crate::domain::views::{self, HeroPowerCreated};
use crate::domain::DomainError;
use crate::infrastructure::AppState;

pub async fn create_hero_power(
    state: &AppState,
    request: CreateHeroPowerRequest,
) -> Result<HeroPowerCreated, DomainError> {
    let input = validate_hero_power(&request)?;

    let hero = state
        .hero_repo
        .find_by_id(input.hero_id)
        .await?
        .ok_or(DomainError::NotFound("Hero"))?;

    let power = state
        .power_repo
        .find_by_id(input.power_id)
        .await?
        .ok_or(DomainError::NotFound("Power"))?;

    let hero_power = state.hero_power_repo.create(input).await?;

    tracing::info!(
        "Linked hero {} to power {} as {}",
        hero.id,
        power.id,
        hero_power.strength
    );

    Ok(views::to_created(&hero_power, &hero, &power))
}
