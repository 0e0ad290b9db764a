//! Hero Service - read-side composition of heroes and their associations

use crate::domain::views::{self, HeroDetail};
use crate::domain::{DomainError, Hero};
use crate::infrastructure::AppState;

/// List all heroes
pub async fn list_heroes(state: &AppState) -> Result<Vec<Hero>, DomainError> {
    let heroes = state.hero_repo.find_all().await?;
    tracing::debug!("Listed {} heroes", heroes.len());
    Ok(heroes)
}

/// A hero with its associations, each carrying the associated power
pub async fn get_hero_detail(state: &AppState, id: i32) -> Result<HeroDetail, DomainError> {
    let hero = state
        .hero_repo
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound("Hero"))?;

    let links = state.hero_power_repo.find_by_hero(hero.id).await?;

    Ok(views::to_detail(&hero, &links))
}
