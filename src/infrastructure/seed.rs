//! Demo data for an empty database.

use crate::domain::{DomainError, NewHeroPower, Strength};
use crate::infrastructure::AppState;

const HEROES: &[(&str, &str)] = &[
    ("Kamala Khan", "Ms. Marvel"),
    ("Doreen Green", "Squirrel Girl"),
    ("Gwen Stacy", "Spider-Gwen"),
    ("Janet Van Dyne", "The Wasp"),
    ("Wanda Maximoff", "Scarlet Witch"),
    ("Carol Danvers", "Captain Marvel"),
    ("Jean Grey", "Dark Phoenix"),
    ("Ororo Munroe", "Storm"),
    ("Kitty Pryde", "Shadowcat"),
    ("Elektra Natchios", "Elektra"),
];

const POWERS: &[(&str, &str)] = &[
    ("super strength", "gives the wielder super-human strengths"),
    (
        "flight",
        "gives the wielder the ability to fly through the skies at supersonic speed",
    ),
    (
        "super human senses",
        "allows the wielder to use her senses at a super-human level",
    ),
    (
        "elasticity",
        "can stretch the human body to extreme lengths",
    ),
];

/// Insert heroes, powers and a few associations. Does nothing when heroes already exist.
pub async fn seed_demo_data(state: &AppState) -> Result<(), DomainError> {
    if !state.hero_repo.find_all().await?.is_empty() {
        tracing::info!("Heroes already present, skipping seed");
        return Ok(());
    }

    let mut heroes = Vec::with_capacity(HEROES.len());
    for (name, super_name) in HEROES {
        heroes.push(
            state
                .hero_repo
                .create(name.to_string(), super_name.to_string())
                .await?,
        );
    }

    let mut powers = Vec::with_capacity(POWERS.len());
    for (name, description) in POWERS {
        powers.push(
            state
                .power_repo
                .create(name.to_string(), description.to_string())
                .await?,
        );
    }

    // Walk heroes and powers together so each hero gets one power
    for (i, hero) in heroes.iter().enumerate() {
        let power = &powers[i % powers.len()];
        let strength = Strength::ALL[i % Strength::ALL.len()];
        state
            .hero_power_repo
            .create(NewHeroPower {
                hero_id: hero.id,
                power_id: power.id,
                strength,
            })
            .await?;
    }

    tracing::info!(
        "Seeded {} heroes, {} powers and {} hero powers",
        heroes.len(),
        powers.len(),
        heroes.len()
    );
    Ok(())
}
