//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::{DomainError, Hero, HeroPower, NewHeroPower, Power};

/// Repository trait for Hero entity
#[async_trait]
pub trait HeroRepository: Send + Sync {
    /// Find all heroes, ordered by id
    async fn find_all(&self) -> Result<Vec<Hero>, DomainError>;

    /// Find a hero by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Hero>, DomainError>;

    /// Insert a hero (seeding only, not routed)
    async fn create(&self, name: String, super_name: String) -> Result<Hero, DomainError>;

    /// Powers held by a hero, through its associations
    async fn find_powers(&self, hero_id: i32) -> Result<Vec<Power>, DomainError>;

    /// Delete a hero; its associations go with it
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Repository trait for Power entity
#[async_trait]
pub trait PowerRepository: Send + Sync {
    /// Find all powers, ordered by id
    async fn find_all(&self) -> Result<Vec<Power>, DomainError>;

    /// Find a power by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Power>, DomainError>;

    /// Insert a power after checking its name and description
    async fn create(&self, name: String, description: String) -> Result<Power, DomainError>;

    /// Replace the description of an existing power
    async fn update_description(&self, id: i32, description: String)
    -> Result<Power, DomainError>;

    /// Heroes holding a power, through its associations
    async fn find_heroes(&self, power_id: i32) -> Result<Vec<Hero>, DomainError>;

    /// Delete a power; its associations go with it
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Repository trait for HeroPower associations
#[async_trait]
pub trait HeroPowerRepository: Send + Sync {
    /// Insert an association; fails with `ConstraintViolation` on a dangling reference
    async fn create(&self, input: NewHeroPower) -> Result<HeroPower, DomainError>;

    /// Associations of one hero, each paired with its power
    async fn find_by_hero(&self, hero_id: i32) -> Result<Vec<(HeroPower, Power)>, DomainError>;

    /// Associations pointing at one power
    async fn find_by_power(&self, power_id: i32) -> Result<Vec<HeroPower>, DomainError>;
}
