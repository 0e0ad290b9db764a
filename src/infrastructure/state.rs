//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{HeroPowerRepository, HeroRepository, PowerRepository};
use crate::infrastructure::{
    SeaOrmHeroPowerRepository, SeaOrmHeroRepository, SeaOrmPowerRepository,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    /// Hero repository
    pub hero_repo: Arc<dyn HeroRepository>,
    /// Power repository
    pub power_repo: Arc<dyn PowerRepository>,
    /// Hero power repository
    pub hero_power_repo: Arc<dyn HeroPowerRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let hero_repo = Arc::new(SeaOrmHeroRepository::new(db.clone()));
        let power_repo = Arc::new(SeaOrmPowerRepository::new(db.clone()));
        let hero_power_repo = Arc::new(SeaOrmHeroPowerRepository::new(db.clone()));

        Self {
            db,
            hero_repo,
            power_repo,
            hero_power_repo,
        }
    }

    /// Get the underlying database connection
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
