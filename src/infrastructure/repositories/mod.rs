//! Repository implementations using SeaORM

pub mod hero_power_repository;
pub mod hero_repository;
pub mod power_repository;

pub use hero_power_repository::SeaOrmHeroPowerRepository;
pub use hero_repository::SeaOrmHeroRepository;
pub use power_repository::SeaOrmPowerRepository;
