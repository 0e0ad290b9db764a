//! SeaORM implementation of HeroRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, Set,
};

use crate::domain::{DomainError, Hero, HeroRepository, Power};
use crate::models::hero::{ActiveModel, Column, Entity as HeroEntity};
use crate::models::power::{self, Entity as PowerEntity};

/// SeaORM-based implementation of HeroRepository
pub struct SeaOrmHeroRepository {
    db: DatabaseConnection,
}

impl SeaOrmHeroRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HeroRepository for SeaOrmHeroRepository {
    async fn find_all(&self) -> Result<Vec<Hero>, DomainError> {
        let heroes = HeroEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(heroes.into_iter().map(Hero::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Hero>, DomainError> {
        let hero = HeroEntity::find_by_id(id).one(&self.db).await?;
        Ok(hero.map(Hero::from))
    }

    async fn create(&self, name: String, super_name: String) -> Result<Hero, DomainError> {
        let hero = ActiveModel {
            name: Set(name),
            super_name: Set(super_name),
            ..Default::default()
        };

        let result = hero
            .insert(&self.db)
            .await
            .map_err(DomainError::from_commit)?;

        Ok(Hero::from(result))
    }

    async fn find_powers(&self, hero_id: i32) -> Result<Vec<Power>, DomainError> {
        let hero = HeroEntity::find_by_id(hero_id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound("Hero"))?;

        let powers = hero
            .find_related(PowerEntity)
            .order_by_asc(power::Column::Id)
            .all(&self.db)
            .await?;

        Ok(powers.into_iter().map(Power::from).collect())
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = HeroEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(DomainError::from_commit)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound("Hero"));
        }

        tracing::info!("Deleted hero {} and its associations", id);
        Ok(())
    }
}
