//! SeaORM implementation of PowerRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, Set,
    TransactionTrait,
};

use crate::domain::validation::validate_power;
use crate::domain::{DomainError, Hero, Power, PowerRepository};
use crate::models::hero::{self, Entity as HeroEntity};
use crate::models::power::{ActiveModel, Column, Entity as PowerEntity};

/// SeaORM-based implementation of PowerRepository
pub struct SeaOrmPowerRepository {
    db: DatabaseConnection,
}

impl SeaOrmPowerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PowerRepository for SeaOrmPowerRepository {
    async fn find_all(&self) -> Result<Vec<Power>, DomainError> {
        let powers = PowerEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(powers.into_iter().map(Power::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Power>, DomainError> {
        let power = PowerEntity::find_by_id(id).one(&self.db).await?;
        Ok(power.map(Power::from))
    }

    async fn create(&self, name: String, description: String) -> Result<Power, DomainError> {
        validate_power(&name, &description)?;

        let power = ActiveModel {
            name: Set(name),
            description: Set(description),
            ..Default::default()
        };

        let result = power
            .insert(&self.db)
            .await
            .map_err(DomainError::from_commit)?;

        Ok(Power::from(result))
    }

    async fn update_description(
        &self,
        id: i32,
        description: String,
    ) -> Result<Power, DomainError> {
        // Dropping the transaction without commit rolls it back
        let txn = self.db.begin().await?;

        let existing = PowerEntity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DomainError::NotFound("Power"))?;

        validate_power(&existing.name, &description)?;

        let mut active: ActiveModel = existing.into();
        active.description = Set(description);

        let result = active
            .update(&txn)
            .await
            .map_err(DomainError::from_commit)?;
        txn.commit().await.map_err(DomainError::from_commit)?;

        Ok(Power::from(result))
    }

    async fn find_heroes(&self, power_id: i32) -> Result<Vec<Hero>, DomainError> {
        let power = PowerEntity::find_by_id(power_id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound("Power"))?;

        let heroes = power
            .find_related(HeroEntity)
            .order_by_asc(hero::Column::Id)
            .all(&self.db)
            .await?;

        Ok(heroes.into_iter().map(Hero::from).collect())
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = PowerEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(DomainError::from_commit)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound("Power"));
        }

        tracing::info!("Deleted power {} and its associations", id);
        Ok(())
    }
}
