//! SeaORM implementation of HeroPowerRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::domain::{DomainError, HeroPower, HeroPowerRepository, NewHeroPower, Power};
use crate::models::hero_power::{ActiveModel, Column, Entity as HeroPowerEntity};
use crate::models::power::Entity as PowerEntity;

/// SeaORM-based implementation of HeroPowerRepository
pub struct SeaOrmHeroPowerRepository {
    db: DatabaseConnection,
}

impl SeaOrmHeroPowerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HeroPowerRepository for SeaOrmHeroPowerRepository {
    async fn create(&self, input: NewHeroPower) -> Result<HeroPower, DomainError> {
        let txn = self.db.begin().await?;

        let hero_power = ActiveModel {
            strength: Set(input.strength.as_str().to_string()),
            hero_id: Set(input.hero_id),
            power_id: Set(input.power_id),
            ..Default::default()
        };

        let result = hero_power
            .insert(&txn)
            .await
            .map_err(DomainError::from_commit)?;
        txn.commit().await.map_err(DomainError::from_commit)?;

        HeroPower::try_from(result)
    }

    async fn find_by_hero(&self, hero_id: i32) -> Result<Vec<(HeroPower, Power)>, DomainError> {
        let rows = HeroPowerEntity::find()
            .filter(Column::HeroId.eq(hero_id))
            .order_by_asc(Column::Id)
            .find_also_related(PowerEntity)
            .all(&self.db)
            .await?;

        let mut links = Vec::with_capacity(rows.len());
        for (hero_power, power) in rows {
            // A missing power would be an orphan; cascade delete prevents it
            let Some(power) = power else {
                tracing::warn!(
                    "Hero power {} references missing power {}",
                    hero_power.id,
                    hero_power.power_id
                );
                continue;
            };
            links.push((HeroPower::try_from(hero_power)?, Power::from(power)));
        }

        Ok(links)
    }

    async fn find_by_power(&self, power_id: i32) -> Result<Vec<HeroPower>, DomainError> {
        let rows = HeroPowerEntity::find()
            .filter(Column::PowerId.eq(power_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        rows.into_iter().map(HeroPower::try_from).collect()
    }
}
