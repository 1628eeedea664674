use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{
    entities::campaigns::{CampaignEntity, InsertCampaignEntity, UpdateCampaignEntity},
    repositories::campaigns::CampaignRepository,
    value_objects::enums::campaign_statuses::CampaignStatus,
};
use crate::infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::campaigns};

pub struct CampaignPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl CampaignPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl CampaignRepository for CampaignPostgres {
    async fn create(&self, campaign_entity: InsertCampaignEntity) -> Result<Uuid> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(campaigns::table)
            .values(&campaign_entity)
            .returning(campaigns::id)
            .get_result::<Uuid>(&mut conn)?;

        Ok(result)
    }

    async fn find_by_id(&self, campaign_id: Uuid) -> Result<Option<CampaignEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = campaigns::table
            .filter(campaigns::id.eq(campaign_id))
            .select(CampaignEntity::as_select())
            .first::<CampaignEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn list_active(&self) -> Result<Vec<CampaignEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = campaigns::table
            .filter(campaigns::status.eq(CampaignStatus::Active.to_string()))
            .order(campaigns::created_at.desc())
            .select(CampaignEntity::as_select())
            .load::<CampaignEntity>(&mut conn)?;

        Ok(results)
    }

    async fn list_by_business(&self, business_id: Uuid) -> Result<Vec<CampaignEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = campaigns::table
            .filter(campaigns::business_id.eq(business_id))
            .order(campaigns::created_at.desc())
            .select(CampaignEntity::as_select())
            .load::<CampaignEntity>(&mut conn)?;

        Ok(results)
    }

    async fn update_fields(
        &self,
        campaign_id: Uuid,
        version: i32,
        changes: UpdateCampaignEntity,
    ) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = update(campaigns::table)
            .filter(campaigns::id.eq(campaign_id))
            .filter(campaigns::version.eq(version))
            .set((&changes, campaigns::version.eq(version + 1)))
            .execute(&mut conn)?;

        Ok(affected)
    }

    async fn transition_status(
        &self,
        campaign_id: Uuid,
        from: CampaignStatus,
        to: CampaignStatus,
    ) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = update(campaigns::table)
            .filter(campaigns::id.eq(campaign_id))
            .filter(campaigns::status.eq(from.to_string()))
            .set((
                campaigns::status.eq(to.to_string()),
                campaigns::version.eq(campaigns::version + 1),
            ))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
