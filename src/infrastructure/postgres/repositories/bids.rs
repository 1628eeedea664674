use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::result::DatabaseErrorKind;
use diesel::{RunQueryDsl, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{
    entities::bids::{BidEntity, InsertBidEntity},
    repositories::{DuplicateKeyViolation, bids::BidRepository},
    value_objects::enums::bid_statuses::BidStatus,
};
use crate::infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::bids};

pub struct BidPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl BidPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl BidRepository for BidPostgres {
    async fn create(&self, bid_entity: InsertBidEntity) -> Result<Uuid> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(bids::table)
            .values(&bid_entity)
            .returning(bids::id)
            .get_result::<Uuid>(&mut conn);

        match result {
            Ok(bid_id) => Ok(bid_id),
            Err(diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                Err(DuplicateKeyViolation("bids_campaign_id_influencer_id_key").into())
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn find_by_id(&self, bid_id: Uuid) -> Result<Option<BidEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = bids::table
            .filter(bids::id.eq(bid_id))
            .select(BidEntity::as_select())
            .first::<BidEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn find_by_campaign_and_influencer(
        &self,
        campaign_id: Uuid,
        influencer_id: Uuid,
    ) -> Result<Option<BidEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = bids::table
            .filter(bids::campaign_id.eq(campaign_id))
            .filter(bids::influencer_id.eq(influencer_id))
            .select(BidEntity::as_select())
            .first::<BidEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn list_by_influencer(&self, influencer_id: Uuid) -> Result<Vec<BidEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = bids::table
            .filter(bids::influencer_id.eq(influencer_id))
            .order(bids::submitted_at.desc())
            .select(BidEntity::as_select())
            .load::<BidEntity>(&mut conn)?;

        Ok(results)
    }

    async fn list_by_campaign(&self, campaign_id: Uuid) -> Result<Vec<BidEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = bids::table
            .filter(bids::campaign_id.eq(campaign_id))
            .order(bids::submitted_at.desc())
            .select(BidEntity::as_select())
            .load::<BidEntity>(&mut conn)?;

        Ok(results)
    }

    async fn respond(&self, bid_id: Uuid, to: BidStatus) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = update(bids::table)
            .filter(bids::id.eq(bid_id))
            .filter(bids::status.eq(BidStatus::Pending.to_string()))
            .set((
                bids::status.eq(to.to_string()),
                bids::responded_at.eq(Some(Utc::now())),
            ))
            .execute(&mut conn)?;

        Ok(affected)
    }

    async fn complete(&self, bid_id: Uuid) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = update(bids::table)
            .filter(bids::id.eq(bid_id))
            .filter(bids::status.eq(BidStatus::Accepted.to_string()))
            .set(bids::status.eq(BidStatus::Completed.to_string()))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
