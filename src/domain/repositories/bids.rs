use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::bids::{BidEntity, InsertBidEntity};
use crate::domain::value_objects::enums::bid_statuses::BidStatus;

#[async_trait]
#[automock]
pub trait BidRepository {
    async fn create(&self, bid_entity: InsertBidEntity) -> Result<Uuid>;
    async fn find_by_id(&self, bid_id: Uuid) -> Result<Option<BidEntity>>;
    async fn find_by_campaign_and_influencer(
        &self,
        campaign_id: Uuid,
        influencer_id: Uuid,
    ) -> Result<Option<BidEntity>>;
    async fn list_by_influencer(&self, influencer_id: Uuid) -> Result<Vec<BidEntity>>;
    async fn list_by_campaign(&self, campaign_id: Uuid) -> Result<Vec<BidEntity>>;
    /// Moves a pending bid to `to` and stamps responded_at; returns rows affected.
    async fn respond(&self, bid_id: Uuid, to: BidStatus) -> Result<usize>;
    /// Moves an accepted bid to completed; returns rows affected.
    async fn complete(&self, bid_id: Uuid) -> Result<usize>;
}
