use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::campaigns::{
    CampaignEntity, InsertCampaignEntity, UpdateCampaignEntity,
};
use crate::domain::value_objects::enums::campaign_statuses::CampaignStatus;

#[async_trait]
#[automock]
pub trait CampaignRepository {
    async fn create(&self, campaign_entity: InsertCampaignEntity) -> Result<Uuid>;
    async fn find_by_id(&self, campaign_id: Uuid) -> Result<Option<CampaignEntity>>;
    async fn list_active(&self) -> Result<Vec<CampaignEntity>>;
    async fn list_by_business(&self, business_id: Uuid) -> Result<Vec<CampaignEntity>>;
    /// Compare-and-set on `version`; returns rows affected (0 = stale version).
    async fn update_fields(
        &self,
        campaign_id: Uuid,
        version: i32,
        changes: UpdateCampaignEntity,
    ) -> Result<usize>;
    /// Compare-and-set on the current status; returns rows affected (0 = lost race).
    async fn transition_status(
        &self,
        campaign_id: Uuid,
        from: CampaignStatus,
        to: CampaignStatus,
    ) -> Result<usize>;
}
