use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::bids::{BidEntity, InsertBidEntity};
use crate::domain::value_objects::enums::bid_statuses::BidStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBidModel {
    pub campaign_id: Uuid,
    pub influencer_id: Uuid,
    pub proposed_rate_minor: i32,
    pub message: String,
}

impl CreateBidModel {
    pub fn to_entity(&self) -> InsertBidEntity {
        InsertBidEntity {
            campaign_id: self.campaign_id,
            influencer_id: self.influencer_id,
            proposed_rate_minor: self.proposed_rate_minor,
            message: self.message.clone(),
            status: BidStatus::Pending.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RespondBidModel {
    pub status: String,
    pub business_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteBidModel {
    pub influencer_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BidDto {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub influencer_id: Uuid,
    pub proposed_rate_minor: i32,
    pub message: String,
    pub status: String,
    pub submitted_at: DateTime<Utc>,
    pub responded_at: Option<DateTime<Utc>>,
}

impl From<BidEntity> for BidDto {
    fn from(value: BidEntity) -> Self {
        Self {
            id: value.id,
            campaign_id: value.campaign_id,
            influencer_id: value.influencer_id,
            proposed_rate_minor: value.proposed_rate_minor,
            message: value.message,
            status: value.status,
            submitted_at: value.submitted_at,
            responded_at: value.responded_at,
        }
    }
}
