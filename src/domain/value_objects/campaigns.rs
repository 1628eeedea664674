use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::campaigns::{CampaignEntity, InsertCampaignEntity};
use crate::domain::value_objects::bids::BidDto;
use crate::domain::value_objects::enums::{
    campaign_statuses::CampaignStatus, campaign_types::CampaignType,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignModel {
    pub business_id: Uuid,
    pub platform: String,
    pub title: String,
    pub description: String,
    pub campaign_type: String,
    pub budget_minor: i32,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

impl CreateCampaignModel {
    pub fn to_entity(&self, platform_id: Uuid, campaign_type: CampaignType) -> InsertCampaignEntity {
        InsertCampaignEntity {
            business_id: self.business_id,
            platform_id,
            title: self.title.trim().to_string(),
            description: self.description.clone(),
            campaign_type: campaign_type.to_string(),
            status: CampaignStatus::Draft.to_string(),
            budget_minor: self.budget_minor,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
        }
    }
}

/// Field patch; `version` is the row version the caller last read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCampaignModel {
    pub version: i32,
    pub platform: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub campaign_type: Option<String>,
    pub budget_minor: Option<i32>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionCampaignModel {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDto {
    pub id: Uuid,
    pub business_id: Uuid,
    pub platform_id: Uuid,
    pub title: String,
    pub description: String,
    pub campaign_type: String,
    pub status: String,
    pub budget_minor: i32,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CampaignEntity> for CampaignDto {
    fn from(value: CampaignEntity) -> Self {
        Self {
            id: value.id,
            business_id: value.business_id,
            platform_id: value.platform_id,
            title: value.title,
            description: value.description,
            campaign_type: value.campaign_type,
            status: value.status,
            budget_minor: value.budget_minor,
            starts_at: value.starts_at,
            ends_at: value.ends_at,
            version: value.version,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampaignDetailDto {
    pub campaign: CampaignDto,
    pub bids: Vec<BidDto>,
}
