use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::campaigns;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = campaigns)]
pub struct CampaignEntity {
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

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = campaigns)]
pub struct InsertCampaignEntity {
    pub business_id: Uuid,
    pub platform_id: Uuid,
    pub title: String,
    pub description: String,
    pub campaign_type: String,
    pub status: String,
    pub budget_minor: i32,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = campaigns)]
pub struct UpdateCampaignEntity {
    pub platform_id: Option<Uuid>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub campaign_type: Option<String>,
    pub budget_minor: Option<i32>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}
