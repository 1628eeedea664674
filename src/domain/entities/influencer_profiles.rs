use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::influencer_profiles;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = influencer_profiles)]
pub struct InfluencerProfileEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub follower_count: i32,
    pub engagement_rate: Option<f64>,
    pub rate_per_story_minor: Option<i32>,
    pub rate_per_post_minor: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = influencer_profiles)]
pub struct InsertInfluencerProfileEntity {
    pub user_id: Option<Uuid>,
    pub follower_count: i32,
    pub engagement_rate: Option<f64>,
    pub rate_per_story_minor: Option<i32>,
    pub rate_per_post_minor: Option<i32>,
}
