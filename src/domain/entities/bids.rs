use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::bids;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = bids)]
pub struct BidEntity {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub influencer_id: Uuid,
    pub proposed_rate_minor: i32,
    pub message: String,
    pub status: String,
    pub submitted_at: DateTime<Utc>,
    pub responded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = bids)]
pub struct InsertBidEntity {
    pub campaign_id: Uuid,
    pub influencer_id: Uuid,
    pub proposed_rate_minor: i32,
    pub message: String,
    pub status: String,
}
