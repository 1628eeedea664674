use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::payments::PaymentEntity;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionPaymentModel {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    pub id: Uuid,
    pub bid_id: Uuid,
    pub amount_minor: i32,
    pub currency: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PaymentEntity> for PaymentDto {
    fn from(value: PaymentEntity) -> Self {
        Self {
            id: value.id,
            bid_id: value.bid_id,
            amount_minor: value.amount_minor,
            currency: value.currency,
            status: value.status,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Sums over payments joined through the influencer's bids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EarningsSummary {
    pub total_earned_minor: i64,
    pub pending_minor: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EarningsDto {
    pub influencer_id: Uuid,
    pub total_earned_minor: i64,
    pub pending_minor: i64,
    pub currency: String,
}
