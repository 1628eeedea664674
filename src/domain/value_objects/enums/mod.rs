pub mod bid_statuses;
pub mod campaign_statuses;
pub mod campaign_types;
pub mod evidence_types;
pub mod notification_types;
pub mod payment_statuses;
pub mod user_roles;
