use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::evidence_submissions;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = evidence_submissions)]
pub struct EvidenceSubmissionEntity {
    pub id: Uuid,
    pub bid_id: Uuid,
    pub evidence_url: String,
    pub evidence_type: String,
    pub description: Option<String>,
    pub is_approved: Option<bool>,
    pub reviewer_notes: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = evidence_submissions)]
pub struct InsertEvidenceSubmissionEntity {
    pub bid_id: Uuid,
    pub evidence_url: String,
    pub evidence_type: String,
    pub description: Option<String>,
}
