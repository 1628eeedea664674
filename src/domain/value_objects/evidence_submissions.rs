use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::evidence_submissions::{
    EvidenceSubmissionEntity, InsertEvidenceSubmissionEntity,
};
use crate::domain::value_objects::enums::evidence_types::EvidenceType;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitEvidenceModel {
    pub bid_id: Uuid,
    pub influencer_id: Uuid,
    pub evidence_url: String,
    pub evidence_type: String,
    pub description: Option<String>,
}

impl SubmitEvidenceModel {
    pub fn to_entity(&self, evidence_type: EvidenceType) -> InsertEvidenceSubmissionEntity {
        InsertEvidenceSubmissionEntity {
            bid_id: self.bid_id,
            evidence_url: self.evidence_url.trim().to_string(),
            evidence_type: evidence_type.to_string(),
            description: self.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEvidenceModel {
    pub business_id: Uuid,
    pub approved: bool,
    pub reviewer_notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceDto {
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

impl From<EvidenceSubmissionEntity> for EvidenceDto {
    fn from(value: EvidenceSubmissionEntity) -> Self {
        Self {
            id: value.id,
            bid_id: value.bid_id,
            evidence_url: value.evidence_url,
            evidence_type: value.evidence_type,
            description: value.description,
            is_approved: value.is_approved,
            reviewer_notes: value.reviewer_notes,
            submitted_at: value.submitted_at,
            reviewed_at: value.reviewed_at,
        }
    }
}
