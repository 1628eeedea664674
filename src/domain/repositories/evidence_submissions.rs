use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::evidence_submissions::{
    EvidenceSubmissionEntity, InsertEvidenceSubmissionEntity,
};

#[async_trait]
#[automock]
pub trait EvidenceRepository {
    async fn create(&self, evidence_entity: InsertEvidenceSubmissionEntity) -> Result<Uuid>;
    async fn find_by_id(&self, evidence_id: Uuid) -> Result<Option<EvidenceSubmissionEntity>>;
    async fn list_by_bid(&self, bid_id: Uuid) -> Result<Vec<EvidenceSubmissionEntity>>;
    /// Stamps the review verdict and reviewed_at; returns rows affected.
    async fn record_review(
        &self,
        evidence_id: Uuid,
        approved: bool,
        reviewer_notes: Option<String>,
    ) -> Result<usize>;
}
