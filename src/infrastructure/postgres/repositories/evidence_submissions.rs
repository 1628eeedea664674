use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::{RunQueryDsl, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{
    entities::evidence_submissions::{EvidenceSubmissionEntity, InsertEvidenceSubmissionEntity},
    repositories::evidence_submissions::EvidenceRepository,
};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad, schema::evidence_submissions,
};

pub struct EvidencePostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl EvidencePostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl EvidenceRepository for EvidencePostgres {
    async fn create(&self, evidence_entity: InsertEvidenceSubmissionEntity) -> Result<Uuid> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(evidence_submissions::table)
            .values(&evidence_entity)
            .returning(evidence_submissions::id)
            .get_result::<Uuid>(&mut conn)?;

        Ok(result)
    }

    async fn find_by_id(&self, evidence_id: Uuid) -> Result<Option<EvidenceSubmissionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = evidence_submissions::table
            .filter(evidence_submissions::id.eq(evidence_id))
            .select(EvidenceSubmissionEntity::as_select())
            .first::<EvidenceSubmissionEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn list_by_bid(&self, bid_id: Uuid) -> Result<Vec<EvidenceSubmissionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = evidence_submissions::table
            .filter(evidence_submissions::bid_id.eq(bid_id))
            .order(evidence_submissions::submitted_at.desc())
            .select(EvidenceSubmissionEntity::as_select())
            .load::<EvidenceSubmissionEntity>(&mut conn)?;

        Ok(results)
    }

    async fn record_review(
        &self,
        evidence_id: Uuid,
        approved: bool,
        reviewer_notes: Option<String>,
    ) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = update(evidence_submissions::table)
            .filter(evidence_submissions::id.eq(evidence_id))
            .set((
                evidence_submissions::is_approved.eq(Some(approved)),
                evidence_submissions::reviewer_notes.eq(reviewer_notes),
                evidence_submissions::reviewed_at.eq(Some(Utc::now())),
            ))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
