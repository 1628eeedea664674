use anyhow::Result;
use async_trait::async_trait;
use diesel::dsl::sum;
use diesel::{RunQueryDsl, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{
    entities::payments::{InsertPaymentEntity, PaymentEntity},
    repositories::payments::PaymentRepository,
    value_objects::{enums::payment_statuses::PaymentStatus, payments::EarningsSummary},
};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    schema::{bids, payments},
};

pub struct PaymentPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl PaymentPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl PaymentRepository for PaymentPostgres {
    async fn create(&self, payment_entity: InsertPaymentEntity) -> Result<Uuid> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(payments::table)
            .values(&payment_entity)
            .returning(payments::id)
            .get_result::<Uuid>(&mut conn)?;

        Ok(result)
    }

    async fn find_by_id(&self, payment_id: Uuid) -> Result<Option<PaymentEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = payments::table
            .filter(payments::id.eq(payment_id))
            .select(PaymentEntity::as_select())
            .first::<PaymentEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn list_by_influencer(&self, influencer_id: Uuid) -> Result<Vec<PaymentEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = payments::table
            .inner_join(bids::table)
            .filter(bids::influencer_id.eq(influencer_id))
            .order(payments::created_at.desc())
            .select(PaymentEntity::as_select())
            .load::<PaymentEntity>(&mut conn)?;

        Ok(results)
    }

    async fn transition_status(
        &self,
        payment_id: Uuid,
        from: PaymentStatus,
        to: PaymentStatus,
    ) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = update(payments::table)
            .filter(payments::id.eq(payment_id))
            .filter(payments::status.eq(from.to_string()))
            .set(payments::status.eq(to.to_string()))
            .execute(&mut conn)?;

        Ok(affected)
    }

    async fn influencer_earnings(&self, influencer_id: Uuid) -> Result<EarningsSummary> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let total_earned_minor = payments::table
            .inner_join(bids::table)
            .filter(bids::influencer_id.eq(influencer_id))
            .filter(payments::status.eq(PaymentStatus::Completed.to_string()))
            .select(sum(payments::amount_minor))
            .first::<Option<i64>>(&mut conn)?
            .unwrap_or(0);

        let pending_minor = payments::table
            .inner_join(bids::table)
            .filter(bids::influencer_id.eq(influencer_id))
            .filter(payments::status.eq_any([
                PaymentStatus::Pending.to_string(),
                PaymentStatus::Processing.to_string(),
            ]))
            .select(sum(payments::amount_minor))
            .first::<Option<i64>>(&mut conn)?
            .unwrap_or(0);

        Ok(EarningsSummary {
            total_earned_minor,
            pending_minor,
        })
    }
}
