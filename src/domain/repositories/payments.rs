use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::payments::{InsertPaymentEntity, PaymentEntity};
use crate::domain::value_objects::enums::payment_statuses::PaymentStatus;
use crate::domain::value_objects::payments::EarningsSummary;

#[async_trait]
#[automock]
pub trait PaymentRepository {
    async fn create(&self, payment_entity: InsertPaymentEntity) -> Result<Uuid>;
    async fn find_by_id(&self, payment_id: Uuid) -> Result<Option<PaymentEntity>>;
    async fn list_by_influencer(&self, influencer_id: Uuid) -> Result<Vec<PaymentEntity>>;
    /// Compare-and-set on the current status; returns rows affected (0 = lost race).
    async fn transition_status(
        &self,
        payment_id: Uuid,
        from: PaymentStatus,
        to: PaymentStatus,
    ) -> Result<usize>;
    async fn influencer_earnings(&self, influencer_id: Uuid) -> Result<EarningsSummary>;
}
