use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::email_verification_codes::{
    EmailVerificationCodeEntity, InsertEmailVerificationCodeEntity,
};

#[async_trait]
#[automock]
pub trait VerificationCodeRepository {
    async fn create(&self, code_entity: InsertEmailVerificationCodeEntity) -> Result<Uuid>;
    /// Matches only unused codes that have not expired yet.
    async fn find_valid(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Option<EmailVerificationCodeEntity>>;
    async fn mark_used(&self, code_id: Uuid) -> Result<()>;
}
