use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::{RunQueryDsl, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{
    entities::email_verification_codes::{
        EmailVerificationCodeEntity, InsertEmailVerificationCodeEntity,
    },
    repositories::email_verification_codes::VerificationCodeRepository,
};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad, schema::email_verification_codes,
};

pub struct VerificationCodePostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl VerificationCodePostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl VerificationCodeRepository for VerificationCodePostgres {
    async fn create(&self, code_entity: InsertEmailVerificationCodeEntity) -> Result<Uuid> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(email_verification_codes::table)
            .values(&code_entity)
            .returning(email_verification_codes::id)
            .get_result::<Uuid>(&mut conn)?;

        Ok(result)
    }

    async fn find_valid(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Option<EmailVerificationCodeEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = email_verification_codes::table
            .filter(email_verification_codes::email.eq(email))
            .filter(email_verification_codes::code.eq(code))
            .filter(email_verification_codes::used.eq(false))
            .filter(email_verification_codes::expires_at.gt(Utc::now()))
            .order(email_verification_codes::created_at.desc())
            .select(EmailVerificationCodeEntity::as_select())
            .first::<EmailVerificationCodeEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn mark_used(&self, code_id: Uuid) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        update(email_verification_codes::table)
            .filter(email_verification_codes::id.eq(code_id))
            .set(email_verification_codes::used.eq(true))
            .execute(&mut conn)?;

        Ok(())
    }
}
