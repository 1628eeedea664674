use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::email_verification_codes;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = email_verification_codes)]
pub struct EmailVerificationCodeEntity {
    pub id: Uuid,
    pub email: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub used: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = email_verification_codes)]
pub struct InsertEmailVerificationCodeEntity {
    pub email: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
}
