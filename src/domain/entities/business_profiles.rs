use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::business_profiles;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = business_profiles)]
pub struct BusinessProfileEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_name: String,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = business_profiles)]
pub struct InsertBusinessProfileEntity {
    pub user_id: Option<Uuid>,
    pub company_name: String,
    pub website: Option<String>,
    pub industry: Option<String>,
}
