use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::platforms;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = platforms)]
pub struct PlatformEntity {
    pub id: Uuid,
    pub name: String,
    pub display_name: String,
    pub is_active: bool,
}
