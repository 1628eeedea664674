use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, prelude::*};
use std::sync::Arc;

use crate::domain::{
    entities::platforms::PlatformEntity, repositories::platforms::PlatformRepository,
};
use crate::infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::platforms};

pub struct PlatformPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl PlatformPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl PlatformRepository for PlatformPostgres {
    async fn list_active(&self) -> Result<Vec<PlatformEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = platforms::table
            .filter(platforms::is_active.eq(true))
            .order(platforms::name.asc())
            .select(PlatformEntity::as_select())
            .load::<PlatformEntity>(&mut conn)?;

        Ok(results)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<PlatformEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = platforms::table
            .filter(platforms::name.eq(name.to_lowercase()))
            .select(PlatformEntity::as_select())
            .first::<PlatformEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }
}
