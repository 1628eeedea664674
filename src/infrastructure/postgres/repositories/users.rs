use anyhow::Result;
use async_trait::async_trait;
use diesel::result::DatabaseErrorKind;
use diesel::{Connection, RunQueryDsl, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{
    entities::{
        business_profiles::BusinessProfileEntity,
        influencer_profiles::InfluencerProfileEntity,
        users::{InsertUserEntity, UserEntity},
    },
    repositories::{DuplicateKeyViolation, users::UserRepository},
    value_objects::users::InsertProfile,
};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    schema::{business_profiles, influencer_profiles, users},
};

pub struct UserPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl UserPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl UserRepository for UserPostgres {
    async fn register_with_profile(
        &self,
        user_entity: InsertUserEntity,
        profile: Option<InsertProfile>,
    ) -> Result<Uuid> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = conn.transaction::<Uuid, diesel::result::Error, _>(|tx| {
            let user_id = insert_into(users::table)
                .values(&user_entity)
                .returning(users::id)
                .get_result::<Uuid>(tx)?;

            match profile {
                Some(InsertProfile::Influencer(mut influencer_entity)) => {
                    influencer_entity.user_id = Some(user_id);
                    insert_into(influencer_profiles::table)
                        .values(&influencer_entity)
                        .execute(tx)?;
                }
                Some(InsertProfile::Business(mut business_entity)) => {
                    business_entity.user_id = Some(user_id);
                    insert_into(business_profiles::table)
                        .values(&business_entity)
                        .execute(tx)?;
                }
                None => {}
            }

            Ok(user_id)
        });

        match result {
            Ok(user_id) => Ok(user_id),
            Err(diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                Err(DuplicateKeyViolation("users_email_key").into())
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = users::table
            .filter(users::id.eq(user_id))
            .select(UserEntity::as_select())
            .first::<UserEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = users::table
            .filter(users::email.eq(email))
            .select(UserEntity::as_select())
            .first::<UserEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn mark_verified(&self, user_id: Uuid) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        update(users::table)
            .filter(users::id.eq(user_id))
            .set(users::is_verified.eq(true))
            .execute(&mut conn)?;

        Ok(())
    }

    async fn find_influencer_profile(
        &self,
        user_id: Uuid,
    ) -> Result<Option<InfluencerProfileEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = influencer_profiles::table
            .filter(influencer_profiles::user_id.eq(user_id))
            .select(InfluencerProfileEntity::as_select())
            .first::<InfluencerProfileEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn find_business_profile(&self, user_id: Uuid) -> Result<Option<BusinessProfileEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = business_profiles::table
            .filter(business_profiles::user_id.eq(user_id))
            .select(BusinessProfileEntity::as_select())
            .first::<BusinessProfileEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }
}
