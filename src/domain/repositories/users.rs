use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::{
    business_profiles::BusinessProfileEntity, influencer_profiles::InfluencerProfileEntity,
    users::{InsertUserEntity, UserEntity},
};
use crate::domain::value_objects::users::InsertProfile;

#[async_trait]
#[automock]
pub trait UserRepository {
    /// Inserts the user and its role profile in one transaction.
    async fn register_with_profile(
        &self,
        user_entity: InsertUserEntity,
        profile: Option<InsertProfile>,
    ) -> Result<Uuid>;
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserEntity>>;
    async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>>;
    async fn mark_verified(&self, user_id: Uuid) -> Result<()>;
    async fn find_influencer_profile(
        &self,
        user_id: Uuid,
    ) -> Result<Option<InfluencerProfileEntity>>;
    async fn find_business_profile(&self, user_id: Uuid) -> Result<Option<BusinessProfileEntity>>;
}
