use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{
    business_profiles::{BusinessProfileEntity, InsertBusinessProfileEntity},
    influencer_profiles::{InfluencerProfileEntity, InsertInfluencerProfileEntity},
    users::{InsertUserEntity, UserEntity},
};
use crate::domain::value_objects::enums::user_roles::UserRole;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserModel {
    pub email: String,
    pub password: String,
    pub user_type: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_data: Option<ProfileDataModel>,
}

impl RegisterUserModel {
    pub fn to_entity(&self, password_hash: String, role: UserRole) -> InsertUserEntity {
        InsertUserEntity {
            email: self.email.trim().to_lowercase(),
            password_hash,
            role: role.to_string(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDataModel {
    pub company_name: Option<String>,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub follower_count: Option<i32>,
    pub engagement_rate: Option<f64>,
    pub rate_per_story_minor: Option<i32>,
    pub rate_per_post_minor: Option<i32>,
}

impl ProfileDataModel {
    /// Repositories fill `user_id` once the user row exists.
    pub fn to_influencer_entity(&self) -> InsertInfluencerProfileEntity {
        InsertInfluencerProfileEntity {
            user_id: None,
            follower_count: self.follower_count.unwrap_or(0),
            engagement_rate: self.engagement_rate,
            rate_per_story_minor: self.rate_per_story_minor,
            rate_per_post_minor: self.rate_per_post_minor,
        }
    }

    pub fn to_business_entity(&self, company_name: String) -> InsertBusinessProfileEntity {
        InsertBusinessProfileEntity {
            user_id: None,
            company_name,
            website: self.website.clone(),
            industry: self.industry.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum InsertProfile {
    Influencer(InsertInfluencerProfileEntity),
    Business(InsertBusinessProfileEntity),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginModel {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyEmailModel {
    pub email: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResendVerificationModel {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<UserEntity> for UserDto {
    fn from(value: UserEntity) -> Self {
        Self {
            id: value.id,
            email: value.email,
            role: value.role,
            first_name: value.first_name,
            last_name: value.last_name,
            is_verified: value.is_verified,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerProfileDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub follower_count: i32,
    pub engagement_rate: Option<f64>,
    pub rate_per_story_minor: Option<i32>,
    pub rate_per_post_minor: Option<i32>,
}

impl From<InfluencerProfileEntity> for InfluencerProfileDto {
    fn from(value: InfluencerProfileEntity) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            follower_count: value.follower_count,
            engagement_rate: value.engagement_rate,
            rate_per_story_minor: value.rate_per_story_minor,
            rate_per_post_minor: value.rate_per_post_minor,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfileDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_name: String,
    pub website: Option<String>,
    pub industry: Option<String>,
}

impl From<BusinessProfileEntity> for BusinessProfileDto {
    fn from(value: BusinessProfileEntity) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            company_name: value.company_name,
            website: value.website,
            industry: value.industry,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ProfileDto {
    Influencer(InfluencerProfileDto),
    Business(BusinessProfileDto),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayloadDto {
    pub user: UserDto,
    pub profile: Option<ProfileDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequiredDto {
    pub requires_verification: bool,
    pub email: String,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Authenticated(AuthPayloadDto),
    VerificationRequired(VerificationRequiredDto),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub email: String,
    pub role: String,
    pub exp: usize,
}
