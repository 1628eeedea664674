use std::sync::Arc;

use anyhow::anyhow;
use axum::http::StatusCode;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::{
    entities::campaigns::UpdateCampaignEntity,
    repositories::{
        bids::BidRepository, campaigns::CampaignRepository, platforms::PlatformRepository,
        users::UserRepository,
    },
    value_objects::{
        bids::BidDto,
        campaigns::{
            CampaignDetailDto, CampaignDto, CreateCampaignModel, TransitionCampaignModel,
            UpdateCampaignModel,
        },
        enums::{
            campaign_statuses::CampaignStatus, campaign_types::CampaignType, user_roles::UserRole,
        },
    },
};

#[derive(Debug, Error)]
pub enum CampaignError {
    #[error("campaign not found")]
    NotFound,
    #[error("user is not an active business account")]
    NotABusiness,
    #[error("platform is unknown or inactive")]
    PlatformUnavailable,
    #[error("{0}")]
    Invalid(String),
    #[error("campaign cannot move from {from} to {to}")]
    IllegalTransition {
        from: CampaignStatus,
        to: CampaignStatus,
    },
    #[error("campaign was modified concurrently, reload and retry")]
    EditConflict,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CampaignError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CampaignError::NotFound => StatusCode::NOT_FOUND,
            CampaignError::NotABusiness
            | CampaignError::PlatformUnavailable
            | CampaignError::Invalid(_) => StatusCode::BAD_REQUEST,
            CampaignError::IllegalTransition { .. } | CampaignError::EditConflict => {
                StatusCode::CONFLICT
            }
            CampaignError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, CampaignError>;

pub struct CampaignUseCase<C, B, U, P>
where
    C: CampaignRepository + Send + Sync + 'static,
    B: BidRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    P: PlatformRepository + Send + Sync + 'static,
{
    campaign_repo: Arc<C>,
    bid_repo: Arc<B>,
    user_repo: Arc<U>,
    platform_repo: Arc<P>,
}

impl<C, B, U, P> CampaignUseCase<C, B, U, P>
where
    C: CampaignRepository + Send + Sync + 'static,
    B: BidRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    P: PlatformRepository + Send + Sync + 'static,
{
    pub fn new(
        campaign_repo: Arc<C>,
        bid_repo: Arc<B>,
        user_repo: Arc<U>,
        platform_repo: Arc<P>,
    ) -> Self {
        Self {
            campaign_repo,
            bid_repo,
            user_repo,
            platform_repo,
        }
    }

    pub async fn create(
        &self,
        create_campaign_model: CreateCampaignModel,
    ) -> UseCaseResult<CampaignDto> {
        if create_campaign_model.title.trim().is_empty() {
            return Err(CampaignError::Invalid("title is required".to_string()));
        }
        if create_campaign_model.budget_minor <= 0 {
            return Err(CampaignError::Invalid(
                "budgetMinor must be positive".to_string(),
            ));
        }
        if let (Some(starts_at), Some(ends_at)) =
            (create_campaign_model.starts_at, create_campaign_model.ends_at)
        {
            if ends_at <= starts_at {
                return Err(CampaignError::Invalid(
                    "endsAt must be after startsAt".to_string(),
                ));
            }
        }
        let campaign_type = create_campaign_model
            .campaign_type
            .parse::<CampaignType>()
            .map_err(CampaignError::Invalid)?;

        let business = self
            .user_repo
            .find_by_id(create_campaign_model.business_id)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "campaigns: failed to load campaign owner");
                CampaignError::Internal(err)
            })?
            .ok_or(CampaignError::NotABusiness)?;
        if business.role != UserRole::Business.as_str() || !business.is_active {
            warn!(business_id = %business.id, role = %business.role, "campaigns: creation by non-business user");
            return Err(CampaignError::NotABusiness);
        }

        let platform = self
            .platform_repo
            .find_by_name(&create_campaign_model.platform)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "campaigns: failed to resolve platform");
                CampaignError::Internal(err)
            })?
            .ok_or(CampaignError::PlatformUnavailable)?;
        if !platform.is_active {
            return Err(CampaignError::PlatformUnavailable);
        }

        let campaign_id = self
            .campaign_repo
            .create(create_campaign_model.to_entity(platform.id, campaign_type))
            .await
            .map_err(|err| {
                error!(db_error = ?err, "campaigns: failed to create campaign");
                CampaignError::Internal(err)
            })?;

        info!(%campaign_id, business_id = %business.id, "campaigns: campaign created");
        self.load_dto(campaign_id).await
    }

    pub async fn list_active(&self) -> UseCaseResult<Vec<CampaignDto>> {
        let campaigns = self.campaign_repo.list_active().await.map_err(|err| {
            error!(db_error = ?err, "campaigns: failed to list active campaigns");
            CampaignError::Internal(err)
        })?;
        Ok(campaigns.into_iter().map(CampaignDto::from).collect())
    }

    pub async fn list_by_business(&self, business_id: Uuid) -> UseCaseResult<Vec<CampaignDto>> {
        let campaigns = self
            .campaign_repo
            .list_by_business(business_id)
            .await
            .map_err(|err| {
                error!(%business_id, db_error = ?err, "campaigns: failed to list business campaigns");
                CampaignError::Internal(err)
            })?;
        Ok(campaigns.into_iter().map(CampaignDto::from).collect())
    }

    pub async fn get_with_bids(&self, campaign_id: Uuid) -> UseCaseResult<CampaignDetailDto> {
        let campaign = self
            .campaign_repo
            .find_by_id(campaign_id)
            .await
            .map_err(|err| {
                error!(%campaign_id, db_error = ?err, "campaigns: failed to load campaign");
                CampaignError::Internal(err)
            })?
            .ok_or(CampaignError::NotFound)?;

        let bids = self
            .bid_repo
            .list_by_campaign(campaign_id)
            .await
            .map_err(|err| {
                error!(%campaign_id, db_error = ?err, "campaigns: failed to load campaign bids");
                CampaignError::Internal(err)
            })?;

        Ok(CampaignDetailDto {
            campaign: CampaignDto::from(campaign),
            bids: bids.into_iter().map(BidDto::from).collect(),
        })
    }

    pub async fn update(
        &self,
        campaign_id: Uuid,
        update_campaign_model: UpdateCampaignModel,
    ) -> UseCaseResult<CampaignDto> {
        if self
            .campaign_repo
            .find_by_id(campaign_id)
            .await
            .map_err(|err| {
                error!(%campaign_id, db_error = ?err, "campaigns: failed to load campaign");
                CampaignError::Internal(err)
            })?
            .is_none()
        {
            return Err(CampaignError::NotFound);
        }

        if let Some(title) = &update_campaign_model.title {
            if title.trim().is_empty() {
                return Err(CampaignError::Invalid("title cannot be empty".to_string()));
            }
        }
        if let Some(budget_minor) = update_campaign_model.budget_minor {
            if budget_minor <= 0 {
                return Err(CampaignError::Invalid(
                    "budgetMinor must be positive".to_string(),
                ));
            }
        }
        if let (Some(starts_at), Some(ends_at)) =
            (update_campaign_model.starts_at, update_campaign_model.ends_at)
        {
            if ends_at <= starts_at {
                return Err(CampaignError::Invalid(
                    "endsAt must be after startsAt".to_string(),
                ));
            }
        }

        let campaign_type = match &update_campaign_model.campaign_type {
            Some(raw) => Some(
                raw.parse::<CampaignType>()
                    .map_err(CampaignError::Invalid)?,
            ),
            None => None,
        };
        let platform_id = match &update_campaign_model.platform {
            Some(name) => {
                let platform = self
                    .platform_repo
                    .find_by_name(name)
                    .await
                    .map_err(|err| {
                        error!(db_error = ?err, "campaigns: failed to resolve platform");
                        CampaignError::Internal(err)
                    })?
                    .ok_or(CampaignError::PlatformUnavailable)?;
                if !platform.is_active {
                    return Err(CampaignError::PlatformUnavailable);
                }
                Some(platform.id)
            }
            None => None,
        };

        let changes = UpdateCampaignEntity {
            platform_id,
            title: update_campaign_model
                .title
                .as_deref()
                .map(|title| title.trim().to_string()),
            description: update_campaign_model.description.clone(),
            campaign_type: campaign_type.map(|campaign_type| campaign_type.to_string()),
            budget_minor: update_campaign_model.budget_minor,
            starts_at: update_campaign_model.starts_at,
            ends_at: update_campaign_model.ends_at,
        };

        let updated = self
            .campaign_repo
            .update_fields(campaign_id, update_campaign_model.version, changes)
            .await
            .map_err(|err| {
                error!(%campaign_id, db_error = ?err, "campaigns: failed to update campaign");
                CampaignError::Internal(err)
            })?;
        if updated == 0 {
            warn!(%campaign_id, version = update_campaign_model.version, "campaigns: stale version on update");
            return Err(CampaignError::EditConflict);
        }

        info!(%campaign_id, "campaigns: campaign updated");
        self.load_dto(campaign_id).await
    }

    pub async fn transition_status(
        &self,
        campaign_id: Uuid,
        transition_campaign_model: TransitionCampaignModel,
    ) -> UseCaseResult<CampaignDto> {
        let to = transition_campaign_model
            .status
            .parse::<CampaignStatus>()
            .map_err(CampaignError::Invalid)?;

        let campaign = self
            .campaign_repo
            .find_by_id(campaign_id)
            .await
            .map_err(|err| {
                error!(%campaign_id, db_error = ?err, "campaigns: failed to load campaign");
                CampaignError::Internal(err)
            })?
            .ok_or(CampaignError::NotFound)?;
        let from = campaign.status.parse::<CampaignStatus>().map_err(|err| {
            CampaignError::Internal(anyhow!(
                "campaign {} carries unknown status: {}",
                campaign_id,
                err
            ))
        })?;

        if !from.can_transition_to(to) {
            warn!(%campaign_id, %from, %to, "campaigns: illegal status transition rejected");
            return Err(CampaignError::IllegalTransition { from, to });
        }

        let updated = self
            .campaign_repo
            .transition_status(campaign_id, from, to)
            .await
            .map_err(|err| {
                error!(%campaign_id, db_error = ?err, "campaigns: failed to transition status");
                CampaignError::Internal(err)
            })?;
        if updated == 0 {
            warn!(%campaign_id, %from, %to, "campaigns: lost status transition race");
            return Err(CampaignError::EditConflict);
        }

        info!(%campaign_id, %from, %to, "campaigns: status transitioned");
        self.load_dto(campaign_id).await
    }

    async fn load_dto(&self, campaign_id: Uuid) -> UseCaseResult<CampaignDto> {
        let campaign = self
            .campaign_repo
            .find_by_id(campaign_id)
            .await
            .map_err(|err| {
                error!(%campaign_id, db_error = ?err, "campaigns: failed to reload campaign");
                CampaignError::Internal(err)
            })?
            .ok_or_else(|| CampaignError::Internal(anyhow!("campaign {campaign_id} vanished")))?;
        Ok(CampaignDto::from(campaign))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::entities::{
        bids::BidEntity, campaigns::CampaignEntity, platforms::PlatformEntity, users::UserEntity,
    };
    use crate::domain::repositories::{
        bids::MockBidRepository, campaigns::MockCampaignRepository,
        platforms::MockPlatformRepository, users::MockUserRepository,
    };

    fn usecase(
        campaign_repo: MockCampaignRepository,
        bid_repo: MockBidRepository,
        user_repo: MockUserRepository,
        platform_repo: MockPlatformRepository,
    ) -> CampaignUseCase<
        MockCampaignRepository,
        MockBidRepository,
        MockUserRepository,
        MockPlatformRepository,
    > {
        CampaignUseCase::new(
            Arc::new(campaign_repo),
            Arc::new(bid_repo),
            Arc::new(user_repo),
            Arc::new(platform_repo),
        )
    }

    fn user_fixture(role: UserRole) -> UserEntity {
        UserEntity {
            id: Uuid::new_v4(),
            email: "owner@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: role.to_string(),
            first_name: "Alex".to_string(),
            last_name: "Kim".to_string(),
            is_verified: true,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn platform_fixture(is_active: bool) -> PlatformEntity {
        PlatformEntity {
            id: Uuid::new_v4(),
            name: "instagram".to_string(),
            display_name: "Instagram".to_string(),
            is_active,
        }
    }

    fn campaign_fixture(status: CampaignStatus) -> CampaignEntity {
        CampaignEntity {
            id: Uuid::new_v4(),
            business_id: Uuid::new_v4(),
            platform_id: Uuid::new_v4(),
            title: "Spring launch".to_string(),
            description: "Story reshares for the spring line".to_string(),
            campaign_type: "story_reshare".to_string(),
            status: status.to_string(),
            budget_minor: 500_000,
            starts_at: None,
            ends_at: None,
            version: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn create_model(business_id: Uuid) -> CreateCampaignModel {
        CreateCampaignModel {
            business_id,
            platform: "instagram".to_string(),
            title: "Spring launch".to_string(),
            description: "Story reshares for the spring line".to_string(),
            campaign_type: "story_reshare".to_string(),
            budget_minor: 500_000,
            starts_at: None,
            ends_at: None,
        }
    }

    #[tokio::test]
    async fn create_starts_campaign_in_draft() {
        let business = user_fixture(UserRole::Business);
        let business_id = business.id;
        let platform = platform_fixture(true);
        let platform_id = platform.id;
        let mut campaign = campaign_fixture(CampaignStatus::Draft);
        campaign.business_id = business_id;
        campaign.platform_id = platform_id;
        let campaign_id = campaign.id;

        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_id()
            .with(eq(business_id))
            .returning(move |_| {
                let business = business.clone();
                Box::pin(async move { Ok(Some(business)) })
            });

        let mut platform_repo = MockPlatformRepository::new();
        platform_repo
            .expect_find_by_name()
            .withf(|name| name == "instagram")
            .returning(move |_| {
                let platform = platform.clone();
                Box::pin(async move { Ok(Some(platform)) })
            });

        let mut campaign_repo = MockCampaignRepository::new();
        campaign_repo
            .expect_create()
            .withf(move |entity| {
                entity.status == "draft"
                    && entity.platform_id == platform_id
                    && entity.business_id == business_id
            })
            .returning(move |_| Box::pin(async move { Ok(campaign_id) }));
        campaign_repo
            .expect_find_by_id()
            .with(eq(campaign_id))
            .returning(move |_| {
                let campaign = campaign.clone();
                Box::pin(async move { Ok(Some(campaign)) })
            });

        let campaigns = usecase(
            campaign_repo,
            MockBidRepository::new(),
            user_repo,
            platform_repo,
        );

        let dto = campaigns.create(create_model(business_id)).await.unwrap();
        assert_eq!(dto.status, "draft");
        assert_eq!(dto.version, 1);
    }

    #[tokio::test]
    async fn create_rejects_non_business_owner() {
        let influencer = user_fixture(UserRole::Influencer);
        let influencer_id = influencer.id;

        let mut user_repo = MockUserRepository::new();
        user_repo.expect_find_by_id().returning(move |_| {
            let influencer = influencer.clone();
            Box::pin(async move { Ok(Some(influencer)) })
        });

        let campaigns = usecase(
            MockCampaignRepository::new(),
            MockBidRepository::new(),
            user_repo,
            MockPlatformRepository::new(),
        );

        let err = campaigns
            .create(create_model(influencer_id))
            .await
            .unwrap_err();
        assert!(matches!(err, CampaignError::NotABusiness));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_rejects_inactive_platform() {
        let business = user_fixture(UserRole::Business);
        let business_id = business.id;

        let mut user_repo = MockUserRepository::new();
        user_repo.expect_find_by_id().returning(move |_| {
            let business = business.clone();
            Box::pin(async move { Ok(Some(business)) })
        });

        let mut platform_repo = MockPlatformRepository::new();
        platform_repo.expect_find_by_name().returning(|_| {
            Box::pin(async move { Ok(Some(platform_fixture(false))) })
        });

        let campaigns = usecase(
            MockCampaignRepository::new(),
            MockBidRepository::new(),
            user_repo,
            platform_repo,
        );

        let err = campaigns
            .create(create_model(business_id))
            .await
            .unwrap_err();
        assert!(matches!(err, CampaignError::PlatformUnavailable));
    }

    #[tokio::test]
    async fn create_rejects_nonpositive_budget() {
        let campaigns = usecase(
            MockCampaignRepository::new(),
            MockBidRepository::new(),
            MockUserRepository::new(),
            MockPlatformRepository::new(),
        );

        let mut model = create_model(Uuid::new_v4());
        model.budget_minor = 0;

        let err = campaigns.create(model).await.unwrap_err();
        assert!(matches!(err, CampaignError::Invalid(_)));
    }

    #[tokio::test]
    async fn get_with_bids_bundles_campaign_and_bids() {
        let campaign = campaign_fixture(CampaignStatus::Active);
        let campaign_id = campaign.id;

        let mut campaign_repo = MockCampaignRepository::new();
        campaign_repo
            .expect_find_by_id()
            .with(eq(campaign_id))
            .returning(move |_| {
                let campaign = campaign.clone();
                Box::pin(async move { Ok(Some(campaign)) })
            });

        let mut bid_repo = MockBidRepository::new();
        bid_repo
            .expect_list_by_campaign()
            .with(eq(campaign_id))
            .returning(move |_| {
                Box::pin(async move {
                    Ok(vec![
                        BidEntity {
                            id: Uuid::new_v4(),
                            campaign_id,
                            influencer_id: Uuid::new_v4(),
                            proposed_rate_minor: 20_000,
                            message: "Two stories over the weekend".to_string(),
                            status: "pending".to_string(),
                            submitted_at: Utc::now(),
                            responded_at: None,
                        },
                        BidEntity {
                            id: Uuid::new_v4(),
                            campaign_id,
                            influencer_id: Uuid::new_v4(),
                            proposed_rate_minor: 35_000,
                            message: "Story plus feed post".to_string(),
                            status: "accepted".to_string(),
                            submitted_at: Utc::now(),
                            responded_at: Some(Utc::now()),
                        },
                    ])
                })
            });

        let campaigns = usecase(
            campaign_repo,
            bid_repo,
            MockUserRepository::new(),
            MockPlatformRepository::new(),
        );

        let detail = campaigns.get_with_bids(campaign_id).await.unwrap();
        assert_eq!(detail.campaign.id, campaign_id);
        assert_eq!(detail.bids.len(), 2);
    }

    #[tokio::test]
    async fn get_with_bids_unknown_campaign_is_not_found() {
        let mut campaign_repo = MockCampaignRepository::new();
        campaign_repo
            .expect_find_by_id()
            .returning(|_| Box::pin(async move { Ok(None) }));

        let campaigns = usecase(
            campaign_repo,
            MockBidRepository::new(),
            MockUserRepository::new(),
            MockPlatformRepository::new(),
        );

        let err = campaigns.get_with_bids(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, CampaignError::NotFound));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_with_stale_version_conflicts() {
        let campaign = campaign_fixture(CampaignStatus::Draft);
        let campaign_id = campaign.id;

        let mut campaign_repo = MockCampaignRepository::new();
        campaign_repo
            .expect_find_by_id()
            .returning(move |_| {
                let campaign = campaign.clone();
                Box::pin(async move { Ok(Some(campaign)) })
            });
        campaign_repo
            .expect_update_fields()
            .withf(move |id, version, _| *id == campaign_id && *version == 1)
            .returning(|_, _, _| Box::pin(async move { Ok(0) }));

        let campaigns = usecase(
            campaign_repo,
            MockBidRepository::new(),
            MockUserRepository::new(),
            MockPlatformRepository::new(),
        );

        let err = campaigns
            .update(
                campaign_id,
                UpdateCampaignModel {
                    version: 1,
                    platform: None,
                    title: Some("Summer launch".to_string()),
                    description: None,
                    campaign_type: None,
                    budget_minor: None,
                    starts_at: None,
                    ends_at: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CampaignError::EditConflict));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn update_applies_patch_and_bumps_version() {
        let campaign = campaign_fixture(CampaignStatus::Draft);
        let campaign_id = campaign.id;
        let mut reloaded = campaign.clone();
        reloaded.title = "Summer launch".to_string();
        reloaded.version = 2;

        let mut campaign_repo = MockCampaignRepository::new();
        let mut first = Some(campaign);
        campaign_repo.expect_find_by_id().returning(move |_| {
            let next = first.take().unwrap_or_else(|| reloaded.clone());
            Box::pin(async move { Ok(Some(next)) })
        });
        campaign_repo
            .expect_update_fields()
            .withf(move |id, version, changes| {
                *id == campaign_id
                    && *version == 1
                    && changes.title.as_deref() == Some("Summer launch")
                    && changes.platform_id.is_none()
            })
            .returning(|_, _, _| Box::pin(async move { Ok(1) }));

        let campaigns = usecase(
            campaign_repo,
            MockBidRepository::new(),
            MockUserRepository::new(),
            MockPlatformRepository::new(),
        );

        let dto = campaigns
            .update(
                campaign_id,
                UpdateCampaignModel {
                    version: 1,
                    platform: None,
                    title: Some("Summer launch".to_string()),
                    description: None,
                    campaign_type: None,
                    budget_minor: None,
                    starts_at: None,
                    ends_at: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(dto.title, "Summer launch");
        assert_eq!(dto.version, 2);
    }

    #[tokio::test]
    async fn transition_rejects_illegal_pair() {
        let campaign = campaign_fixture(CampaignStatus::Completed);
        let campaign_id = campaign.id;

        let mut campaign_repo = MockCampaignRepository::new();
        campaign_repo.expect_find_by_id().returning(move |_| {
            let campaign = campaign.clone();
            Box::pin(async move { Ok(Some(campaign)) })
        });

        let campaigns = usecase(
            campaign_repo,
            MockBidRepository::new(),
            MockUserRepository::new(),
            MockPlatformRepository::new(),
        );

        let err = campaigns
            .transition_status(
                campaign_id,
                TransitionCampaignModel {
                    status: "active".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CampaignError::IllegalTransition {
                from: CampaignStatus::Completed,
                to: CampaignStatus::Active,
            }
        ));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn transition_rejects_unknown_status_string() {
        let campaigns = usecase(
            MockCampaignRepository::new(),
            MockBidRepository::new(),
            MockUserRepository::new(),
            MockPlatformRepository::new(),
        );

        let err = campaigns
            .transition_status(
                Uuid::new_v4(),
                TransitionCampaignModel {
                    status: "archived".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CampaignError::Invalid(_)));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn transition_applies_legal_pair() {
        let campaign = campaign_fixture(CampaignStatus::Draft);
        let campaign_id = campaign.id;
        let mut activated = campaign.clone();
        activated.status = CampaignStatus::Active.to_string();
        activated.version = 2;

        let mut campaign_repo = MockCampaignRepository::new();
        let mut first = Some(campaign);
        campaign_repo.expect_find_by_id().returning(move |_| {
            let next = first.take().unwrap_or_else(|| activated.clone());
            Box::pin(async move { Ok(Some(next)) })
        });
        campaign_repo
            .expect_transition_status()
            .with(
                eq(campaign_id),
                eq(CampaignStatus::Draft),
                eq(CampaignStatus::Active),
            )
            .returning(|_, _, _| Box::pin(async move { Ok(1) }));

        let campaigns = usecase(
            campaign_repo,
            MockBidRepository::new(),
            MockUserRepository::new(),
            MockPlatformRepository::new(),
        );

        let dto = campaigns
            .transition_status(
                campaign_id,
                TransitionCampaignModel {
                    status: "active".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(dto.status, "active");
    }

    #[tokio::test]
    async fn transition_lost_race_conflicts() {
        let campaign = campaign_fixture(CampaignStatus::Active);
        let campaign_id = campaign.id;

        let mut campaign_repo = MockCampaignRepository::new();
        campaign_repo.expect_find_by_id().returning(move |_| {
            let campaign = campaign.clone();
            Box::pin(async move { Ok(Some(campaign)) })
        });
        campaign_repo
            .expect_transition_status()
            .returning(|_, _, _| Box::pin(async move { Ok(0) }));

        let campaigns = usecase(
            campaign_repo,
            MockBidRepository::new(),
            MockUserRepository::new(),
            MockPlatformRepository::new(),
        );

        let err = campaigns
            .transition_status(
                campaign_id,
                TransitionCampaignModel {
                    status: "paused".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CampaignError::EditConflict));
    }
}
