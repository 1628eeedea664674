use std::sync::Arc;

use anyhow::anyhow;
use axum::http::StatusCode;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::{
    entities::{notifications::InsertNotificationEntity, payments::InsertPaymentEntity},
    repositories::{
        DuplicateKeyViolation, bids::BidRepository, campaigns::CampaignRepository,
        notifications::NotificationRepository, payments::PaymentRepository, users::UserRepository,
    },
    value_objects::{
        bids::{BidDto, CompleteBidModel, CreateBidModel, RespondBidModel},
        enums::{
            bid_statuses::BidStatus, campaign_statuses::CampaignStatus,
            notification_types::NotificationType, payment_statuses::PaymentStatus,
            user_roles::UserRole,
        },
    },
};

pub const PAYMENT_CURRENCY: &str = "USD";

#[derive(Debug, Error)]
pub enum BidError {
    #[error("campaign not found")]
    CampaignNotFound,
    #[error("campaign is not accepting bids")]
    CampaignNotActive,
    #[error("user is not an influencer account")]
    NotAnInfluencer,
    #[error("influencer already has a bid on this campaign")]
    DuplicateBid,
    #[error("bid not found")]
    NotFound,
    #[error("business does not own this campaign")]
    NotCampaignOwner,
    #[error("only the bid's influencer may complete it")]
    NotBidOwner,
    #[error("bid response status must be accepted or rejected")]
    InvalidResponseStatus,
    #[error("bid has already been responded to")]
    AlreadyResponded,
    #[error("bid must be accepted before completion")]
    NotAccepted,
    #[error("bid was modified concurrently, reload and retry")]
    TransitionConflict,
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl BidError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BidError::CampaignNotFound | BidError::NotFound => StatusCode::NOT_FOUND,
            BidError::CampaignNotActive
            | BidError::NotAnInfluencer
            | BidError::InvalidResponseStatus
            | BidError::NotAccepted
            | BidError::Invalid(_) => StatusCode::BAD_REQUEST,
            BidError::NotCampaignOwner | BidError::NotBidOwner => StatusCode::FORBIDDEN,
            BidError::DuplicateBid | BidError::AlreadyResponded | BidError::TransitionConflict => {
                StatusCode::CONFLICT
            }
            BidError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, BidError>;

pub struct BidUseCase<B, C, U, N, P>
where
    B: BidRepository + Send + Sync + 'static,
    C: CampaignRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    N: NotificationRepository + Send + Sync + 'static,
    P: PaymentRepository + Send + Sync + 'static,
{
    bid_repo: Arc<B>,
    campaign_repo: Arc<C>,
    user_repo: Arc<U>,
    notification_repo: Arc<N>,
    payment_repo: Arc<P>,
}

impl<B, C, U, N, P> BidUseCase<B, C, U, N, P>
where
    B: BidRepository + Send + Sync + 'static,
    C: CampaignRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    N: NotificationRepository + Send + Sync + 'static,
    P: PaymentRepository + Send + Sync + 'static,
{
    pub fn new(
        bid_repo: Arc<B>,
        campaign_repo: Arc<C>,
        user_repo: Arc<U>,
        notification_repo: Arc<N>,
        payment_repo: Arc<P>,
    ) -> Self {
        Self {
            bid_repo,
            campaign_repo,
            user_repo,
            notification_repo,
            payment_repo,
        }
    }

    pub async fn place(&self, create_bid_model: CreateBidModel) -> UseCaseResult<BidDto> {
        if create_bid_model.proposed_rate_minor <= 0 {
            return Err(BidError::Invalid(
                "proposedRateMinor must be positive".to_string(),
            ));
        }

        let campaign = self
            .campaign_repo
            .find_by_id(create_bid_model.campaign_id)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "bids: failed to load campaign");
                BidError::Internal(err)
            })?
            .ok_or(BidError::CampaignNotFound)?;
        if campaign.status != CampaignStatus::Active.as_str() {
            warn!(campaign_id = %campaign.id, status = %campaign.status, "bids: bid on non-active campaign");
            return Err(BidError::CampaignNotActive);
        }

        let influencer = self
            .user_repo
            .find_by_id(create_bid_model.influencer_id)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "bids: failed to load influencer");
                BidError::Internal(err)
            })?
            .ok_or(BidError::NotAnInfluencer)?;
        if influencer.role != UserRole::Influencer.as_str() {
            return Err(BidError::NotAnInfluencer);
        }

        if self
            .bid_repo
            .find_by_campaign_and_influencer(campaign.id, influencer.id)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "bids: failed to check for existing bid");
                BidError::Internal(err)
            })?
            .is_some()
        {
            return Err(BidError::DuplicateBid);
        }

        let bid_id = self
            .bid_repo
            .create(create_bid_model.to_entity())
            .await
            .map_err(|err| {
                if err.downcast_ref::<DuplicateKeyViolation>().is_some() {
                    warn!(campaign_id = %campaign.id, influencer_id = %influencer.id, "bids: duplicate bid lost the race");
                    BidError::DuplicateBid
                } else {
                    error!(db_error = ?err, "bids: failed to create bid");
                    BidError::Internal(err)
                }
            })?;

        self.notify(InsertNotificationEntity {
            user_id: campaign.business_id,
            title: "New bid received".to_string(),
            message: format!(
                "{} {} placed a bid on \"{}\"",
                influencer.first_name, influencer.last_name, campaign.title
            ),
            notification_type: NotificationType::BidReceived.to_string(),
            related_bid_id: Some(bid_id),
        })
        .await?;

        info!(%bid_id, campaign_id = %campaign.id, influencer_id = %influencer.id, "bids: bid placed");
        self.load_dto(bid_id).await
    }

    pub async fn respond(
        &self,
        bid_id: Uuid,
        respond_bid_model: RespondBidModel,
    ) -> UseCaseResult<BidDto> {
        let to = match respond_bid_model.status.parse::<BidStatus>() {
            Ok(BidStatus::Accepted) => BidStatus::Accepted,
            Ok(BidStatus::Rejected) => BidStatus::Rejected,
            _ => return Err(BidError::InvalidResponseStatus),
        };

        let bid = self
            .bid_repo
            .find_by_id(bid_id)
            .await
            .map_err(|err| {
                error!(%bid_id, db_error = ?err, "bids: failed to load bid");
                BidError::Internal(err)
            })?
            .ok_or(BidError::NotFound)?;

        let campaign = self
            .campaign_repo
            .find_by_id(bid.campaign_id)
            .await
            .map_err(|err| {
                error!(%bid_id, db_error = ?err, "bids: failed to load bid campaign");
                BidError::Internal(err)
            })?
            .ok_or_else(|| {
                BidError::Internal(anyhow!(
                    "bid {} references missing campaign {}",
                    bid_id,
                    bid.campaign_id
                ))
            })?;
        if campaign.business_id != respond_bid_model.business_id {
            warn!(%bid_id, business_id = %respond_bid_model.business_id, "bids: response by non-owner business");
            return Err(BidError::NotCampaignOwner);
        }

        if bid.status != BidStatus::Pending.as_str() {
            return Err(BidError::AlreadyResponded);
        }

        let updated = self.bid_repo.respond(bid_id, to).await.map_err(|err| {
            error!(%bid_id, db_error = ?err, "bids: failed to record response");
            BidError::Internal(err)
        })?;
        if updated == 0 {
            warn!(%bid_id, "bids: lost response race");
            return Err(BidError::TransitionConflict);
        }

        let (notification_type, title, message) = if to == BidStatus::Accepted {
            (
                NotificationType::BidAccepted,
                "Bid accepted",
                format!("Your bid on \"{}\" was accepted", campaign.title),
            )
        } else {
            (
                NotificationType::BidRejected,
                "Bid rejected",
                format!("Your bid on \"{}\" was rejected", campaign.title),
            )
        };
        self.notify(InsertNotificationEntity {
            user_id: bid.influencer_id,
            title: title.to_string(),
            message,
            notification_type: notification_type.to_string(),
            related_bid_id: Some(bid_id),
        })
        .await?;

        info!(%bid_id, %to, "bids: bid responded");
        self.load_dto(bid_id).await
    }

    pub async fn complete(
        &self,
        bid_id: Uuid,
        complete_bid_model: CompleteBidModel,
    ) -> UseCaseResult<BidDto> {
        let bid = self
            .bid_repo
            .find_by_id(bid_id)
            .await
            .map_err(|err| {
                error!(%bid_id, db_error = ?err, "bids: failed to load bid");
                BidError::Internal(err)
            })?
            .ok_or(BidError::NotFound)?;
        if bid.influencer_id != complete_bid_model.influencer_id {
            warn!(%bid_id, influencer_id = %complete_bid_model.influencer_id, "bids: completion by non-owner influencer");
            return Err(BidError::NotBidOwner);
        }
        if bid.status != BidStatus::Accepted.as_str() {
            return Err(BidError::NotAccepted);
        }

        let updated = self.bid_repo.complete(bid_id).await.map_err(|err| {
            error!(%bid_id, db_error = ?err, "bids: failed to record completion");
            BidError::Internal(err)
        })?;
        if updated == 0 {
            warn!(%bid_id, "bids: lost completion race");
            return Err(BidError::TransitionConflict);
        }

        let payment_id = self
            .payment_repo
            .create(InsertPaymentEntity {
                bid_id,
                amount_minor: bid.proposed_rate_minor,
                currency: PAYMENT_CURRENCY.to_string(),
                status: PaymentStatus::Pending.to_string(),
            })
            .await
            .map_err(|err| {
                error!(%bid_id, db_error = ?err, "bids: failed to open payment for completed bid");
                BidError::Internal(err)
            })?;

        let campaign = self
            .campaign_repo
            .find_by_id(bid.campaign_id)
            .await
            .map_err(|err| {
                error!(%bid_id, db_error = ?err, "bids: failed to load bid campaign");
                BidError::Internal(err)
            })?
            .ok_or_else(|| {
                BidError::Internal(anyhow!(
                    "bid {} references missing campaign {}",
                    bid_id,
                    bid.campaign_id
                ))
            })?;
        self.notify(InsertNotificationEntity {
            user_id: campaign.business_id,
            title: "Work completed".to_string(),
            message: format!(
                "The influencer completed the work on \"{}\"",
                campaign.title
            ),
            notification_type: NotificationType::WorkCompleted.to_string(),
            related_bid_id: Some(bid_id),
        })
        .await?;

        info!(%bid_id, %payment_id, "bids: bid completed, payment opened");
        self.load_dto(bid_id).await
    }

    pub async fn list_by_influencer(&self, influencer_id: Uuid) -> UseCaseResult<Vec<BidDto>> {
        let bids = self
            .bid_repo
            .list_by_influencer(influencer_id)
            .await
            .map_err(|err| {
                error!(%influencer_id, db_error = ?err, "bids: failed to list influencer bids");
                BidError::Internal(err)
            })?;
        Ok(bids.into_iter().map(BidDto::from).collect())
    }

    pub async fn list_by_campaign(&self, campaign_id: Uuid) -> UseCaseResult<Vec<BidDto>> {
        let bids = self
            .bid_repo
            .list_by_campaign(campaign_id)
            .await
            .map_err(|err| {
                error!(%campaign_id, db_error = ?err, "bids: failed to list campaign bids");
                BidError::Internal(err)
            })?;
        Ok(bids.into_iter().map(BidDto::from).collect())
    }

    async fn notify(&self, notification_entity: InsertNotificationEntity) -> UseCaseResult<()> {
        self.notification_repo
            .create(notification_entity)
            .await
            .map(|_| ())
            .map_err(|err| {
                error!(db_error = ?err, "bids: failed to create notification");
                BidError::Internal(err)
            })
    }

    async fn load_dto(&self, bid_id: Uuid) -> UseCaseResult<BidDto> {
        let bid = self
            .bid_repo
            .find_by_id(bid_id)
            .await
            .map_err(|err| {
                error!(%bid_id, db_error = ?err, "bids: failed to reload bid");
                BidError::Internal(err)
            })?
            .ok_or_else(|| BidError::Internal(anyhow!("bid {bid_id} vanished")))?;
        Ok(BidDto::from(bid))
    }
}
