use std::sync::Arc;

use anyhow::anyhow;
use axum::http::StatusCode;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::{
    entities::{bids::BidEntity, campaigns::CampaignEntity, notifications::InsertNotificationEntity},
    repositories::{
        bids::BidRepository, campaigns::CampaignRepository, evidence_submissions::EvidenceRepository,
        notifications::NotificationRepository,
    },
    value_objects::{
        enums::{
            bid_statuses::BidStatus, evidence_types::EvidenceType,
            notification_types::NotificationType,
        },
        evidence_submissions::{EvidenceDto, ReviewEvidenceModel, SubmitEvidenceModel},
    },
};

#[derive(Debug, Error)]
pub enum EvidenceError {
    #[error("bid not found")]
    BidNotFound,
    #[error("only the bid's influencer may submit evidence")]
    NotBidOwner,
    #[error("evidence can only be submitted for accepted or completed bids")]
    InvalidBidStatus,
    #[error("evidence submission not found")]
    NotFound,
    #[error("business does not own this campaign")]
    NotCampaignOwner,
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl EvidenceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EvidenceError::BidNotFound | EvidenceError::NotFound => StatusCode::NOT_FOUND,
            EvidenceError::InvalidBidStatus | EvidenceError::Invalid(_) => StatusCode::BAD_REQUEST,
            EvidenceError::NotBidOwner | EvidenceError::NotCampaignOwner => StatusCode::FORBIDDEN,
            EvidenceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, EvidenceError>;

pub struct EvidenceUseCase<E, B, C, N>
where
    E: EvidenceRepository + Send + Sync + 'static,
    B: BidRepository + Send + Sync + 'static,
    C: CampaignRepository + Send + Sync + 'static,
    N: NotificationRepository + Send + Sync + 'static,
{
    evidence_repo: Arc<E>,
    bid_repo: Arc<B>,
    campaign_repo: Arc<C>,
    notification_repo: Arc<N>,
}

impl<E, B, C, N> EvidenceUseCase<E, B, C, N>
where
    E: EvidenceRepository + Send + Sync + 'static,
    B: BidRepository + Send + Sync + 'static,
    C: CampaignRepository + Send + Sync + 'static,
    N: NotificationRepository + Send + Sync + 'static,
{
    pub fn new(
        evidence_repo: Arc<E>,
        bid_repo: Arc<B>,
        campaign_repo: Arc<C>,
        notification_repo: Arc<N>,
    ) -> Self {
        Self {
            evidence_repo,
            bid_repo,
            campaign_repo,
            notification_repo,
        }
    }

    pub async fn submit(
        &self,
        submit_evidence_model: SubmitEvidenceModel,
    ) -> UseCaseResult<EvidenceDto> {
        if submit_evidence_model.evidence_url.trim().is_empty() {
            return Err(EvidenceError::Invalid("evidenceUrl is required".to_string()));
        }
        let evidence_type = submit_evidence_model
            .evidence_type
            .parse::<EvidenceType>()
            .map_err(EvidenceError::Invalid)?;

        let bid = self
            .bid_repo
            .find_by_id(submit_evidence_model.bid_id)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "evidence: failed to load bid");
                EvidenceError::Internal(err)
            })?
            .ok_or(EvidenceError::BidNotFound)?;
        if bid.influencer_id != submit_evidence_model.influencer_id {
            warn!(bid_id = %bid.id, influencer_id = %submit_evidence_model.influencer_id, "evidence: submission by non-owner influencer");
            return Err(EvidenceError::NotBidOwner);
        }
        if bid.status != BidStatus::Accepted.as_str()
            && bid.status != BidStatus::Completed.as_str()
        {
            return Err(EvidenceError::InvalidBidStatus);
        }

        let evidence_id = self
            .evidence_repo
            .create(submit_evidence_model.to_entity(evidence_type))
            .await
            .map_err(|err| {
                error!(bid_id = %bid.id, db_error = ?err, "evidence: failed to store submission");
                EvidenceError::Internal(err)
            })?;

        let campaign = self.load_campaign(&bid).await?;
        self.notify(InsertNotificationEntity {
            user_id: campaign.business_id,
            title: "Evidence submitted".to_string(),
            message: format!(
                "New {} evidence was submitted for \"{}\"",
                evidence_type, campaign.title
            ),
            notification_type: NotificationType::EvidenceSubmitted.to_string(),
            related_bid_id: Some(bid.id),
        })
        .await?;

        info!(%evidence_id, bid_id = %bid.id, "evidence: submission recorded");
        self.load_dto(evidence_id).await
    }

    pub async fn review(
        &self,
        evidence_id: Uuid,
        review_evidence_model: ReviewEvidenceModel,
    ) -> UseCaseResult<EvidenceDto> {
        let evidence = self
            .evidence_repo
            .find_by_id(evidence_id)
            .await
            .map_err(|err| {
                error!(%evidence_id, db_error = ?err, "evidence: failed to load submission");
                EvidenceError::Internal(err)
            })?
            .ok_or(EvidenceError::NotFound)?;

        let bid = self
            .bid_repo
            .find_by_id(evidence.bid_id)
            .await
            .map_err(|err| {
                error!(%evidence_id, db_error = ?err, "evidence: failed to load bid");
                EvidenceError::Internal(err)
            })?
            .ok_or_else(|| {
                EvidenceError::Internal(anyhow!(
                    "evidence {} references missing bid {}",
                    evidence_id,
                    evidence.bid_id
                ))
            })?;
        let campaign = self.load_campaign(&bid).await?;
        if campaign.business_id != review_evidence_model.business_id {
            warn!(%evidence_id, business_id = %review_evidence_model.business_id, "evidence: review by non-owner business");
            return Err(EvidenceError::NotCampaignOwner);
        }

        let updated = self
            .evidence_repo
            .record_review(
                evidence_id,
                review_evidence_model.approved,
                review_evidence_model.reviewer_notes.clone(),
            )
            .await
            .map_err(|err| {
                error!(%evidence_id, db_error = ?err, "evidence: failed to record review");
                EvidenceError::Internal(err)
            })?;
        if updated == 0 {
            return Err(EvidenceError::NotFound);
        }

        let message = if review_evidence_model.approved {
            format!("Your evidence for \"{}\" was approved", campaign.title)
        } else {
            format!("Your evidence for \"{}\" was declined", campaign.title)
        };
        self.notify(InsertNotificationEntity {
            user_id: bid.influencer_id,
            title: "Evidence reviewed".to_string(),
            message,
            notification_type: NotificationType::EvidenceReviewed.to_string(),
            related_bid_id: Some(bid.id),
        })
        .await?;

        info!(%evidence_id, approved = review_evidence_model.approved, "evidence: review recorded");
        self.load_dto(evidence_id).await
    }

    pub async fn list_by_bid(&self, bid_id: Uuid) -> UseCaseResult<Vec<EvidenceDto>> {
        let submissions = self
            .evidence_repo
            .list_by_bid(bid_id)
            .await
            .map_err(|err| {
                error!(%bid_id, db_error = ?err, "evidence: failed to list submissions");
                EvidenceError::Internal(err)
            })?;
        Ok(submissions.into_iter().map(EvidenceDto::from).collect())
    }

    async fn load_campaign(&self, bid: &BidEntity) -> UseCaseResult<CampaignEntity> {
        self.campaign_repo
            .find_by_id(bid.campaign_id)
            .await
            .map_err(|err| {
                error!(bid_id = %bid.id, db_error = ?err, "evidence: failed to load campaign");
                EvidenceError::Internal(err)
            })?
            .ok_or_else(|| {
                EvidenceError::Internal(anyhow!(
                    "bid {} references missing campaign {}",
                    bid.id,
                    bid.campaign_id
                ))
            })
    }

    async fn notify(&self, notification_entity: InsertNotificationEntity) -> UseCaseResult<()> {
        self.notification_repo
            .create(notification_entity)
            .await
            .map(|_| ())
            .map_err(|err| {
                error!(db_error = ?err, "evidence: failed to create notification");
                EvidenceError::Internal(err)
            })
    }

    async fn load_dto(&self, evidence_id: Uuid) -> UseCaseResult<EvidenceDto> {
        let evidence = self
            .evidence_repo
            .find_by_id(evidence_id)
            .await
            .map_err(|err| {
                error!(%evidence_id, db_error = ?err, "evidence: failed to reload submission");
                EvidenceError::Internal(err)
            })?
            .ok_or_else(|| {
                EvidenceError::Internal(anyhow!("evidence submission {evidence_id} vanished"))
            })?;
        Ok(EvidenceDto::from(evidence))
    }
}
