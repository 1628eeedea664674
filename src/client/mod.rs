use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

use crate::domain::value_objects::{
    bids::{BidDto, CompleteBidModel, CreateBidModel, RespondBidModel},
    campaigns::{
        CampaignDetailDto, CampaignDto, CreateCampaignModel, TransitionCampaignModel,
        UpdateCampaignModel,
    },
    evidence_submissions::{EvidenceDto, ReviewEvidenceModel, SubmitEvidenceModel},
    notifications::NotificationDto,
    payments::{EarningsDto, PaymentDto, TransitionPaymentModel},
    platforms::PlatformDto,
    users::{
        AuthPayloadDto, LoginModel, RegisterUserModel, ResendVerificationModel, VerifyEmailModel,
    },
};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: String,
}

/// Extracts the server-supplied `{error}` message, falling back to the raw
/// body or the status line when the envelope is absent.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        if !envelope.error.is_empty() {
            return envelope.error;
        }
    }

    let body = body.trim();
    if body.is_empty() {
        format!("request failed with status {status}")
    } else {
        body.to_string()
    }
}

/// Typed client for the marketplace HTTP API built on reqwest.
///
/// No retry, backoff or caching; every call is a single request and any
/// non-2xx response surfaces as [`ApiError::Api`].
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` without a trailing slash, e.g. `http://localhost:8080`.
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn ensure_success(resp: reqwest::Response, context: &str) -> ApiResult<reqwest::Response> {
        if resp.status().is_success() {
            return Ok(resp);
        }

        let status = resp.status();
        let body = match resp.text().await {
            Ok(text) => text,
            Err(err) => format!("<failed to read response body: {err}>"),
        };
        let message = error_message(status, &body);

        error!(%status, context = %context, "api request failed: {}", message);

        Err(ApiError::Api { status, message })
    }

    pub async fn register(
        &self,
        register_user_model: &RegisterUserModel,
    ) -> ApiResult<AuthPayloadDto> {
        let resp = self
            .http
            .post(self.url("/api/auth/register"))
            .json(register_user_model)
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "register").await?;

        Ok(resp.json().await?)
    }

    pub async fn login(&self, login_model: &LoginModel) -> ApiResult<AuthPayloadDto> {
        let resp = self
            .http
            .post(self.url("/api/auth/login"))
            .json(login_model)
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "login").await?;

        Ok(resp.json().await?)
    }

    pub async fn verify_email(
        &self,
        verify_email_model: &VerifyEmailModel,
    ) -> ApiResult<AuthPayloadDto> {
        let resp = self
            .http
            .post(self.url("/api/auth/verify-email"))
            .json(verify_email_model)
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "verify email").await?;

        Ok(resp.json().await?)
    }

    pub async fn resend_verification(
        &self,
        resend_verification_model: &ResendVerificationModel,
    ) -> ApiResult<()> {
        let resp = self
            .http
            .post(self.url("/api/auth/resend-verification"))
            .json(resend_verification_model)
            .send()
            .await?;
        Self::ensure_success(resp, "resend verification").await?;

        Ok(())
    }

    pub async fn get_profile(&self, user_id: Uuid) -> ApiResult<AuthPayloadDto> {
        let resp = self
            .http
            .get(self.url(&format!("/api/auth/profile/{user_id}")))
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "get profile").await?;

        Ok(resp.json().await?)
    }

    pub async fn create_campaign(
        &self,
        create_campaign_model: &CreateCampaignModel,
    ) -> ApiResult<CampaignDto> {
        let resp = self
            .http
            .post(self.url("/api/campaigns"))
            .json(create_campaign_model)
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "create campaign").await?;

        Ok(resp.json().await?)
    }

    pub async fn list_active_campaigns(&self) -> ApiResult<Vec<CampaignDto>> {
        let resp = self
            .http
            .get(self.url("/api/campaigns/active"))
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "list active campaigns").await?;

        Ok(resp.json().await?)
    }

    pub async fn list_business_campaigns(&self, business_id: Uuid) -> ApiResult<Vec<CampaignDto>> {
        let resp = self
            .http
            .get(self.url(&format!("/api/campaigns/business/{business_id}")))
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "list business campaigns").await?;

        Ok(resp.json().await?)
    }

    pub async fn get_campaign(&self, campaign_id: Uuid) -> ApiResult<CampaignDetailDto> {
        let resp = self
            .http
            .get(self.url(&format!("/api/campaigns/{campaign_id}")))
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "get campaign").await?;

        Ok(resp.json().await?)
    }

    pub async fn update_campaign(
        &self,
        campaign_id: Uuid,
        update_campaign_model: &UpdateCampaignModel,
    ) -> ApiResult<CampaignDto> {
        let resp = self
            .http
            .put(self.url(&format!("/api/campaigns/{campaign_id}")))
            .json(update_campaign_model)
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "update campaign").await?;

        Ok(resp.json().await?)
    }

    pub async fn transition_campaign_status(
        &self,
        campaign_id: Uuid,
        transition_campaign_model: &TransitionCampaignModel,
    ) -> ApiResult<CampaignDto> {
        let resp = self
            .http
            .patch(self.url(&format!("/api/campaigns/{campaign_id}/status")))
            .json(transition_campaign_model)
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "transition campaign status").await?;

        Ok(resp.json().await?)
    }

    pub async fn place_bid(&self, create_bid_model: &CreateBidModel) -> ApiResult<BidDto> {
        let resp = self
            .http
            .post(self.url("/api/bids"))
            .json(create_bid_model)
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "place bid").await?;

        Ok(resp.json().await?)
    }

    pub async fn list_influencer_bids(&self, influencer_id: Uuid) -> ApiResult<Vec<BidDto>> {
        let resp = self
            .http
            .get(self.url(&format!("/api/bids/influencer/{influencer_id}")))
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "list influencer bids").await?;

        Ok(resp.json().await?)
    }

    pub async fn list_campaign_bids(&self, campaign_id: Uuid) -> ApiResult<Vec<BidDto>> {
        let resp = self
            .http
            .get(self.url(&format!("/api/bids/campaign/{campaign_id}")))
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "list campaign bids").await?;

        Ok(resp.json().await?)
    }

    pub async fn respond_to_bid(
        &self,
        bid_id: Uuid,
        respond_bid_model: &RespondBidModel,
    ) -> ApiResult<BidDto> {
        let resp = self
            .http
            .patch(self.url(&format!("/api/bids/{bid_id}/status")))
            .json(respond_bid_model)
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "respond to bid").await?;

        Ok(resp.json().await?)
    }

    pub async fn complete_bid(
        &self,
        bid_id: Uuid,
        complete_bid_model: &CompleteBidModel,
    ) -> ApiResult<BidDto> {
        let resp = self
            .http
            .patch(self.url(&format!("/api/bids/{bid_id}/complete")))
            .json(complete_bid_model)
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "complete bid").await?;

        Ok(resp.json().await?)
    }

    pub async fn list_influencer_payments(&self, influencer_id: Uuid) -> ApiResult<Vec<PaymentDto>> {
        let resp = self
            .http
            .get(self.url(&format!("/api/payments/influencer/{influencer_id}")))
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "list influencer payments").await?;

        Ok(resp.json().await?)
    }

    pub async fn influencer_earnings(&self, influencer_id: Uuid) -> ApiResult<EarningsDto> {
        let resp = self
            .http
            .get(self.url(&format!(
                "/api/payments/influencer/{influencer_id}/earnings"
            )))
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "influencer earnings").await?;

        Ok(resp.json().await?)
    }

    pub async fn transition_payment_status(
        &self,
        payment_id: Uuid,
        transition_payment_model: &TransitionPaymentModel,
    ) -> ApiResult<PaymentDto> {
        let resp = self
            .http
            .patch(self.url(&format!("/api/payments/{payment_id}/status")))
            .json(transition_payment_model)
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "transition payment status").await?;

        Ok(resp.json().await?)
    }

    pub async fn submit_evidence(
        &self,
        submit_evidence_model: &SubmitEvidenceModel,
    ) -> ApiResult<EvidenceDto> {
        let resp = self
            .http
            .post(self.url("/api/evidence"))
            .json(submit_evidence_model)
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "submit evidence").await?;

        Ok(resp.json().await?)
    }

    pub async fn list_bid_evidence(&self, bid_id: Uuid) -> ApiResult<Vec<EvidenceDto>> {
        let resp = self
            .http
            .get(self.url(&format!("/api/evidence/bid/{bid_id}")))
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "list bid evidence").await?;

        Ok(resp.json().await?)
    }

    pub async fn review_evidence(
        &self,
        evidence_id: Uuid,
        review_evidence_model: &ReviewEvidenceModel,
    ) -> ApiResult<EvidenceDto> {
        let resp = self
            .http
            .patch(self.url(&format!("/api/evidence/{evidence_id}/review")))
            .json(review_evidence_model)
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "review evidence").await?;

        Ok(resp.json().await?)
    }

    pub async fn list_notifications(&self, user_id: Uuid) -> ApiResult<Vec<NotificationDto>> {
        let resp = self
            .http
            .get(self.url(&format!("/api/notifications/{user_id}")))
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "list notifications").await?;

        Ok(resp.json().await?)
    }

    pub async fn mark_notification_read(&self, notification_id: Uuid) -> ApiResult<()> {
        let resp = self
            .http
            .patch(self.url(&format!("/api/notifications/{notification_id}/read")))
            .send()
            .await?;
        Self::ensure_success(resp, "mark notification read").await?;

        Ok(())
    }

    pub async fn mark_all_notifications_read(&self, user_id: Uuid) -> ApiResult<u64> {
        let resp = self
            .http
            .patch(self.url(&format!("/api/notifications/user/{user_id}/read-all")))
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "mark all notifications read").await?;

        #[derive(Deserialize)]
        struct UpdatedResp {
            updated: u64,
        }

        let parsed: UpdatedResp = resp.json().await?;
        Ok(parsed.updated)
    }

    pub async fn list_platforms(&self) -> ApiResult<Vec<PlatformDto>> {
        let resp = self.http.get(self.url("/api/platforms")).send().await?;
        let resp = Self::ensure_success(resp, "list platforms").await?;

        Ok(resp.json().await?)
    }

    pub async fn ping(&self) -> ApiResult<()> {
        let resp = self.http.get(self.url("/api/ping")).send().await?;
        Self::ensure_success(resp, "ping").await?;

        Ok(())
    }
}
