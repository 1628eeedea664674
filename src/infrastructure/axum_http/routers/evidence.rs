use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};
use tracing::info;
use uuid::Uuid;

use crate::{
    application::usecases::evidence::EvidenceUseCase,
    domain::{
        repositories::{
            bids::BidRepository, campaigns::CampaignRepository,
            evidence_submissions::EvidenceRepository, notifications::NotificationRepository,
        },
        value_objects::evidence_submissions::{ReviewEvidenceModel, SubmitEvidenceModel},
    },
    infrastructure::{
        axum_http::error_responses,
        postgres::{
            postgres_connection::PgPoolSquad,
            repositories::{
                bids::BidPostgres, campaigns::CampaignPostgres,
                evidence_submissions::EvidencePostgres, notifications::NotificationPostgres,
            },
        },
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let evidence_repository = EvidencePostgres::new(Arc::clone(&db_pool));
    let bid_repository = BidPostgres::new(Arc::clone(&db_pool));
    let campaign_repository = CampaignPostgres::new(Arc::clone(&db_pool));
    let notification_repository = NotificationPostgres::new(Arc::clone(&db_pool));

    let evidence_usecase = EvidenceUseCase::new(
        Arc::new(evidence_repository),
        Arc::new(bid_repository),
        Arc::new(campaign_repository),
        Arc::new(notification_repository),
    );

    Router::new()
        .route("/", post(submit))
        .route("/bid/:bid_id", get(list_by_bid))
        .route("/:evidence_id/review", patch(review))
        .with_state(Arc::new(evidence_usecase))
}

pub async fn submit<E, B, C, N>(
    State(evidence_usecase): State<Arc<EvidenceUseCase<E, B, C, N>>>,
    Json(submit_evidence_model): Json<SubmitEvidenceModel>,
) -> impl IntoResponse
where
    E: EvidenceRepository + Send + Sync + 'static,
    B: BidRepository + Send + Sync + 'static,
    C: CampaignRepository + Send + Sync + 'static,
    N: NotificationRepository + Send + Sync + 'static,
{
    info!(bid_id = %submit_evidence_model.bid_id, "evidence: submit request received");
    match evidence_usecase.submit(submit_evidence_model).await {
        Ok(evidence) => (StatusCode::CREATED, Json(evidence)).into_response(),
        Err(err) => error_responses::from_error(err.status_code(), err.to_string()),
    }
}

pub async fn list_by_bid<E, B, C, N>(
    State(evidence_usecase): State<Arc<EvidenceUseCase<E, B, C, N>>>,
    Path(bid_id): Path<Uuid>,
) -> impl IntoResponse
where
    E: EvidenceRepository + Send + Sync + 'static,
    B: BidRepository + Send + Sync + 'static,
    C: CampaignRepository + Send + Sync + 'static,
    N: NotificationRepository + Send + Sync + 'static,
{
    info!(%bid_id, "evidence: bid list request received");
    match evidence_usecase.list_by_bid(bid_id).await {
        Ok(submissions) => Json(submissions).into_response(),
        Err(err) => error_responses::from_error(err.status_code(), err.to_string()),
    }
}

pub async fn review<E, B, C, N>(
    State(evidence_usecase): State<Arc<EvidenceUseCase<E, B, C, N>>>,
    Path(evidence_id): Path<Uuid>,
    Json(review_evidence_model): Json<ReviewEvidenceModel>,
) -> impl IntoResponse
where
    E: EvidenceRepository + Send + Sync + 'static,
    B: BidRepository + Send + Sync + 'static,
    C: CampaignRepository + Send + Sync + 'static,
    N: NotificationRepository + Send + Sync + 'static,
{
    info!(%evidence_id, approved = review_evidence_model.approved, "evidence: review request received");
    match evidence_usecase
        .review(evidence_id, review_evidence_model)
        .await
    {
        Ok(evidence) => Json(evidence).into_response(),
        Err(err) => error_responses::from_error(err.status_code(), err.to_string()),
    }
}
