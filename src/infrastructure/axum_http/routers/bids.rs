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
    application::usecases::bids::BidUseCase,
    domain::{
        repositories::{
            bids::BidRepository, campaigns::CampaignRepository,
            notifications::NotificationRepository, payments::PaymentRepository,
            users::UserRepository,
        },
        value_objects::bids::{CompleteBidModel, CreateBidModel, RespondBidModel},
    },
    infrastructure::{
        axum_http::error_responses,
        postgres::{
            postgres_connection::PgPoolSquad,
            repositories::{
                bids::BidPostgres, campaigns::CampaignPostgres,
                notifications::NotificationPostgres, payments::PaymentPostgres,
                users::UserPostgres,
            },
        },
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let bid_repository = BidPostgres::new(Arc::clone(&db_pool));
    let campaign_repository = CampaignPostgres::new(Arc::clone(&db_pool));
    let user_repository = UserPostgres::new(Arc::clone(&db_pool));
    let notification_repository = NotificationPostgres::new(Arc::clone(&db_pool));
    let payment_repository = PaymentPostgres::new(Arc::clone(&db_pool));

    let bid_usecase = BidUseCase::new(
        Arc::new(bid_repository),
        Arc::new(campaign_repository),
        Arc::new(user_repository),
        Arc::new(notification_repository),
        Arc::new(payment_repository),
    );

    Router::new()
        .route("/", post(place))
        .route("/influencer/:influencer_id", get(list_by_influencer))
        .route("/campaign/:campaign_id", get(list_by_campaign))
        .route("/:bid_id/status", patch(respond))
        .route("/:bid_id/complete", patch(complete))
        .with_state(Arc::new(bid_usecase))
}

pub async fn place<B, C, U, N, P>(
    State(bid_usecase): State<Arc<BidUseCase<B, C, U, N, P>>>,
    Json(create_bid_model): Json<CreateBidModel>,
) -> impl IntoResponse
where
    B: BidRepository + Send + Sync + 'static,
    C: CampaignRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    N: NotificationRepository + Send + Sync + 'static,
    P: PaymentRepository + Send + Sync + 'static,
{
    info!(
        campaign_id = %create_bid_model.campaign_id,
        influencer_id = %create_bid_model.influencer_id,
        "bids: place request received"
    );
    match bid_usecase.place(create_bid_model).await {
        Ok(bid) => (StatusCode::CREATED, Json(bid)).into_response(),
        Err(err) => error_responses::from_error(err.status_code(), err.to_string()),
    }
}

pub async fn list_by_influencer<B, C, U, N, P>(
    State(bid_usecase): State<Arc<BidUseCase<B, C, U, N, P>>>,
    Path(influencer_id): Path<Uuid>,
) -> impl IntoResponse
where
    B: BidRepository + Send + Sync + 'static,
    C: CampaignRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    N: NotificationRepository + Send + Sync + 'static,
    P: PaymentRepository + Send + Sync + 'static,
{
    info!(%influencer_id, "bids: influencer list request received");
    match bid_usecase.list_by_influencer(influencer_id).await {
        Ok(bids) => Json(bids).into_response(),
        Err(err) => error_responses::from_error(err.status_code(), err.to_string()),
    }
}

pub async fn list_by_campaign<B, C, U, N, P>(
    State(bid_usecase): State<Arc<BidUseCase<B, C, U, N, P>>>,
    Path(campaign_id): Path<Uuid>,
) -> impl IntoResponse
where
    B: BidRepository + Send + Sync + 'static,
    C: CampaignRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    N: NotificationRepository + Send + Sync + 'static,
    P: PaymentRepository + Send + Sync + 'static,
{
    info!(%campaign_id, "bids: campaign list request received");
    match bid_usecase.list_by_campaign(campaign_id).await {
        Ok(bids) => Json(bids).into_response(),
        Err(err) => error_responses::from_error(err.status_code(), err.to_string()),
    }
}

pub async fn respond<B, C, U, N, P>(
    State(bid_usecase): State<Arc<BidUseCase<B, C, U, N, P>>>,
    Path(bid_id): Path<Uuid>,
    Json(respond_bid_model): Json<RespondBidModel>,
) -> impl IntoResponse
where
    B: BidRepository + Send + Sync + 'static,
    C: CampaignRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    N: NotificationRepository + Send + Sync + 'static,
    P: PaymentRepository + Send + Sync + 'static,
{
    info!(%bid_id, status = %respond_bid_model.status, "bids: response request received");
    match bid_usecase.respond(bid_id, respond_bid_model).await {
        Ok(bid) => Json(bid).into_response(),
        Err(err) => error_responses::from_error(err.status_code(), err.to_string()),
    }
}

pub async fn complete<B, C, U, N, P>(
    State(bid_usecase): State<Arc<BidUseCase<B, C, U, N, P>>>,
    Path(bid_id): Path<Uuid>,
    Json(complete_bid_model): Json<CompleteBidModel>,
) -> impl IntoResponse
where
    B: BidRepository + Send + Sync + 'static,
    C: CampaignRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    N: NotificationRepository + Send + Sync + 'static,
    P: PaymentRepository + Send + Sync + 'static,
{
    info!(%bid_id, influencer_id = %complete_bid_model.influencer_id, "bids: completion request received");
    match bid_usecase.complete(bid_id, complete_bid_model).await {
        Ok(bid) => Json(bid).into_response(),
        Err(err) => error_responses::from_error(err.status_code(), err.to_string()),
    }
}
