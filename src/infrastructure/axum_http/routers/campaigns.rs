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
    application::usecases::campaigns::CampaignUseCase,
    domain::{
        repositories::{
            bids::BidRepository, campaigns::CampaignRepository, platforms::PlatformRepository,
            users::UserRepository,
        },
        value_objects::campaigns::{
            CreateCampaignModel, TransitionCampaignModel, UpdateCampaignModel,
        },
    },
    infrastructure::{
        axum_http::error_responses,
        postgres::{
            postgres_connection::PgPoolSquad,
            repositories::{
                bids::BidPostgres, campaigns::CampaignPostgres, platforms::PlatformPostgres,
                users::UserPostgres,
            },
        },
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let campaign_repository = CampaignPostgres::new(Arc::clone(&db_pool));
    let bid_repository = BidPostgres::new(Arc::clone(&db_pool));
    let user_repository = UserPostgres::new(Arc::clone(&db_pool));
    let platform_repository = PlatformPostgres::new(Arc::clone(&db_pool));

    let campaign_usecase = CampaignUseCase::new(
        Arc::new(campaign_repository),
        Arc::new(bid_repository),
        Arc::new(user_repository),
        Arc::new(platform_repository),
    );

    Router::new()
        .route("/", post(create))
        .route("/active", get(list_active))
        .route("/business/:business_id", get(list_by_business))
        .route("/:campaign_id", get(get_with_bids).put(update))
        .route("/:campaign_id/status", patch(transition_status))
        .with_state(Arc::new(campaign_usecase))
}

pub async fn create<C, B, U, P>(
    State(campaign_usecase): State<Arc<CampaignUseCase<C, B, U, P>>>,
    Json(create_campaign_model): Json<CreateCampaignModel>,
) -> impl IntoResponse
where
    C: CampaignRepository + Send + Sync + 'static,
    B: BidRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    P: PlatformRepository + Send + Sync + 'static,
{
    info!(business_id = %create_campaign_model.business_id, "campaigns: create request received");
    match campaign_usecase.create(create_campaign_model).await {
        Ok(campaign) => (StatusCode::CREATED, Json(campaign)).into_response(),
        Err(err) => error_responses::from_error(err.status_code(), err.to_string()),
    }
}

pub async fn list_active<C, B, U, P>(
    State(campaign_usecase): State<Arc<CampaignUseCase<C, B, U, P>>>,
) -> impl IntoResponse
where
    C: CampaignRepository + Send + Sync + 'static,
    B: BidRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    P: PlatformRepository + Send + Sync + 'static,
{
    info!("campaigns: active list request received");
    match campaign_usecase.list_active().await {
        Ok(campaigns) => Json(campaigns).into_response(),
        Err(err) => error_responses::from_error(err.status_code(), err.to_string()),
    }
}

pub async fn list_by_business<C, B, U, P>(
    State(campaign_usecase): State<Arc<CampaignUseCase<C, B, U, P>>>,
    Path(business_id): Path<Uuid>,
) -> impl IntoResponse
where
    C: CampaignRepository + Send + Sync + 'static,
    B: BidRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    P: PlatformRepository + Send + Sync + 'static,
{
    info!(%business_id, "campaigns: business list request received");
    match campaign_usecase.list_by_business(business_id).await {
        Ok(campaigns) => Json(campaigns).into_response(),
        Err(err) => error_responses::from_error(err.status_code(), err.to_string()),
    }
}

pub async fn get_with_bids<C, B, U, P>(
    State(campaign_usecase): State<Arc<CampaignUseCase<C, B, U, P>>>,
    Path(campaign_id): Path<Uuid>,
) -> impl IntoResponse
where
    C: CampaignRepository + Send + Sync + 'static,
    B: BidRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    P: PlatformRepository + Send + Sync + 'static,
{
    info!(%campaign_id, "campaigns: detail request received");
    match campaign_usecase.get_with_bids(campaign_id).await {
        Ok(detail) => Json(detail).into_response(),
        Err(err) => error_responses::from_error(err.status_code(), err.to_string()),
    }
}

pub async fn update<C, B, U, P>(
    State(campaign_usecase): State<Arc<CampaignUseCase<C, B, U, P>>>,
    Path(campaign_id): Path<Uuid>,
    Json(update_campaign_model): Json<UpdateCampaignModel>,
) -> impl IntoResponse
where
    C: CampaignRepository + Send + Sync + 'static,
    B: BidRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    P: PlatformRepository + Send + Sync + 'static,
{
    info!(%campaign_id, "campaigns: update request received");
    match campaign_usecase
        .update(campaign_id, update_campaign_model)
        .await
    {
        Ok(campaign) => Json(campaign).into_response(),
        Err(err) => error_responses::from_error(err.status_code(), err.to_string()),
    }
}

pub async fn transition_status<C, B, U, P>(
    State(campaign_usecase): State<Arc<CampaignUseCase<C, B, U, P>>>,
    Path(campaign_id): Path<Uuid>,
    Json(transition_campaign_model): Json<TransitionCampaignModel>,
) -> impl IntoResponse
where
    C: CampaignRepository + Send + Sync + 'static,
    B: BidRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    P: PlatformRepository + Send + Sync + 'static,
{
    info!(%campaign_id, status = %transition_campaign_model.status, "campaigns: status transition request received");
    match campaign_usecase
        .transition_status(campaign_id, transition_campaign_model)
        .await
    {
        Ok(campaign) => Json(campaign).into_response(),
        Err(err) => error_responses::from_error(err.status_code(), err.to_string()),
    }
}
