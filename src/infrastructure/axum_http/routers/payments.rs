use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, patch},
};
use tracing::info;
use uuid::Uuid;

use crate::{
    application::usecases::payments::PaymentUseCase,
    domain::{
        repositories::payments::PaymentRepository,
        value_objects::payments::TransitionPaymentModel,
    },
    infrastructure::{
        axum_http::error_responses,
        postgres::{postgres_connection::PgPoolSquad, repositories::payments::PaymentPostgres},
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let payment_repository = PaymentPostgres::new(Arc::clone(&db_pool));
    let payment_usecase = PaymentUseCase::new(Arc::new(payment_repository));

    Router::new()
        .route("/influencer/:influencer_id", get(list_by_influencer))
        .route("/influencer/:influencer_id/earnings", get(earnings))
        .route("/:payment_id/status", patch(transition_status))
        .with_state(Arc::new(payment_usecase))
}

pub async fn list_by_influencer<P>(
    State(payment_usecase): State<Arc<PaymentUseCase<P>>>,
    Path(influencer_id): Path<Uuid>,
) -> impl IntoResponse
where
    P: PaymentRepository + Send + Sync + 'static,
{
    info!(%influencer_id, "payments: influencer list request received");
    match payment_usecase.list_by_influencer(influencer_id).await {
        Ok(payments) => Json(payments).into_response(),
        Err(err) => error_responses::from_error(err.status_code(), err.to_string()),
    }
}

pub async fn earnings<P>(
    State(payment_usecase): State<Arc<PaymentUseCase<P>>>,
    Path(influencer_id): Path<Uuid>,
) -> impl IntoResponse
where
    P: PaymentRepository + Send + Sync + 'static,
{
    info!(%influencer_id, "payments: earnings request received");
    match payment_usecase.earnings(influencer_id).await {
        Ok(summary) => Json(summary).into_response(),
        Err(err) => error_responses::from_error(err.status_code(), err.to_string()),
    }
}

pub async fn transition_status<P>(
    State(payment_usecase): State<Arc<PaymentUseCase<P>>>,
    Path(payment_id): Path<Uuid>,
    Json(transition_payment_model): Json<TransitionPaymentModel>,
) -> impl IntoResponse
where
    P: PaymentRepository + Send + Sync + 'static,
{
    info!(%payment_id, status = %transition_payment_model.status, "payments: status transition request received");
    match payment_usecase
        .transition_status(payment_id, transition_payment_model)
        .await
    {
        Ok(payment) => Json(payment).into_response(),
        Err(err) => error_responses::from_error(err.status_code(), err.to_string()),
    }
}
