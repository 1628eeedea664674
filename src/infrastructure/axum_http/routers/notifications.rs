use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::{
    application::usecases::notifications::NotificationUseCase,
    domain::repositories::notifications::NotificationRepository,
    infrastructure::{
        axum_http::error_responses,
        postgres::{
            postgres_connection::PgPoolSquad, repositories::notifications::NotificationPostgres,
        },
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let notification_repository = NotificationPostgres::new(Arc::clone(&db_pool));
    let notification_usecase = NotificationUseCase::new(Arc::new(notification_repository));

    Router::new()
        .route("/:user_id", get(list_for_user))
        .route("/:notification_id/read", patch(mark_read))
        .route("/user/:user_id/read-all", patch(mark_all_read))
        .with_state(Arc::new(notification_usecase))
}

pub async fn list_for_user<N>(
    State(notification_usecase): State<Arc<NotificationUseCase<N>>>,
    Path(user_id): Path<Uuid>,
) -> impl IntoResponse
where
    N: NotificationRepository + Send + Sync + 'static,
{
    info!(%user_id, "notifications: list request received");
    match notification_usecase.list_for_user(user_id).await {
        Ok(notifications) => Json(notifications).into_response(),
        Err(err) => error_responses::from_error(err.status_code(), err.to_string()),
    }
}

pub async fn mark_read<N>(
    State(notification_usecase): State<Arc<NotificationUseCase<N>>>,
    Path(notification_id): Path<Uuid>,
) -> impl IntoResponse
where
    N: NotificationRepository + Send + Sync + 'static,
{
    info!(%notification_id, "notifications: mark read request received");
    match notification_usecase.mark_read(notification_id).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => error_responses::from_error(err.status_code(), err.to_string()),
    }
}

pub async fn mark_all_read<N>(
    State(notification_usecase): State<Arc<NotificationUseCase<N>>>,
    Path(user_id): Path<Uuid>,
) -> impl IntoResponse
where
    N: NotificationRepository + Send + Sync + 'static,
{
    info!(%user_id, "notifications: mark all read request received");
    match notification_usecase.mark_all_read(user_id).await {
        Ok(updated) => Json(json!({ "updated": updated })).into_response(),
        Err(err) => error_responses::from_error(err.status_code(), err.to_string()),
    }
}
