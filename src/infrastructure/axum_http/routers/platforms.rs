use std::sync::Arc;

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get,
};
use tracing::{error, info};

use crate::{
    application::usecases::platforms::PlatformsUseCase,
    domain::repositories::platforms::PlatformRepository,
    infrastructure::{
        axum_http::error_responses,
        postgres::{postgres_connection::PgPoolSquad, repositories::platforms::PlatformPostgres},
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let platform_repository = PlatformPostgres::new(Arc::clone(&db_pool));
    let platforms_usecase = PlatformsUseCase::new(Arc::new(platform_repository));

    Router::new()
        .route("/", get(list_active))
        .with_state(Arc::new(platforms_usecase))
}

pub async fn list_active<P>(
    State(platforms_usecase): State<Arc<PlatformsUseCase<P>>>,
) -> impl IntoResponse
where
    P: PlatformRepository + Send + Sync + 'static,
{
    info!("platforms: list request received");
    match platforms_usecase.list_active().await {
        Ok(platforms) => Json(platforms).into_response(),
        Err(err) => {
            error!(error = ?err, "platforms: failed to list platforms");
            error_responses::from_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load platforms".to_string(),
            )
        }
    }
}
