use std::sync::Arc;

use axum::http::StatusCode;
use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use crate::domain::{
    repositories::notifications::NotificationRepository,
    value_objects::notifications::NotificationDto,
};

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("notification not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl NotificationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            NotificationError::NotFound => StatusCode::NOT_FOUND,
            NotificationError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, NotificationError>;

pub struct NotificationUseCase<N>
where
    N: NotificationRepository + Send + Sync + 'static,
{
    notification_repo: Arc<N>,
}

impl<N> NotificationUseCase<N>
where
    N: NotificationRepository + Send + Sync + 'static,
{
    pub fn new(notification_repo: Arc<N>) -> Self {
        Self { notification_repo }
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> UseCaseResult<Vec<NotificationDto>> {
        let notifications = self
            .notification_repo
            .list_by_user(user_id)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "notifications: failed to list notifications");
                NotificationError::Internal(err)
            })?;
        Ok(notifications
            .into_iter()
            .map(NotificationDto::from)
            .collect())
    }

    pub async fn mark_read(&self, notification_id: Uuid) -> UseCaseResult<()> {
        let updated = self
            .notification_repo
            .mark_read(notification_id)
            .await
            .map_err(|err| {
                error!(%notification_id, db_error = ?err, "notifications: failed to mark read");
                NotificationError::Internal(err)
            })?;
        if updated == 0 {
            return Err(NotificationError::NotFound);
        }
        Ok(())
    }

    pub async fn mark_all_read(&self, user_id: Uuid) -> UseCaseResult<usize> {
        let updated = self
            .notification_repo
            .mark_all_read(user_id)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "notifications: failed to mark all read");
                NotificationError::Internal(err)
            })?;
        info!(%user_id, updated, "notifications: marked all read");
        Ok(updated)
    }
}
