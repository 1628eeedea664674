use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::notifications::{InsertNotificationEntity, NotificationEntity};

#[async_trait]
#[automock]
pub trait NotificationRepository {
    async fn create(&self, notification_entity: InsertNotificationEntity) -> Result<Uuid>;
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<NotificationEntity>>;
    async fn mark_read(&self, notification_id: Uuid) -> Result<usize>;
    async fn mark_all_read(&self, user_id: Uuid) -> Result<usize>;
}
