use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::platforms::PlatformEntity;

#[async_trait]
#[automock]
pub trait PlatformRepository {
    async fn list_active(&self) -> Result<Vec<PlatformEntity>>;
    async fn find_by_name(&self, name: &str) -> Result<Option<PlatformEntity>>;
}
