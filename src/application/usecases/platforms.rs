use std::sync::Arc;

use anyhow::Result;

use crate::domain::{
    repositories::platforms::PlatformRepository, value_objects::platforms::PlatformDto,
};

pub struct PlatformsUseCase<P>
where
    P: PlatformRepository + Send + Sync + 'static,
{
    platform_repo: Arc<P>,
}

impl<P> PlatformsUseCase<P>
where
    P: PlatformRepository + Send + Sync + 'static,
{
    pub fn new(platform_repo: Arc<P>) -> Self {
        Self { platform_repo }
    }

    pub async fn list_active(&self) -> Result<Vec<PlatformDto>> {
        let platforms = self.platform_repo.list_active().await?;
        Ok(platforms.into_iter().map(PlatformDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::entities::platforms::PlatformEntity;
    use crate::domain::repositories::platforms::MockPlatformRepository;

    #[tokio::test]
    async fn list_active_maps_reference_rows() {
        let mut platform_repo = MockPlatformRepository::new();
        platform_repo.expect_list_active().returning(|| {
            Box::pin(async move {
                Ok(vec![
                    PlatformEntity {
                        id: Uuid::new_v4(),
                        name: "instagram".to_string(),
                        display_name: "Instagram".to_string(),
                        is_active: true,
                    },
                    PlatformEntity {
                        id: Uuid::new_v4(),
                        name: "tiktok".to_string(),
                        display_name: "TikTok".to_string(),
                        is_active: true,
                    },
                ])
            })
        });

        let platforms = PlatformsUseCase::new(Arc::new(platform_repo));

        let dtos = platforms.list_active().await.unwrap();
        assert_eq!(dtos.len(), 2);
        assert_eq!(dtos[0].name, "instagram");
    }
}
