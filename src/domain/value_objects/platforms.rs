use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::platforms::PlatformEntity;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformDto {
    pub id: Uuid,
    pub name: String,
    pub display_name: String,
    pub is_active: bool,
}

impl From<PlatformEntity> for PlatformDto {
    fn from(value: PlatformEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            display_name: value.display_name,
            is_active: value.is_active,
        }
    }
}
