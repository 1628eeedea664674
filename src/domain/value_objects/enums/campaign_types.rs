use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CampaignType {
    StoryReshare,
    PostReshare,
}

impl CampaignType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignType::StoryReshare => "story_reshare",
            CampaignType::PostReshare => "post_reshare",
        }
    }
}

impl Display for CampaignType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "story_reshare" => Ok(CampaignType::StoryReshare),
            "post_reshare" => Ok(CampaignType::PostReshare),
            other => Err(format!("Unsupported campaign type: {}", other)),
        }
    }
}
