use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceType {
    Screenshot,
    Link,
    Video,
}

impl EvidenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceType::Screenshot => "screenshot",
            EvidenceType::Link => "link",
            EvidenceType::Video => "video",
        }
    }
}

impl Display for EvidenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvidenceType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "screenshot" => Ok(EvidenceType::Screenshot),
            "link" => Ok(EvidenceType::Link),
            "video" => Ok(EvidenceType::Video),
            other => Err(format!("Unsupported evidence type: {}", other)),
        }
    }
}
