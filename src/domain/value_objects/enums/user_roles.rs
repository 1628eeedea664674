use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Influencer,
    Business,
    Admin,
    Manager,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Influencer => "influencer",
            UserRole::Business => "business",
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
        }
    }
}

impl Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "influencer" => Ok(UserRole::Influencer),
            "business" => Ok(UserRole::Business),
            "admin" => Ok(UserRole::Admin),
            "manager" => Ok(UserRole::Manager),
            other => Err(format!("Unsupported user role: {}", other)),
        }
    }
}
