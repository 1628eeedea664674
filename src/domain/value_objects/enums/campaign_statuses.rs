use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    #[default]
    Draft,
    Active,
    Paused,
    Completed,
    Cancelled,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Draft => "draft",
            CampaignStatus::Active => "active",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Completed => "completed",
            CampaignStatus::Cancelled => "cancelled",
        }
    }

    /// Legal (from, to) pairs; completed and cancelled are terminal.
    pub fn can_transition_to(&self, next: CampaignStatus) -> bool {
        match (self, next) {
            (CampaignStatus::Draft, CampaignStatus::Active) => true,
            (CampaignStatus::Draft, CampaignStatus::Cancelled) => true,
            (CampaignStatus::Active, CampaignStatus::Paused) => true,
            (CampaignStatus::Active, CampaignStatus::Completed) => true,
            (CampaignStatus::Active, CampaignStatus::Cancelled) => true,
            (CampaignStatus::Paused, CampaignStatus::Active) => true,
            (CampaignStatus::Paused, CampaignStatus::Completed) => true,
            (CampaignStatus::Paused, CampaignStatus::Cancelled) => true,
            _ => false,
        }
    }
}

impl Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "draft" => Ok(CampaignStatus::Draft),
            "active" => Ok(CampaignStatus::Active),
            "paused" => Ok(CampaignStatus::Paused),
            "completed" => Ok(CampaignStatus::Completed),
            "cancelled" => Ok(CampaignStatus::Cancelled),
            other => Err(format!("Unsupported campaign status: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_can_only_activate_or_cancel() {
        assert!(CampaignStatus::Draft.can_transition_to(CampaignStatus::Active));
        assert!(CampaignStatus::Draft.can_transition_to(CampaignStatus::Cancelled));
        assert!(!CampaignStatus::Draft.can_transition_to(CampaignStatus::Paused));
        assert!(!CampaignStatus::Draft.can_transition_to(CampaignStatus::Completed));
    }

    #[test]
    fn paused_campaign_can_resume() {
        assert!(CampaignStatus::Paused.can_transition_to(CampaignStatus::Active));
        assert!(CampaignStatus::Paused.can_transition_to(CampaignStatus::Completed));
    }

    #[test]
    fn terminal_statuses_reject_everything() {
        for next in [
            CampaignStatus::Draft,
            CampaignStatus::Active,
            CampaignStatus::Paused,
            CampaignStatus::Completed,
            CampaignStatus::Cancelled,
        ] {
            assert!(!CampaignStatus::Completed.can_transition_to(next));
            assert!(!CampaignStatus::Cancelled.can_transition_to(next));
        }
    }

    #[test]
    fn no_status_transitions_to_itself() {
        for status in [
            CampaignStatus::Draft,
            CampaignStatus::Active,
            CampaignStatus::Paused,
            CampaignStatus::Completed,
            CampaignStatus::Cancelled,
        ] {
            assert!(!status.can_transition_to(status));
        }
    }

    #[test]
    fn parses_wire_values() {
        assert_eq!(
            "active".parse::<CampaignStatus>(),
            Ok(CampaignStatus::Active)
        );
        assert!("archived".parse::<CampaignStatus>().is_err());
    }
}
