use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    BidReceived,
    BidAccepted,
    BidRejected,
    WorkCompleted,
    EvidenceSubmitted,
    EvidenceReviewed,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::BidReceived => "bid_received",
            NotificationType::BidAccepted => "bid_accepted",
            NotificationType::BidRejected => "bid_rejected",
            NotificationType::WorkCompleted => "work_completed",
            NotificationType::EvidenceSubmitted => "evidence_submitted",
            NotificationType::EvidenceReviewed => "evidence_reviewed",
        }
    }
}

impl Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
