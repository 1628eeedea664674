use thiserror::Error;

pub mod bids;
pub mod campaigns;
pub mod email_verification_codes;
pub mod evidence_submissions;
pub mod notifications;
pub mod payments;
pub mod platforms;
pub mod users;

/// Raised by repositories when an insert trips a unique constraint, so
/// callers can map the race to a conflict instead of a plain 500.
#[derive(Debug, Error)]
#[error("duplicate key violation on {0}")]
pub struct DuplicateKeyViolation(pub &'static str);
