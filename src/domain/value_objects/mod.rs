pub mod bids;
pub mod campaigns;
pub mod enums;
pub mod evidence_submissions;
pub mod notifications;
pub mod payments;
pub mod platforms;
pub mod users;
