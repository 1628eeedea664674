pub mod bids;
pub mod business_profiles;
pub mod campaigns;
pub mod email_verification_codes;
pub mod evidence_submissions;
pub mod influencer_profiles;
pub mod notifications;
pub mod payments;
pub mod platforms;
pub mod users;
