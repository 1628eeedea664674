pub mod auth;
pub mod bids;
pub mod campaigns;
pub mod evidence;
pub mod notifications;
pub mod payments;
pub mod platforms;
