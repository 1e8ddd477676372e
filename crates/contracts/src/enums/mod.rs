pub mod campaign_status;
pub mod channel;

pub use campaign_status::CampaignStatus;
pub use channel::Channel;
