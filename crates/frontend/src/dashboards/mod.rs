pub mod d400_campaign_dashboard;

pub use d400_campaign_dashboard::ui::CampaignDashboard;
