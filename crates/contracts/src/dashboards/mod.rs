pub mod d400_campaign_dashboard;
