use crate::shared::api::{self, ApiError};
use contracts::dashboards::d400_campaign_dashboard::dto::{DashboardRange, DashboardResponse};

/// Сводка по кампаниям за период
pub async fn fetch_dashboard(range: DashboardRange) -> Result<DashboardResponse, ApiError> {
    api::get(&format!("/campaigns/dashboard/{}", range.code())).await
}
