use crate::domain::a001_campaign::aggregate::CampaignStats;
use serde::{Deserialize, Serialize};

/// Period of `GET /campaigns/dashboard/:range`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DashboardRange {
    #[serde(rename = "7d")]
    Week,
    #[default]
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "all")]
    All,
}

impl DashboardRange {
    /// Path segment the backend expects
    pub fn code(&self) -> &'static str {
        match self {
            DashboardRange::Week => "7d",
            DashboardRange::Month => "30d",
            DashboardRange::Quarter => "90d",
            DashboardRange::All => "all",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DashboardRange::Week => "Last 7 days",
            DashboardRange::Month => "Last 30 days",
            DashboardRange::Quarter => "Last 90 days",
            DashboardRange::All => "All time",
        }
    }

    pub fn all() -> Vec<DashboardRange> {
        vec![
            DashboardRange::Week,
            DashboardRange::Month,
            DashboardRange::Quarter,
            DashboardRange::All,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|r| r.code() == code)
    }
}

/// Response of the dashboard endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    #[serde(default)]
    pub totals: CampaignStats,
    #[serde(default)]
    pub campaigns: Vec<CampaignStats>,
    #[serde(default)]
    pub active_campaigns: u64,
}

impl DashboardResponse {
    /// Totals recomputed from the per-campaign rows when the backend omits them
    pub fn effective_totals(&self) -> CampaignStats {
        if self.totals.sent > 0 || self.campaigns.is_empty() {
            return self.totals.clone();
        }
        self.campaigns.iter().fold(CampaignStats::default(), |mut acc, c| {
            acc.sent += c.sent;
            acc.delivered += c.delivered;
            acc.opened += c.opened;
            acc.clicked += c.clicked;
            acc.bounced += c.bounced;
            acc.failed += c.failed;
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_codes() {
        for range in DashboardRange::all() {
            assert_eq!(DashboardRange::from_code(range.code()), Some(range));
        }
        assert_eq!(serde_json::to_string(&DashboardRange::Week).unwrap(), "\"7d\"");
    }

    #[test]
    fn test_effective_totals_sums_rows() {
        let resp = DashboardResponse {
            totals: CampaignStats::default(),
            campaigns: vec![
                CampaignStats { sent: 10, delivered: 9, ..Default::default() },
                CampaignStats { sent: 5, delivered: 5, failed: 1, ..Default::default() },
            ],
            active_campaigns: 2,
        };
        let totals = resp.effective_totals();
        assert_eq!(totals.sent, 15);
        assert_eq!(totals.delivered, 14);
        assert_eq!(totals.failed, 1);
    }
}
