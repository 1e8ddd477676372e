use crate::dashboards::d400_campaign_dashboard::api;
use crate::domain::a001_campaign::api::fetch_stats;
use crate::layout::notifications::use_notifications;
use crate::shared::api::RequestSequencer;
use crate::shared::components::stat_card::{format_rate, StatTone};
use crate::shared::components::{PageHeader, StatCard};
use crate::shared::data_table::{field_text, to_records, ColumnDef, DataTable, Record};
use crate::shared::icons::{icon, Icon};
use crate::shared::modal_frame::ModalFrame;
use contracts::dashboards::d400_campaign_dashboard::dto::{DashboardRange, DashboardResponse};
use contracts::domain::a001_campaign::aggregate::CampaignStats;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;

/// Bounce rate above this is highlighted
const BOUNCE_ALERT_PERCENT: f64 = 5.0;

#[derive(Clone, Debug, Serialize)]
pub struct CampaignStatsRow {
    pub campaign_id: String,
    pub campaign_name: String,
    pub sent: u64,
    pub delivered: u64,
    pub opened: u64,
    pub clicked: u64,
    pub bounced: u64,
    pub failed: u64,
    pub delivery_rate: String,
    pub open_rate: String,
    pub click_rate: String,
}

impl From<&CampaignStats> for CampaignStatsRow {
    fn from(s: &CampaignStats) -> Self {
        Self {
            campaign_id: s.campaign_id.clone().unwrap_or_default(),
            campaign_name: s.campaign_name.clone().unwrap_or_default(),
            sent: s.sent,
            delivered: s.delivered,
            opened: s.opened,
            clicked: s.clicked,
            bounced: s.bounced,
            failed: s.failed,
            delivery_rate: format_rate(s.delivery_rate()),
            open_rate: format_rate(s.open_rate()),
            click_rate: format_rate(s.click_rate()),
        }
    }
}

pub fn bounce_tone(stats: &CampaignStats) -> StatTone {
    if stats.sent > 0 && stats.bounce_rate() > BOUNCE_ALERT_PERCENT {
        StatTone::Bad
    } else {
        StatTone::Neutral
    }
}

fn columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("Campaign", "campaign_name"),
        ColumnDef::new("Sent", "sent").without_filter().align_right(),
        ColumnDef::new("Delivered", "delivered").without_filter().align_right(),
        ColumnDef::new("Opened", "opened").without_filter().align_right(),
        ColumnDef::new("Clicked", "clicked").without_filter().align_right(),
        ColumnDef::new("Bounced", "bounced").without_filter().align_right(),
        ColumnDef::new("Failed", "failed").without_filter().align_right(),
        ColumnDef::new("Delivery", "delivery_rate").without_filter().align_right(),
        ColumnDef::new("Open", "open_rate").without_filter().align_right(),
        ColumnDef::new("Click", "click_rate").without_filter().align_right(),
    ]
}

/// Card grid for one set of counters
#[component]
fn StatGrid(#[prop(into)] stats: Signal<Option<CampaignStats>>) -> impl IntoView {
    let counter = move |get: fn(&CampaignStats) -> u64| {
        Signal::derive(move || stats.with(|s| s.as_ref().map(get)))
    };
    let rate = move |get: fn(&CampaignStats) -> f64| {
        Signal::derive(move || stats.with(|s| s.as_ref().map(get)))
    };
    let bounce = Signal::derive(move || stats.with(|s| s.as_ref().map(bounce_tone)));

    view! {
        <div class="stat-grid">
            <StatCard label="Sent" icon_kind=Icon::Send value=counter(|s| s.sent) />
            <StatCard
                label="Delivered"
                icon_kind=Icon::Check
                value=counter(|s| s.delivered)
                rate=rate(|s| s.delivery_rate())
                rate_label="of sent"
                tone=StatTone::Good
            />
            <StatCard
                label="Opened"
                icon_kind=Icon::Eye
                value=counter(|s| s.opened)
                rate=rate(|s| s.open_rate())
                rate_label="of delivered"
            />
            <StatCard
                label="Clicked"
                icon_kind=Icon::Campaigns
                value=counter(|s| s.clicked)
                rate=rate(|s| s.click_rate())
                rate_label="of opened"
            />
            <StatCard
                label="Bounced"
                icon_kind=Icon::Alert
                value=counter(|s| s.bounced)
                rate=rate(|s| s.bounce_rate())
                rate_label="of sent"
                tone=bounce
            />
            <StatCard label="Failed" icon_kind=Icon::X value=counter(|s| s.failed) tone=StatTone::Bad />
        </div>
    }
}

/// Per-campaign counters loaded on demand
#[component]
fn CampaignStatsPanel(campaign_id: String, title: String, on_close: Callback<()>) -> impl IntoView {
    let notify = use_notifications();
    let stats = RwSignal::new(None::<CampaignStats>);

    spawn_local(async move {
        match fetch_stats(&campaign_id).await {
            Ok(s) => stats.set(Some(s)),
            Err(e) => {
                if let Some(n) = notify {
                    n.api_error(&e);
                }
            }
        }
    });

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{title}</h3>
                <button class="button button--ghost" on:click=move |_| on_close.run(())>
                    {icon(Icon::X)}
                </button>
            </div>
            {move || match stats.get() {
                Some(s) => view! { <StatGrid stats=Signal::derive(move || Some(s.clone())) /> }.into_any(),
                None => view! { <div class="loading">"Loading..."</div> }.into_any(),
            }}
        </div>
    }
}

#[component]
pub fn CampaignDashboard() -> impl IntoView {
    let notify = use_notifications();
    let range = RwSignal::new(DashboardRange::default());
    let data = RwSignal::new(None::<DashboardResponse>);
    let is_loading = RwSignal::new(false);
    let sequencer = StoredValue::new(RequestSequencer::default());
    let selected = RwSignal::new(None::<(String, String)>);

    let fetch = move || {
        let Some(ticket) = sequencer.try_update_value(|s| s.next()) else { return };
        let current = range.get_untracked();
        is_loading.set(true);
        spawn_local(async move {
            let result = api::fetch_dashboard(current).await;
            if !sequencer.with_value(|s| s.is_current(ticket)) {
                log::debug!("dropping stale dashboard for {}", current.code());
                return;
            }
            match result {
                Ok(resp) => data.set(Some(resp)),
                Err(e) => {
                    if let Some(n) = notify {
                        n.api_error(&e);
                    }
                }
            }
            is_loading.set(false);
        });
    };

    Effect::new(move |_| {
        range.track();
        fetch();
    });

    let totals = Memo::new(move |_| data.with(|d| d.as_ref().map(|d| d.effective_totals())));
    let active = Signal::derive(move || data.with(|d| d.as_ref().map(|d| d.active_campaigns)));
    let rows = Signal::derive(move || {
        data.with(|d| {
            let rows: Vec<CampaignStatsRow> = d
                .as_ref()
                .map(|d| d.campaigns.iter().map(Into::into).collect())
                .unwrap_or_default();
            to_records(&rows)
        })
    });

    let close = Callback::new(move |_: ()| selected.set(None));

    view! {
        <div class="page">
            <PageHeader title="Dashboard" icon_kind=Icon::Dashboard>
                <select
                    class="form-select"
                    on:change=move |ev| {
                        if let Some(r) = DashboardRange::from_code(&event_target_value(&ev)) {
                            range.set(r);
                        }
                    }
                >
                    {DashboardRange::all().into_iter().map(|r| view! {
                        <option value=r.code() selected=move || range.get() == r>
                            {r.display_name()}
                        </option>
                    }).collect_view()}
                </select>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon(Icon::Refresh)}
                    "Refresh"
                </button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard label="Active campaigns" icon_kind=Icon::Campaigns value=active />
            </div>
            <StatGrid stats=totals />

            <DataTable
                columns=columns()
                data=rows
                is_loading=is_loading
                export_name="campaign_dashboard"
                search_placeholder="Search campaigns"
                on_row_click=Callback::new(move |row: Record| {
                    if let Some(id) = field_text(&row, "campaign_id").filter(|id| !id.is_empty()) {
                        let name = field_text(&row, "campaign_name").unwrap_or_default();
                        selected.set(Some((id, name)));
                    }
                })
            />

            {move || selected.get().map(|(id, name)| view! {
                <ModalFrame on_close=close>
                    <CampaignStatsPanel campaign_id=id title=name on_close=close />
                </ModalFrame>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_rates() {
        let stats = CampaignStats {
            campaign_id: Some("c1".into()),
            campaign_name: Some("Spring".into()),
            sent: 200,
            delivered: 180,
            opened: 90,
            clicked: 9,
            bounced: 20,
            failed: 0,
        };
        let row = CampaignStatsRow::from(&stats);
        assert_eq!(row.delivery_rate, "90.0%");
        assert_eq!(row.open_rate, "50.0%");
        assert_eq!(row.click_rate, "10.0%");
        assert_eq!(bounce_tone(&stats), StatTone::Bad);
    }

    #[test]
    fn test_bounce_tone_without_sends() {
        assert_eq!(bounce_tone(&CampaignStats::default()), StatTone::Neutral);
    }
}
