use crate::domain::a001_campaign::api;
use crate::domain::a001_campaign::ui::details::CampaignDetails;
use crate::domain::a001_campaign::ui::variables::CampaignVariables;
use crate::layout::notifications::use_notifications;
use crate::shared::components::PageHeader;
use crate::shared::data_table::{field_text, to_records, ColumnDef, DataTable, Record};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::{icon, Icon};
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a001_campaign::aggregate::Campaign;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct CampaignRow {
    pub id: String,
    pub name: String,
    pub channel: String,
    pub status: String,
    pub sender_email: String,
    pub sub_campaigns: usize,
    pub created_at: String,
}

impl From<Campaign> for CampaignRow {
    fn from(c: Campaign) -> Self {
        Self {
            id: c.id,
            name: c.name,
            channel: c.channel.display_name().to_string(),
            status: c.status.display_name().to_string(),
            sender_email: c.sender_email.unwrap_or_default(),
            sub_campaigns: c.sub_campaigns.len(),
            created_at: format_datetime(c.created_at),
        }
    }
}

/// Which modal is open over the list
#[derive(Clone, Debug, PartialEq)]
enum ListModal {
    Editor(Option<String>),
    Variables(String),
}

fn row_action(label: &'static str, glyph: Icon, id: String, cb: Callback<String>) -> impl IntoView {
    view! {
        <button
            class="button button--ghost button--icon"
            title=label
            on:click=move |ev: MouseEvent| {
                ev.stop_propagation();
                cb.run(id.clone());
            }
        >
            {icon(glyph)}
        </button>
    }
}

fn columns(
    on_edit: Callback<String>,
    on_variables: Callback<String>,
    on_delete: Callback<String>,
) -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("Name", "name"),
        ColumnDef::new("Channel", "channel").cycle_filter(),
        ColumnDef::new("Status", "status").cycle_filter(),
        ColumnDef::new("Sender", "sender_email"),
        ColumnDef::new("Sub-campaigns", "sub_campaigns")
            .without_filter()
            .align_right(),
        ColumnDef::new("Created", "created_at").without_filter(),
        ColumnDef::display("").cell(move |row: &Record| {
            let id = field_text(row, "id").unwrap_or_default();
            view! {
                <div class="table__actions">
                    {row_action("Edit", Icon::Edit, id.clone(), on_edit)}
                    {row_action("Variables", Icon::FileText, id.clone(), on_variables)}
                    {row_action("Delete", Icon::Delete, id, on_delete)}
                </div>
            }
            .into_any()
        }),
    ]
}

#[component]
pub fn CampaignList() -> impl IntoView {
    let notify = use_notifications();
    let items = RwSignal::new(Vec::<CampaignRow>::new());
    let is_loading = RwSignal::new(false);
    let modal = RwSignal::new(None::<ListModal>);

    let fetch = move || {
        is_loading.set(true);
        spawn_local(async move {
            match api::fetch_campaigns().await {
                Ok(list) => items.set(list.into_iter().map(Into::into).collect()),
                Err(e) => {
                    if let Some(n) = notify {
                        n.api_error(&e);
                    }
                }
            }
            is_loading.set(false);
        });
    };

    let on_edit = Callback::new(move |id: String| modal.set(Some(ListModal::Editor(Some(id)))));
    let on_variables = Callback::new(move |id: String| modal.set(Some(ListModal::Variables(id))));
    let on_delete = Callback::new(move |id: String| {
        let name = items.with(|rows| {
            rows.iter()
                .find(|r| r.id == id)
                .map(|r| r.name.clone())
                .unwrap_or_default()
        });
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(&format!("Delete campaign \"{}\"?", name)).ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_campaign(&id).await {
                Ok(()) => {
                    items.update(|rows| rows.retain(|r| r.id != id));
                    if let Some(n) = notify {
                        n.success(format!("Campaign \"{}\" deleted", name));
                    }
                }
                Err(e) => {
                    if let Some(n) = notify {
                        n.api_error(&e);
                    }
                }
            }
        });
    });

    let close_modal = Callback::new(move |_: ()| modal.set(None));
    let on_saved = Callback::new(move |_: ()| {
        modal.set(None);
        if let Some(n) = notify {
            n.success("Campaign saved");
        }
        fetch();
    });

    fetch();

    view! {
        <div class="page">
            <PageHeader title="Campaigns" icon_kind=Icon::Campaigns>
                <button class="button button--primary" on:click=move |_| modal.set(Some(ListModal::Editor(None)))>
                    {icon(Icon::Plus)}
                    "New campaign"
                </button>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon(Icon::Refresh)}
                    "Refresh"
                </button>
            </PageHeader>

            <DataTable
                columns=columns(on_edit, on_variables, on_delete)
                data=Signal::derive(move || items.with(|rows| to_records(rows)))
                is_loading=is_loading
                export_name="campaigns"
                search_placeholder="Search campaigns"
                on_row_click=Callback::new(move |row: Record| {
                    if let Some(id) = field_text(&row, "id") {
                        on_edit.run(id);
                    }
                })
            />

            {move || modal.get().map(|m| match m {
                ListModal::Editor(id) => view! {
                    <ModalFrame on_close=close_modal modal_style="max-width: min(960px, 95vw); width: min(960px, 95vw);">
                        <CampaignDetails id=id on_saved=on_saved on_cancel=close_modal />
                    </ModalFrame>
                }.into_any(),
                ListModal::Variables(id) => view! {
                    <ModalFrame on_close=close_modal>
                        <CampaignVariables campaign_id=id on_close=close_modal />
                    </ModalFrame>
                }.into_any(),
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::{CampaignStatus, Channel};

    #[test]
    fn test_row_from_campaign() {
        let campaign = Campaign {
            id: "c1".into(),
            name: "Spring".into(),
            description: None,
            channel: Channel::Sms,
            status: CampaignStatus::default(),
            subject: None,
            sender_email: None,
            sender_name: None,
            sub_campaigns: vec![Default::default(), Default::default()],
            created_at: None,
            updated_at: None,
        };
        let row = CampaignRow::from(campaign);
        assert_eq!(row.channel, "SMS");
        assert_eq!(row.sub_campaigns, 2);
        assert_eq!(row.sender_email, "");

        let records = to_records(&[row]);
        assert_eq!(field_text(&records[0], "sub_campaigns").as_deref(), Some("2"));
    }
}
