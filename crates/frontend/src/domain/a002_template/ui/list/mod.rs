use crate::domain::a001_campaign::api::fetch_campaigns;
use crate::domain::a002_template::api;
use crate::domain::a002_template::ui::details::TemplateDetails;
use crate::layout::notifications::use_notifications;
use crate::shared::components::PageHeader;
use crate::shared::data_table::{field_text, to_records, ColumnDef, DataTable, Record};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::{icon, Icon};
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a001_campaign::aggregate::Campaign;
use contracts::domain::a002_template::aggregate::Template;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Clone, Debug, Serialize)]
pub struct TemplateRow {
    pub id: String,
    pub name: String,
    pub subject: String,
    pub campaign: String,
    pub markers: usize,
    pub updated_at: String,
}

impl TemplateRow {
    fn new(t: &Template, campaign_names: &HashMap<String, String>) -> Self {
        let campaign = t
            .campaign_id
            .as_ref()
            .map(|id| campaign_names.get(id).cloned().unwrap_or_else(|| id.clone()))
            .unwrap_or_default();
        Self {
            id: t.id.clone(),
            name: t.name.clone(),
            subject: t.subject.clone().unwrap_or_default(),
            campaign,
            markers: t.markers().len(),
            updated_at: format_datetime(t.updated_at.or(t.created_at)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Editing {
    New,
    Existing(Template),
}

#[component]
pub fn TemplateList() -> impl IntoView {
    let notify = use_notifications();
    let templates = RwSignal::new(Vec::<Template>::new());
    let campaigns = RwSignal::new(Vec::<Campaign>::new());
    let campaign_filter = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);
    let editing = RwSignal::new(None::<Editing>);

    let fetch = move || {
        is_loading.set(true);
        let campaign_id = campaign_filter.get_untracked();
        spawn_local(async move {
            match api::fetch_templates(campaign_id.as_deref()).await {
                Ok(list) => templates.set(list),
                Err(e) => {
                    if let Some(n) = notify {
                        n.api_error(&e);
                    }
                }
            }
            is_loading.set(false);
        });
    };

    spawn_local(async move {
        match fetch_campaigns().await {
            Ok(list) => campaigns.set(list),
            Err(e) => log::warn!("campaigns not loaded: {}", e.detail()),
        }
    });

    let rows = Signal::derive(move || {
        let names: HashMap<String, String> = campaigns.with(|list| {
            list.iter().map(|c| (c.id.clone(), c.name.clone())).collect()
        });
        let rows: Vec<TemplateRow> =
            templates.with(|list| list.iter().map(|t| TemplateRow::new(t, &names)).collect());
        to_records(&rows)
    });

    let find = move |id: &str| templates.with(|list| list.iter().find(|t| t.id == id).cloned());

    let on_edit = Callback::new(move |id: String| {
        if let Some(t) = find(&id) {
            editing.set(Some(Editing::Existing(t)));
        }
    });

    let on_delete = Callback::new(move |id: String| {
        let Some(t) = find(&id) else { return };
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(&format!("Delete template \"{}\"?", t.name)).ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_template(&t.id).await {
                Ok(()) => {
                    templates.update(|list| list.retain(|x| x.id != t.id));
                    if let Some(n) = notify {
                        n.success(format!("Template \"{}\" deleted", t.name));
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

    let columns = vec![
        ColumnDef::new("Name", "name"),
        ColumnDef::new("Subject", "subject"),
        ColumnDef::new("Campaign", "campaign").cycle_filter(),
        ColumnDef::new("Markers", "markers").without_filter().align_right(),
        ColumnDef::new("Updated", "updated_at").without_filter(),
        ColumnDef::display("").cell(move |row: &Record| {
            let id = field_text(row, "id").unwrap_or_default();
            let id_delete = id.clone();
            view! {
                <div class="table__actions">
                    <button
                        class="button button--ghost button--icon"
                        title="Edit"
                        on:click=move |ev: MouseEvent| {
                            ev.stop_propagation();
                            on_edit.run(id.clone());
                        }
                    >
                        {icon(Icon::Edit)}
                    </button>
                    <button
                        class="button button--ghost button--icon"
                        title="Delete"
                        on:click=move |ev: MouseEvent| {
                            ev.stop_propagation();
                            on_delete.run(id_delete.clone());
                        }
                    >
                        {icon(Icon::Delete)}
                    </button>
                </div>
            }
            .into_any()
        }),
    ];

    let close = Callback::new(move |_: ()| editing.set(None));
    let on_saved = Callback::new(move |_: ()| {
        editing.set(None);
        if let Some(n) = notify {
            n.success("Template saved");
        }
        fetch();
    });

    fetch();

    view! {
        <div class="page">
            <PageHeader title="Templates" icon_kind=Icon::Templates>
                <select
                    class="header__select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        campaign_filter.set((!value.is_empty()).then_some(value));
                        fetch();
                    }
                >
                    <option value="">"All campaigns"</option>
                    {move || campaigns.get().into_iter().map(|c| view! {
                        <option value=c.id.clone()>{c.name.clone()}</option>
                    }).collect_view()}
                </select>
                <button class="button button--primary" on:click=move |_| editing.set(Some(Editing::New))>
                    {icon(Icon::Plus)}
                    "New template"
                </button>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon(Icon::Refresh)}
                    "Refresh"
                </button>
            </PageHeader>

            <DataTable
                columns=columns
                data=rows
                is_loading=is_loading
                export_name="templates"
                search_placeholder="Search templates"
                on_row_click=Callback::new(move |row: Record| {
                    if let Some(id) = field_text(&row, "id") {
                        on_edit.run(id);
                    }
                })
            />

            {move || editing.get().map(|e| {
                let template = match e {
                    Editing::New => None,
                    Editing::Existing(t) => Some(t),
                };
                view! {
                    <ModalFrame on_close=close modal_style="max-width: min(1100px, 95vw); width: min(1100px, 95vw);">
                        <TemplateDetails
                            template=template
                            campaign_id=campaign_filter.get_untracked()
                            on_saved=on_saved
                            on_cancel=close
                        />
                    </ModalFrame>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_resolves_campaign_name() {
        let template = Template {
            id: "t1".into(),
            name: "Welcome".into(),
            subject: Some("Hi ^^first_name^^".into()),
            content: "<p>^^first_name^^ from ^^city^^</p>".into(),
            campaign_id: Some("c1".into()),
            created_at: None,
            updated_at: None,
        };
        let names = HashMap::from([("c1".to_string(), "Spring".to_string())]);
        let row = TemplateRow::new(&template, &names);
        assert_eq!(row.campaign, "Spring");
        assert_eq!(row.markers, 2);

        let row = TemplateRow::new(&template, &HashMap::new());
        assert_eq!(row.campaign, "c1");
    }
}
