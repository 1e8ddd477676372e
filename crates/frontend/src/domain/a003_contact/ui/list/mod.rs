use crate::domain::a003_contact::api;
use crate::layout::notifications::use_notifications;
use crate::shared::api::RequestSequencer;
use crate::shared::config::AppConfig;
use crate::shared::data_table::record::value_text;
use crate::shared::data_table::{field_text, to_records, ColumnDef, DataTable, Record};
use contracts::domain::a003_contact::aggregate::{Contact, OtherFields};
use contracts::shared::PageQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct ContactRow {
    pub id: String,
    pub email: String,
    pub phone: String,
    pub name: String,
    pub other_fields: String,
    pub other_fields_invalid: bool,
}

fn other_fields_text(fields: &OtherFields) -> String {
    match fields {
        OtherFields::Empty => String::new(),
        OtherFields::Parsed(map) => map
            .iter()
            .map(|(k, v)| format!("{}: {}", k, value_text(v).unwrap_or_default()))
            .collect::<Vec<_>>()
            .join(", "),
        OtherFields::Invalid(raw) => raw.clone(),
    }
}

impl From<Contact> for ContactRow {
    fn from(c: Contact) -> Self {
        let other = c.other_fields();
        Self {
            name: c.full_name(),
            other_fields: other_fields_text(&other),
            other_fields_invalid: other.is_invalid(),
            id: c.id,
            email: c.email.unwrap_or_default(),
            phone: c.phone.unwrap_or_default(),
        }
    }
}

fn columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("E-mail", "email"),
        ColumnDef::new("Phone", "phone"),
        ColumnDef::new("Name", "name"),
        ColumnDef::new("Extra fields", "other_fields").cell(|row: &Record| {
            let text = field_text(row, "other_fields").unwrap_or_default();
            let invalid = row
                .get("other_fields_invalid")
                .and_then(|v| v.as_bool())
                .unwrap_or(false);
            if invalid {
                view! {
                    <span class="badge badge--error" title=text>"invalid data"</span>
                }
                .into_any()
            } else {
                view! { <span>{text}</span> }.into_any()
            }
        }),
    ]
}

/// Server-paginated contacts of one campaign
#[component]
pub fn ContactList(campaign_id: String) -> impl IntoView {
    let notify = use_notifications();
    let default_page_size = use_context::<RwSignal<AppConfig>>()
        .map(|c| c.get_untracked().table.default_page_size)
        .unwrap_or(10);

    let rows = RwSignal::new(Vec::<Record>::new());
    let total = RwSignal::new(0usize);
    let is_loading = RwSignal::new(false);
    let page_index = RwSignal::new(0usize);
    let page_size = RwSignal::new(default_page_size);
    let search = RwSignal::new(String::new());
    let sequencer = StoredValue::new(RequestSequencer::default());
    let campaign_id = StoredValue::new(campaign_id);

    let load = move || {
        let Some(ticket) = sequencer.try_update_value(|s| s.next()) else { return };
        let query = PageQuery::from_index(
            page_index.get_untracked(),
            page_size.get_untracked(),
            &search.get_untracked(),
        );
        let id = campaign_id.get_value();
        is_loading.set(true);
        spawn_local(async move {
            let result = api::fetch_contacts(&id, &query).await;
            // пока запрос шёл, пользователь мог сменить страницу или поиск
            if !sequencer.with_value(|s| s.is_current(ticket)) {
                log::debug!("dropping stale contacts page {}", query.page);
                return;
            }
            match result {
                Ok(page) => {
                    let items: Vec<ContactRow> = page.items.into_iter().map(Into::into).collect();
                    rows.set(to_records(&items));
                    total.set(page.total);
                }
                Err(e) => {
                    if let Some(n) = notify {
                        n.api_error(&e);
                    }
                }
            }
            is_loading.set(false);
        });
    };

    let on_page_change = Callback::new(move |idx: usize| {
        page_index.set(idx);
        load();
    });
    let on_page_size_change = Callback::new(move |size: usize| {
        page_size.set(size);
        page_index.set(0);
        load();
    });
    let on_search = Callback::new(move |term: String| {
        search.set(term);
        page_index.set(0);
        load();
    });

    load();

    view! {
        <DataTable
            columns=columns()
            data=rows
            is_loading=is_loading
            total_count=Signal::from(total)
            on_page_change=on_page_change
            on_page_size_change=on_page_size_change
            on_search=on_search
            page_size=default_page_size
            export_name="contacts"
            search_placeholder="Search by e-mail, phone or name"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn contact(other: Option<serde_json::Value>) -> Contact {
        Contact {
            id: "1".into(),
            email: Some("ann@example.com".into()),
            phone: None,
            first_name: Some("Ann".into()),
            last_name: Some("Lee".into()),
            other_fields: other,
        }
    }

    #[test]
    fn test_row_with_parsed_fields() {
        let row = ContactRow::from(contact(Some(json!("{\"city\":\"Riga\",\"age\":30}"))));
        assert_eq!(row.name, "Ann Lee");
        assert!(!row.other_fields_invalid);
        assert!(row.other_fields.contains("city: Riga"));
        assert!(row.other_fields.contains("age: 30"));
    }

    #[test]
    fn test_row_with_invalid_fields() {
        let row = ContactRow::from(contact(Some(json!("{broken"))));
        assert!(row.other_fields_invalid);
        assert_eq!(row.other_fields, "{broken");

        let row = ContactRow::from(contact(None));
        assert!(!row.other_fields_invalid);
        assert_eq!(row.other_fields, "");
    }
}
