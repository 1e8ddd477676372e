use crate::domain::a004_sms_upload::api;
use crate::layout::navigation::use_navigation;
use crate::layout::notifications::{use_notifications, NotificationService};
use crate::layout::routes::AppRoute;
use crate::shared::api::ApiError;
use crate::shared::components::PageHeader;
use crate::shared::data_table::{field_text, to_records, ColumnDef, DataTable, Record};
use crate::shared::date_utils::format_datetime;
use crate::shared::export::download_blob;
use crate::shared::icons::{icon, Icon};
use contracts::domain::a004_sms_upload::aggregate::SmsUpload;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;
use web_sys::Blob;

#[derive(Clone, Debug, Serialize)]
pub struct SmsUploadRow {
    pub id: String,
    pub campaign_name: String,
    pub file_name: String,
    pub message: String,
    pub total: u64,
    pub sent: u64,
    pub failed: u64,
    pub progress: String,
    pub status: String,
    pub created_at: String,
}

/// "sent / total" as a percent, blank while the total is unknown
pub fn progress_text(sent: u64, failed: u64, total: u64) -> String {
    if total == 0 {
        return String::new();
    }
    let done = (sent + failed).min(total);
    format!("{:.0}%", done as f64 * 100.0 / total as f64)
}

impl From<SmsUpload> for SmsUploadRow {
    fn from(u: SmsUpload) -> Self {
        Self {
            progress: progress_text(u.sent, u.failed, u.total),
            id: u.id,
            campaign_name: u.campaign_name,
            file_name: u.file_name,
            message: u.message,
            total: u.total,
            sent: u.sent,
            failed: u.failed,
            status: u.status,
            created_at: format_datetime(u.created_at),
        }
    }
}

fn save_blob(notify: Option<NotificationService>, result: Result<Blob, ApiError>, file_name: &str) {
    let outcome = result
        .map_err(|e| e.user_message())
        .and_then(|blob| download_blob(&blob, file_name));
    if let Err(msg) = outcome {
        log::error!("download {} failed: {}", file_name, msg);
        if let Some(n) = notify {
            n.error(msg);
        }
    }
}

fn columns(on_download: Callback<(String, String)>, on_log: Callback<String>) -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("Campaign", "campaign_name"),
        ColumnDef::new("File", "file_name"),
        ColumnDef::new("Message", "message"),
        ColumnDef::new("Total", "total").without_filter().align_right(),
        ColumnDef::new("Sent", "sent").without_filter().align_right(),
        ColumnDef::new("Failed", "failed").without_filter().align_right(),
        ColumnDef::new("Progress", "progress").without_filter().align_right(),
        ColumnDef::new("Status", "status").cycle_filter(),
        ColumnDef::new("Created", "created_at").without_filter(),
        ColumnDef::display("").cell(move |row: &Record| {
            let id = field_text(row, "id").unwrap_or_default();
            let file_name = field_text(row, "file_name").unwrap_or_default();
            let log_id = id.clone();
            view! {
                <div class="table__actions">
                    <button
                        class="button button--ghost button--icon"
                        title="Download recipients file"
                        on:click=move |ev: MouseEvent| {
                            ev.stop_propagation();
                            on_download.run((id.clone(), file_name.clone()));
                        }
                    >
                        {icon(Icon::Download)}
                    </button>
                    <button
                        class="button button--ghost button--icon"
                        title="Delivery log"
                        on:click=move |ev: MouseEvent| {
                            ev.stop_propagation();
                            on_log.run(log_id.clone());
                        }
                    >
                        {icon(Icon::FileText)}
                    </button>
                </div>
            }
            .into_any()
        }),
    ]
}

#[component]
pub fn SmsHistoryList() -> impl IntoView {
    let notify = use_notifications();
    let nav = use_navigation();
    let items = RwSignal::new(Vec::<SmsUploadRow>::new());
    let is_loading = RwSignal::new(false);

    let fetch = move || {
        is_loading.set(true);
        spawn_local(async move {
            match api::fetch_uploads().await {
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

    let on_download = Callback::new(move |(id, file_name): (String, String)| {
        spawn_local(async move {
            let result = api::download_file(&id, &file_name).await;
            save_blob(notify, result, &file_name);
        });
    });

    let on_log = Callback::new(move |id: String| {
        spawn_local(async move {
            let result = api::generate_log(&id).await;
            save_blob(notify, result, &format!("sms_log_{}.csv", id));
        });
    });

    fetch();

    view! {
        <div class="page">
            <PageHeader title="SMS history" icon_kind=Icon::History>
                <button class="button button--primary" on:click=move |_| nav.set_active_route(AppRoute::SmsSend)>
                    {icon(Icon::Send)}
                    "Send SMS"
                </button>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon(Icon::Refresh)}
                    "Refresh"
                </button>
            </PageHeader>

            <DataTable
                columns=columns(on_download, on_log)
                data=Signal::derive(move || items.with(|rows| to_records(rows)))
                is_loading=is_loading
                export_name="sms_history"
                search_placeholder="Search uploads"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_text() {
        assert_eq!(progress_text(0, 0, 0), "");
        assert_eq!(progress_text(50, 0, 200), "25%");
        assert_eq!(progress_text(190, 10, 200), "100%");
        assert_eq!(progress_text(300, 0, 200), "100%");
    }

    #[test]
    fn test_row_from_upload() {
        let upload = SmsUpload {
            id: "u1".into(),
            campaign_name: "Promo".into(),
            file_name: "list.csv".into(),
            message: "Hi".into(),
            total: 4,
            sent: 1,
            failed: 1,
            status: "processing".into(),
            created_at: None,
        };
        let row = SmsUploadRow::from(upload);
        assert_eq!(row.progress, "50%");
        assert_eq!(row.created_at, "");
    }
}
