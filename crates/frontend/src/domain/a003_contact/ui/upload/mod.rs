//! CSV upload: local parsing, column mapping, validation and preview before sending

use crate::domain::a003_contact::api;
use crate::layout::notifications::use_notifications;
use crate::shared::csv_import::{propose_mapping, read_csv_file, CsvData, MappingReport};
use crate::shared::data_table::DataTable;
use crate::shared::file_picker::{format_file_size, picked_file};
use crate::shared::icons::{icon, Icon};
use contracts::domain::a003_contact::aggregate::{ContactField, ContactUploadMapping, ContactUploadResult};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

const PREVIEW_PAGE_SIZE: usize = 10;

#[component]
pub fn ContactUpload(campaign_id: String, on_uploaded: Callback<()>) -> impl IntoView {
    let notify = use_notifications();
    let campaign_id = StoredValue::new(campaign_id);
    let file = StoredValue::new_local(None::<File>);
    let file_label = RwSignal::new(None::<String>);
    let data = RwSignal::new(None::<CsvData>);
    let mapping = RwSignal::new(ContactUploadMapping::default());
    let error = RwSignal::new(None::<String>);
    let parsing = RwSignal::new(false);
    let uploading = RwSignal::new(false);
    let result = RwSignal::new(None::<ContactUploadResult>);

    let report = Memo::new(move |_| {
        data.with(|d| {
            d.as_ref()
                .map(|d| mapping.with(|m| MappingReport::build(d, m)))
        })
    });

    let on_file = move |ev: web_sys::Event| {
        let Some(picked) = picked_file(&ev) else { return };
        file_label.set(Some(format!("{} ({})", picked.name(), format_file_size(picked.size()))));
        file.set_value(Some(picked.clone()));
        data.set(None);
        result.set(None);
        error.set(None);
        parsing.set(true);
        spawn_local(async move {
            match read_csv_file(&picked).await {
                Ok(parsed) => {
                    mapping.set(propose_mapping(&parsed.headers));
                    data.set(Some(parsed));
                }
                Err(e) => error.set(Some(e)),
            }
            parsing.set(false);
        });
    };

    let set_target = move |column: String, target: ContactField| {
        mapping.update(|m| {
            if let Some(entry) = m.columns.iter_mut().find(|c| c.column == column) {
                entry.target = target;
            }
        });
    };

    let can_upload = move || {
        !uploading.get() && report.with(|r| r.as_ref().map(|r| r.is_ok()).unwrap_or(false))
    };

    let upload = move |_: leptos::ev::MouseEvent| {
        let Some(picked) = file.get_value() else { return };
        let current_mapping = mapping.get_untracked();
        let id = campaign_id.get_value();
        uploading.set(true);
        spawn_local(async move {
            match api::upload_contacts(&id, &picked, &current_mapping).await {
                Ok(res) => {
                    log::info!("contacts uploaded: {} inserted, {} rejected", res.inserted, res.rejected);
                    if let Some(n) = notify {
                        n.success(format!("{} contacts uploaded", res.inserted));
                    }
                    result.set(Some(res));
                    on_uploaded.run(());
                }
                Err(e) => {
                    if let Some(n) = notify {
                        n.api_error(&e);
                    }
                }
            }
            uploading.set(false);
        });
    };

    view! {
        <div class="contact-upload">
            <div class="contact-upload__file">
                <label class="button button--secondary button--file">
                    {icon(Icon::Upload)}
                    "Choose CSV file"
                    <input type="file" accept=".csv,text/csv" style="display: none;" on:change=on_file />
                </label>
                <span class="contact-upload__file-name">
                    {move || file_label.get().unwrap_or_else(|| "No file selected".to_string())}
                </span>
                {move || parsing.get().then(|| view! { <span class="loading">"Reading..."</span> })}
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || result.get().map(|r| view! {
                <div class="info-box">
                    {format!("Inserted: {}, rejected: {}", r.inserted, r.rejected)}
                </div>
            })}

            {move || data.with(|d| d.as_ref().map(|d| {
                let sample = d.rows.first().cloned().unwrap_or_default();
                let headers = d.headers.clone();
                view! {
                    <div class="contact-upload__mapping">
                        <h4>{format!("Column mapping ({} rows)", d.row_count())}</h4>
                        <table class="table__data">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"File column"</th>
                                    <th class="table__header-cell">"First value"</th>
                                    <th class="table__header-cell">"Maps to"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {headers.into_iter().enumerate().map(|(idx, header)| {
                                    let column = header.clone();
                                    let column_value = header.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{header}</td>
                                            <td class="table__cell">{sample.get(idx).cloned().unwrap_or_default()}</td>
                                            <td class="table__cell">
                                                <select
                                                    prop:value=move || mapping.with(|m| {
                                                        m.target_of(&column_value).unwrap_or(ContactField::Skip).code().to_string()
                                                    })
                                                    on:change=move |ev| {
                                                        if let Some(target) = ContactField::from_code(&event_target_value(&ev)) {
                                                            set_target(column.clone(), target);
                                                        }
                                                    }
                                                >
                                                    {ContactField::all().into_iter().map(|f| view! {
                                                        <option value=f.code()>{f.display_name()}</option>
                                                    }).collect_view()}
                                                </select>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
            }))}

            {move || report.get().map(|r| {
                let errors = r.errors();
                let warnings = r.warnings();
                view! {
                    <div class="contact-upload__report">
                        {errors.into_iter().map(|e| view! { <div class="error">{e}</div> }).collect_view()}
                        {warnings.into_iter().map(|w| view! {
                            <div class="warning-box">
                                <span class="warning-box__icon">"⚠"</span>
                                <span class="warning-box__text">{w}</span>
                            </div>
                        }).collect_view()}
                    </div>
                }
            })}

            {move || data.with(|d| d.as_ref().map(|d| d.preview_columns())).map(|columns| view! {
                <div class="contact-upload__preview">
                    <h4>"Preview"</h4>
                    <DataTable
                        columns=columns
                        data=Signal::derive(move || data.with(|d| d.as_ref().map(|d| d.to_records()).unwrap_or_default()))
                        page_size=PREVIEW_PAGE_SIZE
                        export_name="contacts_preview"
                    />
                </div>
            })}

            <div class="details-actions">
                <button class="button button--primary" disabled=move || !can_upload() on:click=upload>
                    {icon(Icon::Upload)}
                    {move || if uploading.get() { "Uploading..." } else { "Upload contacts" }}
                </button>
            </div>
        </div>
    }
}
