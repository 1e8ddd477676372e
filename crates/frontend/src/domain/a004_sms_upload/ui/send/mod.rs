//! Отправка SMS-кампании: текст с маркерами и файл получателей

use crate::domain::a004_sms_upload::api;
use crate::layout::navigation::use_navigation;
use crate::layout::notifications::use_notifications;
use crate::layout::routes::AppRoute;
use crate::shared::components::{FieldError, PageHeader};
use crate::shared::csv_import::read_csv_file;
use crate::shared::file_picker::{format_file_size, picked_file};
use crate::shared::icons::{icon, Icon};
use contracts::domain::a004_sms_upload::aggregate::{SendSmsForm, MAX_MESSAGE_LEN};
use contracts::shared::template_vars::{extract_markers, marker};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

/// Markers with no matching column in the recipients file (case-insensitive)
pub fn unknown_markers(message: &str, headers: &[String]) -> Vec<String> {
    extract_markers(message)
        .into_iter()
        .filter(|key| !headers.iter().any(|h| h.eq_ignore_ascii_case(key)))
        .collect()
}

#[component]
pub fn SmsSendForm() -> impl IntoView {
    let notify = use_notifications();
    let nav = use_navigation();
    let form = RwSignal::new(SendSmsForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let file = StoredValue::new_local(None::<File>);
    let file_label = RwSignal::new(None::<String>);
    // заголовки известны только для CSV
    let headers = RwSignal::new(None::<Vec<String>>);
    let sending = RwSignal::new(false);

    let markers = Memo::new(move |_| form.with(|f| extract_markers(&f.message)));
    let unknown = Memo::new(move |_| {
        headers.with(|h| {
            h.as_ref()
                .map(|h| form.with(|f| unknown_markers(&f.message, h)))
                .unwrap_or_default()
        })
    });

    let on_file = move |ev: web_sys::Event| {
        let Some(picked) = picked_file(&ev) else { return };
        file_label.set(Some(format!("{} ({})", picked.name(), format_file_size(picked.size()))));
        file.set_value(Some(picked.clone()));
        headers.set(None);
        errors.update(|e| {
            e.remove("file");
        });
        if picked.name().to_lowercase().ends_with(".csv") {
            spawn_local(async move {
                match read_csv_file(&picked).await {
                    Ok(data) => headers.set(Some(data.headers)),
                    Err(e) => log::warn!("recipients file not parsed: {}", e),
                }
            });
        }
    };

    let submit = move |_: leptos::ev::MouseEvent| {
        let current = form.get_untracked();
        let picked = file.get_value();
        let validation = current.validate(picked.is_some());
        let ok = validation.is_empty();
        errors.set(validation);
        let Some(picked) = picked.filter(|_| ok) else { return };

        sending.set(true);
        spawn_local(async move {
            match api::send_sms(&current, &picked).await {
                Ok(res) => {
                    log::info!("sms queued: {} (upload {:?})", res.queued, res.upload_id);
                    if let Some(n) = notify {
                        n.success(format!("{} messages queued", res.queued));
                    }
                    nav.set_active_route(AppRoute::SmsHistory);
                }
                Err(e) => {
                    if let Some(n) = notify {
                        n.api_error(&e);
                    }
                }
            }
            sending.set(false);
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Send SMS" icon_kind=Icon::Send>
                <button
                    class="button button--secondary"
                    on:click=move |_| nav.set_active_route(AppRoute::SmsHistory)
                >
                    {icon(Icon::History)}
                    "History"
                </button>
            </PageHeader>

            <div class="details-form">
                <div class="form-group">
                    <label for="campaign_name">"Campaign name"</label>
                    <input
                        type="text"
                        id="campaign_name"
                        prop:value=move || form.with(|f| f.campaign_name.clone())
                        on:input=move |ev| form.update(|f| f.campaign_name = event_target_value(&ev))
                    />
                    <FieldError errors=errors field="campaign_name" />
                </div>

                <div class="form-group">
                    <label for="message">"Message"</label>
                    <textarea
                        id="message"
                        rows="6"
                        maxlength=MAX_MESSAGE_LEN.to_string()
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                        placeholder="Hello ^^first_name^^, ..."
                    />
                    <div class="form-group__hint">
                        {move || form.with(|f| format!(
                            "{} / {} characters, {} SMS",
                            f.message.chars().count(),
                            MAX_MESSAGE_LEN,
                            f.segments()
                        ))}
                    </div>
                    {move || {
                        let keys = markers.get();
                        (!keys.is_empty()).then(|| view! {
                            <div class="marker-list">
                                {keys.into_iter().map(|k| {
                                    let missing = unknown.with(|u| u.contains(&k));
                                    view! {
                                        <span class="badge" class:badge--error=missing>{marker(&k)}</span>
                                    }
                                }).collect_view()}
                            </div>
                        })
                    }}
                    <FieldError errors=errors field="message" />
                </div>

                <div class="form-group">
                    <label>"Recipients file"</label>
                    <label class="button button--secondary button--file">
                        {icon(Icon::Upload)}
                        "Choose file"
                        <input type="file" accept=".csv,.xlsx,.xls" style="display: none;" on:change=on_file />
                    </label>
                    <span class="form-group__hint">
                        {move || file_label.get().unwrap_or_else(|| "No file selected".to_string())}
                    </span>
                    {move || {
                        let keys = unknown.get();
                        (!keys.is_empty()).then(|| view! {
                            <div class="warning-box">
                                <span class="warning-box__icon">"⚠"</span>
                                <span class="warning-box__text">
                                    {format!("No column for: {}", keys.join(", "))}
                                </span>
                            </div>
                        })
                    }}
                    <FieldError errors=errors field="file" />
                </div>
            </div>

            <div class="details-actions">
                <button class="button button--primary" disabled=move || sending.get() on:click=submit>
                    {icon(Icon::Send)}
                    {move || if sending.get() { "Sending..." } else { "Send" }}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_markers() {
        let headers = vec!["Phone".to_string(), "First_Name".to_string()];
        assert_eq!(
            unknown_markers("Hi ^^first_name^^, code ^^code^^", &headers),
            vec!["code".to_string()]
        );
        assert!(unknown_markers("no markers", &headers).is_empty());
    }
}
