//! Campaign variables: one value per field, filled by hand or by uploading an asset

use crate::domain::a001_campaign::api;
use crate::layout::notifications::use_notifications;
use crate::shared::file_picker::{picked_file, reset_input};
use crate::shared::icons::{icon, Icon};
use contracts::domain::a001_campaign::aggregate::{CampaignField, UpdateVariablesRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn set_field_value(fields: &mut [CampaignField], key: &str, value: String) {
    if let Some(field) = fields.iter_mut().find(|f| f.key == key) {
        field.value = Some(value);
    }
}

#[component]
pub fn CampaignVariables(campaign_id: String, on_close: Callback<()>) -> impl IntoView {
    let notify = use_notifications();
    let fields = RwSignal::new(Vec::<CampaignField>::new());
    let is_loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let uploading = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let campaign_id = StoredValue::new(campaign_id);

    let load = move || {
        is_loading.set(true);
        let id = campaign_id.get_value();
        spawn_local(async move {
            match api::fetch_fields(&id).await {
                Ok(list) => {
                    fields.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            is_loading.set(false);
        });
    };

    let upload = move |key: String, ev: web_sys::Event| {
        let Some(file) = picked_file(&ev) else { return };
        reset_input(&ev);
        uploading.set(Some(key.clone()));
        let id = campaign_id.get_value();
        spawn_local(async move {
            match api::upload_variable(&id, &key, &file).await {
                Ok(uploaded) => {
                    fields.update(|f| set_field_value(f, &key, uploaded.url));
                }
                Err(e) => {
                    if let Some(n) = notify {
                        n.api_error(&e);
                    }
                }
            }
            uploading.set(None);
        });
    };

    let save = move |_: leptos::ev::MouseEvent| {
        let request = fields.with(|f| UpdateVariablesRequest::from_fields(f));
        let id = campaign_id.get_value();
        saving.set(true);
        spawn_local(async move {
            match api::update_variables(&id, &request).await {
                Ok(()) => {
                    if let Some(n) = notify {
                        n.success("Variables saved");
                    }
                    on_close.run(());
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            saving.set(false);
        });
    };

    load();

    view! {
        <div class="details-container campaign-variables">
            <div class="details-header">
                <h3>"Campaign variables"</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <div class="loading">"Loading..."</div> }
            >
                <Show
                    when=move || fields.with(|f| !f.is_empty())
                    fallback=|| view! { <div class="empty">"This campaign has no variables"</div> }
                >
                    <div class="details-form">
                        <For
                            each=move || fields.get()
                            key=|f| f.key.clone()
                            children=move |field| {
                                let key = field.key.clone();
                                let key_input = key.clone();
                                let key_value = key.clone();
                                let key_upload = key.clone();
                                let key_busy = key.clone();
                                let label = field.label.clone().unwrap_or_else(|| key.clone());
                                view! {
                                    <div class="form-group form-group--inline">
                                        <label title=format!("^^{}^^", key)>{label}</label>
                                        <input
                                            type="text"
                                            prop:value=move || fields.with(|f| {
                                                f.iter()
                                                    .find(|x| x.key == key_value)
                                                    .and_then(|x| x.value.clone())
                                                    .unwrap_or_default()
                                            })
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                fields.update(|f| set_field_value(f, &key_input, value));
                                            }
                                        />
                                        <label class="button button--secondary button--file">
                                            {icon(Icon::Upload)}
                                            {move || if uploading.get().as_deref() == Some(key_busy.as_str()) { "Uploading..." } else { "Upload" }}
                                            <input
                                                type="file"
                                                style="display: none;"
                                                on:change=move |ev| upload(key_upload.clone(), ev)
                                            />
                                        </label>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    disabled=move || saving.get() || is_loading.get()
                    on:click=save
                >
                    {icon(Icon::Save)}
                    "Save"
                </button>
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    {icon(Icon::X)}
                    "Close"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_field_value_ignores_unknown_key() {
        let mut fields = vec![CampaignField {
            key: "logo".into(),
            label: None,
            value: None,
        }];
        set_field_value(&mut fields, "banner", "x".into());
        assert_eq!(fields[0].value, None);
        set_field_value(&mut fields, "logo", "https://cdn/logo.png".into());
        assert_eq!(fields[0].value.as_deref(), Some("https://cdn/logo.png"));
    }
}
