use super::view_model::CampaignDetailsViewModel;
use crate::shared::components::FieldError;
use crate::shared::date_utils::to_input_value;
use crate::shared::icons::{icon, Icon};
use contracts::domain::a001_campaign::aggregate::SubCampaign;
use contracts::enums::Channel;
use leptos::prelude::*;

fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[component]
pub fn CampaignDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CampaignDetailsViewModel::new();
    vm.load_if_needed(id);

    let form = vm.form;
    let errors = vm.errors;
    let is_email = move || form.with(|f| f.channel == Channel::Email);
    // строки перерисовываются только при добавлении/удалении
    let sub_count = Memo::new(move |_| form.with(|f| f.sub_campaigns.len()));

    let vm_title = vm.clone();
    let vm_save = vm.clone();
    let vm_add = vm.clone();
    let vm_subs = vm.clone();

    view! {
        <div class="details-container campaign-details">
            <div class="details-header">
                <h3>{move || if vm_title.is_edit_mode() { "Edit campaign" } else { "New campaign" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="name">"Name"</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        placeholder="Spring newsletter"
                    />
                    <FieldError errors=errors field="name" />
                </div>

                <div class="form-group">
                    <label for="channel">"Channel"</label>
                    <select
                        id="channel"
                        prop:value=move || form.with(|f| f.channel.code().to_string())
                        on:change=move |ev| {
                            if let Some(channel) = Channel::from_code(&event_target_value(&ev)) {
                                form.update(|f| f.channel = channel);
                            }
                        }
                    >
                        {Channel::all().into_iter().map(|c| view! {
                            <option value=c.code()>{c.display_name()}</option>
                        }).collect_view()}
                    </select>
                </div>

                <Show when=is_email>
                    <div class="form-group">
                        <label for="subject">"Subject"</label>
                        <input
                            type="text"
                            id="subject"
                            prop:value=move || form.with(|f| f.subject.clone().unwrap_or_default())
                            on:input=move |ev| form.update(|f| f.subject = optional(event_target_value(&ev)))
                        />
                        <FieldError errors=errors field="subject" />
                    </div>

                    <div class="form-group">
                        <label for="sender_email">"Sender e-mail"</label>
                        <input
                            type="email"
                            id="sender_email"
                            prop:value=move || form.with(|f| f.sender_email.clone().unwrap_or_default())
                            on:input=move |ev| form.update(|f| f.sender_email = optional(event_target_value(&ev)))
                            placeholder="news@example.com"
                        />
                        <FieldError errors=errors field="sender_email" />
                    </div>

                    <div class="form-group">
                        <label for="sender_name">"Sender name"</label>
                        <input
                            type="text"
                            id="sender_name"
                            prop:value=move || form.with(|f| f.sender_name.clone().unwrap_or_default())
                            on:input=move |ev| form.update(|f| f.sender_name = optional(event_target_value(&ev)))
                        />
                    </div>
                </Show>

                <div class="form-group">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        rows="3"
                        prop:value=move || form.with(|f| f.description.clone().unwrap_or_default())
                        on:input=move |ev| form.update(|f| f.description = optional(event_target_value(&ev)))
                    />
                    <FieldError errors=errors field="description" />
                </div>

                <div class="form-section">
                    <div class="form-section__header">
                        <h4>"Sub-campaigns"</h4>
                        <button class="button button--secondary" on:click=move |_| vm_add.add_sub_campaign()>
                            {icon(Icon::Plus)}
                            "Add"
                        </button>
                    </div>
                    <FieldError errors=errors field="sub_campaigns" />
                    {move || {
                        (0..sub_count.get())
                            .map(|idx| sub_campaign_row(vm_subs.clone(), idx))
                            .collect_view()
                    }}
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    disabled=move || vm_save.saving.get()
                    on:click={
                        let vm = vm_save.clone();
                        move |_| vm.save_command(on_saved)
                    }
                >
                    {icon(Icon::Save)}
                    "Save"
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    {icon(Icon::X)}
                    "Cancel"
                </button>
            </div>
        </div>
    }
}

fn sub_campaign_row(vm: CampaignDetailsViewModel, idx: usize) -> impl IntoView {
    let form = vm.form;
    let templates = vm.templates;
    let field = move |read: fn(&SubCampaign) -> String| {
        move || form.with(|f| f.sub_campaigns.get(idx).map(read).unwrap_or_default())
    };
    let vm_name = vm.clone();
    let vm_template = vm.clone();
    let vm_schedule = vm.clone();
    let vm_rate = vm.clone();
    let vm_enabled = vm.clone();

    view! {
        <div class="sub-campaign">
            <input
                type="text"
                class="sub-campaign__name"
                placeholder="Name"
                prop:value=field(|s| s.name.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm_name.update_sub_campaign(idx, |s| s.name = value);
                }
            />
            <select
                class="sub-campaign__template"
                prop:value=field(|s| s.template_id.clone().unwrap_or_default())
                on:change=move |ev| {
                    let value = optional(event_target_value(&ev));
                    vm_template.update_sub_campaign(idx, |s| s.template_id = value);
                }
            >
                <option value="">"— template —"</option>
                {move || templates.get().into_iter().map(|t| view! {
                    <option value=t.id.clone()>{t.name.clone()}</option>
                }).collect_view()}
            </select>
            <input
                type="datetime-local"
                class="sub-campaign__schedule"
                prop:value=field(|s| to_input_value(s.scheduled_at))
                on:change=move |ev| vm_schedule.set_schedule(idx, &event_target_value(&ev))
            />
            <input
                type="number"
                class="sub-campaign__rate"
                min="1"
                max="10000"
                title="Messages per minute"
                prop:value=field(|s| s.rate_limit_per_minute.to_string())
                on:input=move |ev| {
                    if let Ok(rate) = event_target_value(&ev).trim().parse::<u32>() {
                        vm_rate.update_sub_campaign(idx, |s| s.rate_limit_per_minute = rate);
                    }
                }
            />
            <label class="sub-campaign__enabled">
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.sub_campaigns.get(idx).map(|s| s.enabled).unwrap_or(false))
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        vm_enabled.update_sub_campaign(idx, |s| s.enabled = checked);
                    }
                />
                "Enabled"
            </label>
            <button class="button button--ghost" title="Remove" on:click=move |_| vm.remove_sub_campaign(idx)>
                {icon(Icon::Delete)}
            </button>
        </div>
    }
}
