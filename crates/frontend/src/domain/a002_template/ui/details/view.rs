use super::view_model::TemplateDetailsViewModel;
use crate::domain::a002_template::ui::preview::TemplatePreview;
use crate::shared::components::FieldError;
use crate::shared::file_picker::{picked_file, reset_input};
use crate::shared::icons::{icon, Icon};
use contracts::domain::a002_template::aggregate::Template;
use contracts::shared::template_vars::extract_markers;
use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Edit,
    Preview,
}

#[component]
pub fn TemplateDetails(
    template: Option<Template>,
    campaign_id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = TemplateDetailsViewModel::new(template, campaign_id);
    let form = vm.form;
    let errors = vm.errors;
    let error = vm.error;
    let converting = vm.converting;
    let saving = vm.saving;
    let tab = RwSignal::new(Tab::Edit);
    let title = if vm.is_edit_mode() { "Edit template" } else { "New template" };

    let marker_count = move || form.with(|f| extract_markers(&f.content).len());

    let vm_docx = vm.clone();
    let on_docx = move |ev: web_sys::Event| {
        if let Some(file) = picked_file(&ev) {
            reset_input(&ev);
            vm_docx.import_docx(file);
        }
    };

    view! {
        <div class="details-container template-details">
            <div class="details-header">
                <h3>{title}</h3>
                <div class="tabs">
                    <button
                        class="tabs__item"
                        class:tabs__item--active=move || tab.get() == Tab::Edit
                        on:click=move |_| tab.set(Tab::Edit)
                    >
                        {icon(Icon::Edit)} "Edit"
                    </button>
                    <button
                        class="tabs__item"
                        class:tabs__item--active=move || tab.get() == Tab::Preview
                        on:click=move |_| tab.set(Tab::Preview)
                    >
                        {icon(Icon::Eye)} "Preview"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show
                when=move || tab.get() == Tab::Edit
                fallback=move || view! { <TemplatePreview template=form /> }
            >
                <div class="details-form">
                    <div class="form-group">
                        <label for="name">"Name"</label>
                        <input
                            type="text"
                            id="name"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                        <FieldError errors=errors field="name" />
                    </div>

                    <div class="form-group">
                        <label for="subject">"Subject"</label>
                        <input
                            type="text"
                            id="subject"
                            prop:value=move || form.with(|f| f.subject.clone().unwrap_or_default())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.subject = (!value.trim().is_empty()).then_some(value));
                            }
                        />
                        <FieldError errors=errors field="subject" />
                    </div>

                    <div class="form-group">
                        <div class="form-group__label-row">
                            <label for="content">"Content (HTML)"</label>
                            <span class="form-group__hint">
                                {move || format!("{} markers, use ^^name^^", marker_count())}
                            </span>
                            <label class="button button--secondary button--file">
                                {icon(Icon::Upload)}
                                {move || if converting.get() { "Converting..." } else { "Import DOCX" }}
                                <input
                                    type="file"
                                    accept=".docx"
                                    style="display: none;"
                                    on:change=on_docx.clone()
                                />
                            </label>
                        </div>
                        <textarea
                            id="content"
                            class="code-input"
                            rows="16"
                            prop:value=move || form.with(|f| f.content.clone())
                            on:input=move |ev| form.update(|f| f.content = event_target_value(&ev))
                        />
                        <FieldError errors=errors field="content" />
                    </div>
                </div>
            </Show>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    disabled=move || saving.get() || converting.get()
                    on:click=move |_| vm.save_command(on_saved)
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
