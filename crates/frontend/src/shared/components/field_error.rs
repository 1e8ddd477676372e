use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

/// Inline validation message under a form field
#[component]
pub fn FieldError(
    #[prop(into)] errors: Signal<FieldErrors>,
    field: &'static str,
) -> impl IntoView {
    move || {
        errors
            .with(|e| e.get(field).cloned())
            .map(|msg| view! { <div class="form__error">{msg}</div> })
    }
}
