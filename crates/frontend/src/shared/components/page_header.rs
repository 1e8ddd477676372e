use crate::shared::icons::{icon, Icon};
use leptos::prelude::*;

/// Header of a screen: icon, title, optional subtitle and action buttons
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional)] icon_kind: Option<Icon>,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    /// Action buttons (pass an empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                {icon_kind.map(|i| view! { <span class="page-header__icon">{icon(i)}</span> })}
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
