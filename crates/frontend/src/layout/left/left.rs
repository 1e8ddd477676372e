use crate::shared::icons::{icon, Icon};
use leptos::prelude::*;

/// Left zone with a collapse toggle; collapsed keeps only the icons
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let collapsed = RwSignal::new(false);

    view! {
        <div data-zone="left" class="left" class:left--collapsed=move || collapsed.get()>
            <button
                class="left__toggle"
                title=move || if collapsed.get() { "Expand" } else { "Collapse" }
                on:click=move |_| collapsed.update(|c| *c = !*c)
            >
                {move || if collapsed.get() { icon(Icon::ChevronRight) } else { icon(Icon::ChevronLeft) }}
            </button>
            {children()}
        </div>
    }
}
