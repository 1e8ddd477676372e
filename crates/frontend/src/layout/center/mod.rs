pub mod registry;

use super::navigation::use_navigation;
use leptos::prelude::*;

/// Content zone: renders the active screen
#[component]
pub fn Center() -> impl IntoView {
    let nav = use_navigation();

    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {move || registry::render_route_content(nav.active_route())}
        </div>
    }
}
