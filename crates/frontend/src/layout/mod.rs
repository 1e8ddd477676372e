pub mod center;
pub mod left;
pub mod navigation;
pub mod notifications;
pub mod routes;

use leptos::prelude::*;
use notifications::NotificationHost;

/// Main application shell.
///
/// ```text
/// +-----------+---------------------------+
/// |  Sidebar  |         Content           |
/// |   (Left)  |        (Center)           |
/// +-----------+---------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>
                <div class="app-main">
                    {center()}
                </div>
            </div>
            <NotificationHost />
        </div>
    }
}
