use crate::layout::center::Center;
use crate::layout::left::Sidebar;
use crate::layout::navigation::{LocalStoragePersistence, NavigationStore};
use crate::layout::notifications::NotificationService;
use crate::layout::Shell;
use crate::shared::api::set_api_base;
use crate::shared::config::{load_config, AppConfig};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

#[component]
fn MainLayout() -> impl IntoView {
    let nav = use_context::<NavigationStore>().expect("NavigationStore context not found");

    // Initialize router integration. This runs once when the component is created.
    nav.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Center /> }.into_any()
        />
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = RwSignal::new(AppConfig::default());
    let config_ready = RwSignal::new(false);

    provide_context(config);
    provide_context(NotificationService::new());
    provide_context(NavigationStore::new(Arc::new(LocalStoragePersistence)));

    // экраны запрашивают данные при монтировании, поэтому адрес API нужен до них
    spawn_local(async move {
        let loaded = load_config().await;
        set_api_base(&loaded.api.base_url);
        config.set(loaded);
        config_ready.set(true);
    });

    view! {
        <Show
            when=move || config_ready.get()
            fallback=|| view! { <div class="app-loading">"Loading..."</div> }
        >
            <MainLayout />
        </Show>
    }
}
