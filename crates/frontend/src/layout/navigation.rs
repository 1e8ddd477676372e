//! Active screen state, persisted between sessions and mirrored into `?active=`.

use super::routes::AppRoute;
use leptos::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use web_sys::window;

const ACTIVE_ROUTE_KEY: &str = "campaign_console_active_route";

/// Where the last active route is remembered
pub trait RoutePersistence: Send + Sync {
    fn load(&self) -> Option<AppRoute>;
    fn save(&self, route: AppRoute);
}

/// Browser localStorage
pub struct LocalStoragePersistence;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl RoutePersistence for LocalStoragePersistence {
    fn load(&self) -> Option<AppRoute> {
        let key = get_local_storage()?.get_item(ACTIVE_ROUTE_KEY).ok()??;
        AppRoute::from_key(&key)
    }

    fn save(&self, route: AppRoute) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.set_item(ACTIVE_ROUTE_KEY, route.key());
        }
    }
}

/// In-process store, used where there is no browser
#[derive(Default)]
pub struct MemoryPersistence {
    route: Mutex<Option<AppRoute>>,
}

impl RoutePersistence for MemoryPersistence {
    fn load(&self) -> Option<AppRoute> {
        self.route.lock().ok().and_then(|r| *r)
    }

    fn save(&self, route: AppRoute) {
        if let Ok(mut r) = self.route.lock() {
            *r = Some(route);
        }
    }
}

#[derive(Clone, Copy)]
pub struct NavigationStore {
    active: RwSignal<AppRoute>,
    persistence: StoredValue<Arc<dyn RoutePersistence>>,
}

impl NavigationStore {
    /// Starts from the persisted route, or the dashboard
    pub fn new(persistence: Arc<dyn RoutePersistence>) -> Self {
        let initial = persistence.load().unwrap_or_default();
        Self {
            active: RwSignal::new(initial),
            persistence: StoredValue::new(persistence),
        }
    }

    pub fn active_route(&self) -> AppRoute {
        self.active.get()
    }

    pub fn active_route_untracked(&self) -> AppRoute {
        self.active.get_untracked()
    }

    pub fn set_active_route(&self, route: AppRoute) {
        if self.active.get_untracked() == route {
            return;
        }
        log::info!("navigate: {}", route.key());
        self.persistence.with_value(|p| p.save(route));
        self.active.set(route);
    }

    /// `?active=` wins over the persisted route; later changes are written back
    /// to the address bar without adding history entries
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(route) = route_from_query(&search) {
            self.set_active_route(route);
        }

        let this = *self;
        Effect::new(move |_| {
            let route = this.active.get();
            let new_url = format!("?{}", route_query(route));
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

pub fn route_from_query(search: &str) -> Option<AppRoute> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").and_then(|k| AppRoute::from_key(k))
}

pub fn route_query(route: AppRoute) -> String {
    serde_qs::to_string(&HashMap::from([("active", route.key())])).unwrap_or_default()
}

pub fn use_navigation() -> NavigationStore {
    use_context::<NavigationStore>().expect("NavigationStore not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_memory_persistence_round_trip() {
        let p = MemoryPersistence::default();
        assert_eq!(p.load(), None);
        p.save(AppRoute::Templates);
        assert_eq!(p.load(), Some(AppRoute::Templates));
    }

    #[test]
    fn test_store_restores_and_persists() {
        let owner = Owner::new();
        owner.with(|| {
            let persistence = Arc::new(MemoryPersistence::default());
            persistence.save(AppRoute::Contacts);

            let store = NavigationStore::new(persistence.clone());
            assert_eq!(store.active_route_untracked(), AppRoute::Contacts);

            store.set_active_route(AppRoute::SmsHistory);
            assert_eq!(store.active_route_untracked(), AppRoute::SmsHistory);
            assert_eq!(persistence.load(), Some(AppRoute::SmsHistory));
        });
    }

    #[test]
    fn test_query_parsing() {
        assert_eq!(route_from_query("?active=a002_template"), Some(AppRoute::Templates));
        assert_eq!(route_from_query("?active=unknown"), None);
        assert_eq!(route_from_query(""), None);
        assert_eq!(route_query(AppRoute::Campaigns), "active=a001_campaign");
    }
}
