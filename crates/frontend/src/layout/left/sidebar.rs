//! Sidebar with collapsible menu groups

use crate::layout::navigation::use_navigation;
use crate::layout::routes::AppRoute;
use crate::shared::icons::{icon, Icon};
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: Icon,
    items: Vec<AppRoute>,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "analytics",
            label: "Analytics",
            icon: Icon::Dashboard,
            items: vec![AppRoute::Dashboard],
        },
        MenuGroup {
            id: "email",
            label: "E-mail",
            icon: Icon::Campaigns,
            items: vec![AppRoute::Campaigns, AppRoute::Templates, AppRoute::Contacts],
        },
        MenuGroup {
            id: "sms",
            label: "SMS",
            icon: Icon::Send,
            items: vec![AppRoute::SmsSend, AppRoute::SmsHistory],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = use_navigation();
    let groups = get_menu_groups();

    // группа с активным экраном раскрыта при старте
    let active = nav.active_route_untracked();
    let expanded_groups = RwSignal::new(
        groups
            .iter()
            .filter(|g| g.items.contains(&active))
            .map(|g| g.id)
            .collect::<Vec<_>>(),
    );

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id;
                let items_stored = StoredValue::new(group.items);
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                expanded_groups.update(|items| {
                                    if let Some(pos) = items.iter().position(|x| *x == group_id) {
                                        items.remove(pos);
                                    } else {
                                        items.push(group_id);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id)
                            >
                                {icon(Icon::ChevronRight)}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|route| view! {
                                    <div
                                        class="app-sidebar__item"
                                        class:app-sidebar__item--active=move || nav.active_route() == route
                                        style:padding-left="10px"
                                        on:click=move |_| nav.set_active_route(route)
                                    >
                                        <div class="app-sidebar__item-content">
                                            {icon(route.icon())}
                                            <span>{route.label()}</span>
                                        </div>
                                    </div>
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_is_in_the_menu_once() {
        let groups = get_menu_groups();
        for route in AppRoute::all() {
            let count = groups
                .iter()
                .flat_map(|g| g.items.iter())
                .filter(|r| *r == route)
                .count();
            assert_eq!(count, 1, "{:?}", route);
        }
    }
}
