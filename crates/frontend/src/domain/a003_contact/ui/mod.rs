pub mod list;
pub mod upload;

use crate::domain::a001_campaign::api::fetch_campaigns;
use crate::shared::components::PageHeader;
use crate::shared::icons::{icon, Icon};
use contracts::domain::a001_campaign::aggregate::Campaign;
use leptos::prelude::*;
use leptos::task::spawn_local;
use list::ContactList;
use upload::ContactUpload;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    List,
    Upload,
}

/// Contacts of one campaign: the uploaded list and the CSV upload form
#[component]
pub fn ContactsPage() -> impl IntoView {
    let campaigns = RwSignal::new(Vec::<Campaign>::new());
    let campaign_id = RwSignal::new(None::<String>);
    let tab = RwSignal::new(Tab::List);

    spawn_local(async move {
        match fetch_campaigns().await {
            Ok(list) => {
                if campaign_id.get_untracked().is_none() {
                    campaign_id.set(list.first().map(|c| c.id.clone()));
                }
                campaigns.set(list);
            }
            Err(e) => log::warn!("campaigns not loaded: {}", e.detail()),
        }
    });

    let on_uploaded = Callback::new(move |_: ()| tab.set(Tab::List));

    view! {
        <div class="page">
            <PageHeader title="Contacts" icon_kind=Icon::Contacts>
                <select
                    class="header__select"
                    prop:value=move || campaign_id.get().unwrap_or_default()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        campaign_id.set((!value.is_empty()).then_some(value));
                    }
                >
                    {move || campaigns.get().into_iter().map(|c| view! {
                        <option value=c.id.clone()>{c.name.clone()}</option>
                    }).collect_view()}
                </select>
                <button
                    class="button button--secondary"
                    class:button--active=move || tab.get() == Tab::List
                    on:click=move |_| tab.set(Tab::List)
                >
                    {icon(Icon::Contacts)}
                    "Contacts"
                </button>
                <button
                    class="button button--secondary"
                    class:button--active=move || tab.get() == Tab::Upload
                    on:click=move |_| tab.set(Tab::Upload)
                >
                    {icon(Icon::Upload)}
                    "Upload CSV"
                </button>
            </PageHeader>

            {move || match (campaign_id.get(), tab.get()) {
                (None, _) => view! {
                    <div class="empty">"Select a campaign"</div>
                }.into_any(),
                (Some(id), Tab::List) => view! { <ContactList campaign_id=id /> }.into_any(),
                (Some(id), Tab::Upload) => view! {
                    <ContactUpload campaign_id=id on_uploaded=on_uploaded />
                }.into_any(),
            }}
        </div>
    }
}
