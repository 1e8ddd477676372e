//! Маппинг AppRoute → View, единственное место где экраны подключаются к навигации

use crate::dashboards::d400_campaign_dashboard::ui::CampaignDashboard;
use crate::domain::a001_campaign::ui::list::CampaignList;
use crate::domain::a002_template::ui::list::TemplateList;
use crate::domain::a003_contact::ui::ContactsPage;
use crate::domain::a004_sms_upload::ui::list::SmsHistoryList;
use crate::domain::a004_sms_upload::ui::send::SmsSendForm;
use crate::layout::routes::AppRoute;
use leptos::prelude::*;

pub fn render_route_content(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Dashboard => view! { <CampaignDashboard /> }.into_any(),
        AppRoute::Campaigns => view! { <CampaignList /> }.into_any(),
        AppRoute::Templates => view! { <TemplateList /> }.into_any(),
        AppRoute::Contacts => view! { <ContactsPage /> }.into_any(),
        AppRoute::SmsSend => view! { <SmsSendForm /> }.into_any(),
        AppRoute::SmsHistory => view! { <SmsHistoryList /> }.into_any(),
    }
}
