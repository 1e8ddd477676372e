use crate::shared::icons::Icon;

/// Screens reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppRoute {
    #[default]
    Dashboard,
    Campaigns,
    Templates,
    Contacts,
    SmsSend,
    SmsHistory,
}

impl AppRoute {
    pub fn all() -> &'static [AppRoute] {
        &[
            AppRoute::Dashboard,
            AppRoute::Campaigns,
            AppRoute::Templates,
            AppRoute::Contacts,
            AppRoute::SmsSend,
            AppRoute::SmsHistory,
        ]
    }

    /// Key used in the `?active=` query and in storage
    pub fn key(self) -> &'static str {
        match self {
            AppRoute::Dashboard => "d400_campaign_dashboard",
            AppRoute::Campaigns => "a001_campaign",
            AppRoute::Templates => "a002_template",
            AppRoute::Contacts => "a003_contact",
            AppRoute::SmsSend => "a004_sms_send",
            AppRoute::SmsHistory => "a004_sms_history",
        }
    }

    pub fn from_key(key: &str) -> Option<AppRoute> {
        Self::all().iter().copied().find(|r| r.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            AppRoute::Dashboard => "Dashboard",
            AppRoute::Campaigns => "Campaigns",
            AppRoute::Templates => "Templates",
            AppRoute::Contacts => "Contacts",
            AppRoute::SmsSend => "Send SMS",
            AppRoute::SmsHistory => "SMS history",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            AppRoute::Dashboard => Icon::Dashboard,
            AppRoute::Campaigns => Icon::Campaigns,
            AppRoute::Templates => Icon::Templates,
            AppRoute::Contacts => Icon::Contacts,
            AppRoute::SmsSend => Icon::Send,
            AppRoute::SmsHistory => Icon::History,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique_and_resolve() {
        for route in AppRoute::all() {
            assert_eq!(AppRoute::from_key(route.key()), Some(*route));
        }
        assert_eq!(AppRoute::from_key("a002_organization"), None);
    }
}
