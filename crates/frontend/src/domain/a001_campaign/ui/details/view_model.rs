use crate::domain::a001_campaign::api;
use crate::domain::a002_template::api::fetch_templates;
use crate::shared::date_utils::parse_input_value;
use contracts::domain::a001_campaign::aggregate::{CampaignDto, SubCampaign};
use contracts::domain::a002_template::aggregate::Template;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the campaign editor
#[derive(Clone)]
pub struct CampaignDetailsViewModel {
    pub form: RwSignal<CampaignDto>,
    pub errors: RwSignal<FieldErrors>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub templates: RwSignal<Vec<Template>>,
}

impl CampaignDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CampaignDto::default()),
            errors: RwSignal::new(FieldErrors::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            templates: RwSignal::new(Vec::new()),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    /// Loads the campaign when editing and the templates sub-campaigns can use
    pub fn load_if_needed(&self, id: Option<String>) {
        let form = self.form;
        let error = self.error;
        let templates = self.templates;
        spawn_local(async move {
            if let Some(existing_id) = id.as_deref() {
                match api::fetch_by_id(existing_id).await {
                    Ok(campaign) => {
                        form.set(campaign.into());
                    }
                    Err(e) => {
                        error.set(Some(format!("Failed to load campaign: {}", e.user_message())));
                        return;
                    }
                }
            }
            // шаблоны кампании; для новой кампании берём все
            match fetch_templates(id.as_deref()).await {
                Ok(list) => templates.set(list),
                Err(e) => log::warn!("templates not loaded: {}", e.detail()),
            }
        });
    }

    pub fn add_sub_campaign(&self) {
        self.form.update(|f| {
            let n = f.sub_campaigns.len() + 1;
            f.sub_campaigns.push(SubCampaign {
                name: format!("Wave {}", n),
                ..SubCampaign::default()
            });
        });
    }

    pub fn remove_sub_campaign(&self, index: usize) {
        self.form.update(|f| {
            if index < f.sub_campaigns.len() {
                f.sub_campaigns.remove(index);
            }
        });
    }

    pub fn update_sub_campaign(&self, index: usize, apply: impl FnOnce(&mut SubCampaign)) {
        self.form.update(|f| {
            if let Some(sub) = f.sub_campaigns.get_mut(index) {
                apply(sub);
            }
        });
    }

    /// Blank clears the schedule; unparsable input is reported and leaves the value as it was
    pub fn set_schedule(&self, index: usize, raw: &str) {
        match parse_input_value(raw) {
            Ok(value) => {
                self.update_sub_campaign(index, |s| s.scheduled_at = value);
                self.errors.update(|e| {
                    e.remove("sub_campaigns");
                });
            }
            Err(msg) => self.errors.update(|e| {
                e.insert("sub_campaigns", msg);
            }),
        }
    }

    /// Runs the validators; returns true when the form can be submitted
    pub fn validate(&self) -> bool {
        let errors = self.form.with(|f| f.validate());
        let ok = errors.is_empty();
        self.errors.set(errors);
        ok
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        if !self.validate() || self.saving.get_untracked() {
            return;
        }
        let current = self.form.get_untracked();
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        spawn_local(async move {
            match api::save_form(&current).await {
                Ok(saved) => {
                    log::info!("campaign saved: {}", saved.id);
                    error.set(None);
                    on_saved.run(());
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            saving.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::Channel;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_sub_campaign_editing() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = CampaignDetailsViewModel::new();
            vm.add_sub_campaign();
            vm.add_sub_campaign();
            assert_eq!(vm.form.get_untracked().sub_campaigns.len(), 2);
            assert_eq!(vm.form.get_untracked().sub_campaigns[1].name, "Wave 2");

            vm.update_sub_campaign(0, |s| s.rate_limit_per_minute = 120);
            vm.remove_sub_campaign(1);
            vm.remove_sub_campaign(5);
            let subs = vm.form.get_untracked().sub_campaigns;
            assert_eq!(subs.len(), 1);
            assert_eq!(subs[0].rate_limit_per_minute, 120);
        });
    }

    #[test]
    fn test_schedule_input() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = CampaignDetailsViewModel::new();
            vm.add_sub_campaign();
            vm.set_schedule(0, "2024-03-15T14:02");
            assert!(vm.form.get_untracked().sub_campaigns[0].scheduled_at.is_some());

            vm.set_schedule(0, "tomorrow");
            assert!(vm.errors.get_untracked().contains_key("sub_campaigns"));
            assert!(vm.form.get_untracked().sub_campaigns[0].scheduled_at.is_some());

            vm.set_schedule(0, "");
            assert!(vm.form.get_untracked().sub_campaigns[0].scheduled_at.is_none());
            assert!(vm.errors.get_untracked().is_empty());
        });
    }

    #[test]
    fn test_validate_blocks_invalid_form() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = CampaignDetailsViewModel::new();
            assert!(!vm.validate());
            assert!(vm.errors.get_untracked().contains_key("name"));

            vm.form.set(CampaignDto {
                name: "Spring sale".into(),
                channel: Channel::Sms,
                ..CampaignDto::default()
            });
            assert!(vm.validate());
            assert!(vm.errors.get_untracked().is_empty());
        });
    }
}
