use crate::domain::a002_template::api;
use contracts::domain::a002_template::aggregate::{Template, TemplateDto};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

/// "Welcome letter.docx" -> "Welcome letter"
pub fn name_from_file(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => file_name.to_string(),
    }
}

/// ViewModel for the template editor
#[derive(Clone)]
pub struct TemplateDetailsViewModel {
    pub form: RwSignal<TemplateDto>,
    pub errors: RwSignal<FieldErrors>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub converting: RwSignal<bool>,
}

impl TemplateDetailsViewModel {
    pub fn new(template: Option<Template>, campaign_id: Option<String>) -> Self {
        let dto = match template {
            Some(t) => TemplateDto::from(t),
            None => TemplateDto {
                campaign_id,
                ..TemplateDto::default()
            },
        };
        Self {
            form: RwSignal::new(dto),
            errors: RwSignal::new(FieldErrors::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            converting: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn validate(&self) -> bool {
        let errors = self.form.with(|f| f.validate());
        let ok = errors.is_empty();
        self.errors.set(errors);
        ok
    }

    /// Converted HTML replaces the content; an empty name is taken from the file
    pub fn apply_converted(&self, file_name: &str, html: String) {
        self.form.update(|f| {
            f.content = html;
            if f.name.trim().is_empty() {
                f.name = name_from_file(file_name);
            }
        });
    }

    pub fn import_docx(&self, file: File) {
        let vm = self.clone();
        self.converting.set(true);
        spawn_local(async move {
            match api::convert_docx(&file).await {
                Ok(doc) => {
                    vm.apply_converted(&file.name(), doc.html);
                    vm.error.set(None);
                }
                Err(e) => vm.error.set(Some(format!("Conversion failed: {}", e.user_message()))),
            }
            vm.converting.set(false);
        });
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
                    log::info!("template saved: {}", saved.id);
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
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_name_from_file() {
        assert_eq!(name_from_file("Welcome letter.docx"), "Welcome letter");
        assert_eq!(name_from_file("archive.tar.docx"), "archive.tar");
        assert_eq!(name_from_file("README"), "README");
        assert_eq!(name_from_file(".docx"), ".docx");
    }

    #[test]
    fn test_apply_converted_keeps_existing_name() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = TemplateDetailsViewModel::new(None, Some("c1".into()));
            assert_eq!(vm.form.get_untracked().campaign_id.as_deref(), Some("c1"));

            vm.apply_converted("Promo.docx", "<p>Hi</p>".into());
            assert_eq!(vm.form.get_untracked().name, "Promo");

            vm.form.update(|f| f.name = "Custom".into());
            vm.apply_converted("Other.docx", "<p>Bye</p>".into());
            let form = vm.form.get_untracked();
            assert_eq!(form.name, "Custom");
            assert_eq!(form.content, "<p>Bye</p>");
        });
    }
}
