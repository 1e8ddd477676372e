use crate::shared::template_vars;
use crate::shared::validation::{collect, FieldErrors, ValidationRules};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// HTML e-mail template with `^^identifier^^` markers in `content`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub campaign_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Template {
    /// Markers referenced by subject and body, in order of first appearance
    pub fn markers(&self) -> Vec<String> {
        let mut keys = template_vars::extract_markers(self.subject.as_deref().unwrap_or(""));
        for key in template_vars::extract_markers(&self.content) {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }

    /// Subject and content with markers substituted
    pub fn render(&self, values: &HashMap<String, String>) -> RenderedTemplate {
        RenderedTemplate {
            subject: template_vars::substitute(self.subject.as_deref().unwrap_or(""), values),
            content: template_vars::substitute(&self.content, values),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTemplate {
    pub subject: String,
    pub content: String,
}

pub const NAME_RULES: ValidationRules = ValidationRules::required().length(2, 100);
pub const SUBJECT_RULES: ValidationRules = ValidationRules::none().max_length(200);
pub const CONTENT_RULES: ValidationRules = ValidationRules::required();

/// Body of `POST /templates` and `PUT /templates/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub content: String,
    #[serde(default)]
    pub campaign_id: Option<String>,
}

impl From<Template> for TemplateDto {
    fn from(t: Template) -> Self {
        Self {
            id: Some(t.id),
            name: t.name,
            subject: t.subject,
            content: t.content,
            campaign_id: t.campaign_id,
        }
    }
}

impl TemplateDto {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        collect(&mut errors, "name", NAME_RULES.validate_string(&self.name, "Name"));
        collect(
            &mut errors,
            "subject",
            SUBJECT_RULES.validate_string(self.subject.as_deref().unwrap_or(""), "Subject"),
        );
        collect(&mut errors, "content", CONTENT_RULES.validate_string(&self.content, "Content"));
        errors
    }
}

/// Response of `POST /converter/docsToHtml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertedDocument {
    pub html: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> Template {
        Template {
            id: "t1".into(),
            name: "Welcome".into(),
            subject: Some("Hi ^^first_name^^".into()),
            content: "<p>^^first_name^^, use ^^promo^^</p>".into(),
            campaign_id: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_markers_merge_subject_and_content() {
        assert_eq!(template().markers(), vec!["first_name", "promo"]);
    }

    #[test]
    fn test_render_leaves_unknown_markers() {
        let values = HashMap::from([("first_name".to_string(), "Ann".to_string())]);
        let rendered = template().render(&values);
        assert_eq!(rendered.subject, "Hi Ann");
        assert_eq!(rendered.content, "<p>Ann, use ^^promo^^</p>");
    }

    #[test]
    fn test_dto_validation() {
        let dto = TemplateDto {
            name: "W".into(),
            content: String::new(),
            ..Default::default()
        };
        let errors = dto.validate();
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("content"));
        assert!(!errors.contains_key("subject"));
    }
}
