use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::validation::{collect, FieldErrors, ValidationRules};

/// Longest message the SMS gateway accepts (10 concatenated segments)
pub const MAX_MESSAGE_LEN: usize = 1600;

pub const CAMPAIGN_NAME_RULES: ValidationRules = ValidationRules::required().length(3, 100);
pub const MESSAGE_RULES: ValidationRules = ValidationRules::required().max_length(MAX_MESSAGE_LEN);

/// Row of `GET /sms/data`: one recipients file sent as an SMS campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsUpload {
    #[serde(alias = "_id", alias = "uploadId")]
    pub id: String,
    #[serde(default)]
    pub campaign_name: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub sent: u64,
    #[serde(default)]
    pub failed: u64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Text fields of the multipart `POST /sms/send-sms` form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSmsForm {
    pub campaign_name: String,
    pub message: String,
}

impl SendSmsForm {
    pub fn validate(&self, has_file: bool) -> FieldErrors {
        let mut errors = FieldErrors::new();
        collect(
            &mut errors,
            "campaign_name",
            CAMPAIGN_NAME_RULES.validate_string(&self.campaign_name, "Campaign name"),
        );
        collect(&mut errors, "message", MESSAGE_RULES.validate_string(&self.message, "Message"));
        if !has_file {
            errors.insert("file", "Recipients file is required".to_string());
        }
        errors
    }

    /// Number of SMS segments the message occupies (160 chars single, 153 per part otherwise)
    pub fn segments(&self) -> usize {
        let len = self.message.chars().count();
        match len {
            0 => 0,
            1..=160 => 1,
            _ => len.div_ceil(153),
        }
    }
}

/// Response of `POST /sms/send-sms`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSmsResult {
    #[serde(default, alias = "_id")]
    pub upload_id: Option<String>,
    #[serde(default)]
    pub queued: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments() {
        let mut form = SendSmsForm::default();
        assert_eq!(form.segments(), 0);
        form.message = "a".repeat(160);
        assert_eq!(form.segments(), 1);
        form.message = "a".repeat(161);
        assert_eq!(form.segments(), 2);
        form.message = "a".repeat(306);
        assert_eq!(form.segments(), 2);
        form.message = "a".repeat(307);
        assert_eq!(form.segments(), 3);
    }

    #[test]
    fn test_validate_requires_file_and_message() {
        let form = SendSmsForm {
            campaign_name: "Promo".into(),
            message: String::new(),
        };
        let errors = form.validate(false);
        assert!(errors.contains_key("message"));
        assert!(errors.contains_key("file"));
        assert!(!errors.contains_key("campaign_name"));
    }

    #[test]
    fn test_upload_accepts_upload_id_alias() {
        let json = r#"{"uploadId":"u-9","campaignName":"Promo","fileName":"list.csv","total":3}"#;
        let upload: SmsUpload = serde_json::from_str(json).unwrap();
        assert_eq!(upload.id, "u-9");
        assert_eq!(upload.total, 3);
    }
}
