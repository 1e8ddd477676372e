use crate::enums::{CampaignStatus, Channel};
use crate::shared::validation::{collect, FieldErrors, ValidationRules, EMAIL_PATTERN};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Aggregate
// ============================================================================

/// Campaign as returned by `GET /campaigns` and `GET /campaigns/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub channel: Channel,
    #[serde(default)]
    pub status: CampaignStatus,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub sender_email: Option<String>,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub sub_campaigns: Vec<SubCampaign>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A scheduled, rate-limited slice of a campaign bound to one template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCampaign {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default = "default_rate_limit")]
    pub rate_limit_per_minute: u32,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_rate_limit() -> u32 {
    60
}

fn default_enabled() -> bool {
    true
}

impl Default for SubCampaign {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            template_id: None,
            scheduled_at: None,
            rate_limit_per_minute: default_rate_limit(),
            enabled: default_enabled(),
        }
    }
}

// ============================================================================
// Form DTO
// ============================================================================

pub const NAME_RULES: ValidationRules = ValidationRules::required().length(3, 100);
pub const SUBJECT_RULES: ValidationRules = ValidationRules::required().max_length(200);
pub const SENDER_EMAIL_RULES: ValidationRules =
    ValidationRules::required().pattern(EMAIL_PATTERN, "Sender e-mail has an invalid format");
pub const DESCRIPTION_RULES: ValidationRules = ValidationRules::none().max_length(1000);
pub const RATE_LIMIT_RULES: ValidationRules = ValidationRules::none().range(1.0, 10_000.0);

/// Body of `POST /campaigns` and `PUT /campaigns/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub channel: Channel,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub sender_email: Option<String>,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub sub_campaigns: Vec<SubCampaign>,
}

impl From<Campaign> for CampaignDto {
    fn from(c: Campaign) -> Self {
        Self {
            id: Some(c.id),
            name: c.name,
            description: c.description,
            channel: c.channel,
            subject: c.subject,
            sender_email: c.sender_email,
            sender_name: c.sender_name,
            sub_campaigns: c.sub_campaigns,
        }
    }
}

impl CampaignDto {
    /// Field-level validation; sub-campaign errors are keyed `sub_campaigns`
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        collect(&mut errors, "name", NAME_RULES.validate_string(&self.name, "Name"));
        collect(
            &mut errors,
            "description",
            DESCRIPTION_RULES.validate_string(self.description.as_deref().unwrap_or(""), "Description"),
        );

        if self.channel == Channel::Email {
            collect(
                &mut errors,
                "subject",
                SUBJECT_RULES.validate_string(self.subject.as_deref().unwrap_or(""), "Subject"),
            );
            collect(
                &mut errors,
                "sender_email",
                SENDER_EMAIL_RULES
                    .validate_string(self.sender_email.as_deref().unwrap_or(""), "Sender e-mail"),
            );
        }

        for (idx, sub) in self.sub_campaigns.iter().enumerate() {
            let label = format!("Sub-campaign #{}", idx + 1);
            let check = ValidationRules::required()
                .validate_string(&sub.name, &format!("{} name", label))
                .and_then(|_| {
                    RATE_LIMIT_RULES.validate_number(
                        sub.rate_limit_per_minute as f64,
                        &format!("{} rate limit", label),
                    )
                });
            if let Err(e) = check {
                errors.entry("sub_campaigns").or_insert(e);
            }
        }

        errors
    }
}

// ============================================================================
// Variables
// ============================================================================

/// Variable field of a campaign (`GET /campaigns/fields/:campaignId`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignField {
    pub key: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

/// Body of `PUT /campaigns/:id/update-variables`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateVariablesRequest {
    pub variables: HashMap<String, String>,
}

impl UpdateVariablesRequest {
    /// Keeps only fields with a non-blank value
    pub fn from_fields(fields: &[CampaignField]) -> Self {
        let variables = fields
            .iter()
            .filter_map(|f| {
                let value = f.value.as_deref()?.trim();
                (!value.is_empty()).then(|| (f.key.clone(), value.to_string()))
            })
            .collect();
        Self { variables }
    }
}

/// Response of `POST /campaigns/upload-variable`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedVariable {
    pub url: String,
    #[serde(default)]
    pub key: Option<String>,
}

// ============================================================================
// Stats
// ============================================================================

/// Delivery counters of one campaign (`GET /campaigns/:id/stats`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignStats {
    #[serde(default)]
    pub campaign_id: Option<String>,
    #[serde(default)]
    pub campaign_name: Option<String>,
    #[serde(default)]
    pub sent: u64,
    #[serde(default)]
    pub delivered: u64,
    #[serde(default)]
    pub opened: u64,
    #[serde(default)]
    pub clicked: u64,
    #[serde(default)]
    pub bounced: u64,
    #[serde(default)]
    pub failed: u64,
}

impl CampaignStats {
    fn ratio(part: u64, whole: u64) -> f64 {
        if whole == 0 {
            0.0
        } else {
            part as f64 * 100.0 / whole as f64
        }
    }

    /// Delivered / sent, percent
    pub fn delivery_rate(&self) -> f64 {
        Self::ratio(self.delivered, self.sent)
    }

    /// Opened / delivered, percent
    pub fn open_rate(&self) -> f64 {
        Self::ratio(self.opened, self.delivered)
    }

    /// Clicked / opened, percent
    pub fn click_rate(&self) -> f64 {
        Self::ratio(self.clicked, self.opened)
    }

    /// Bounced / sent, percent
    pub fn bounce_rate(&self) -> f64 {
        Self::ratio(self.bounced, self.sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_email_dto() -> CampaignDto {
        CampaignDto {
            name: "Spring sale".into(),
            channel: Channel::Email,
            subject: Some("Hello ^^first_name^^".into()),
            sender_email: Some("news@example.com".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_campaign_parses_backend_shape() {
        let json = r#"{
            "_id": "65f0c1",
            "name": "Spring sale",
            "channel": "sms",
            "status": "running",
            "subCampaigns": [{ "name": "Wave 1", "rateLimitPerMinute": 120 }],
            "createdAt": "2026-03-01T10:00:00Z"
        }"#;
        let c: Campaign = serde_json::from_str(json).unwrap();
        assert_eq!(c.id, "65f0c1");
        assert_eq!(c.channel, Channel::Sms);
        assert_eq!(c.status, CampaignStatus::Running);
        assert_eq!(c.sub_campaigns[0].rate_limit_per_minute, 120);
        assert!(c.sub_campaigns[0].enabled);
    }

    #[test]
    fn test_email_campaign_requires_subject_and_sender() {
        assert!(valid_email_dto().validate().is_empty());

        let mut dto = valid_email_dto();
        dto.subject = None;
        dto.sender_email = Some("broken".into());
        let errors = dto.validate();
        assert!(errors.contains_key("subject"));
        assert!(errors.contains_key("sender_email"));
    }

    #[test]
    fn test_sms_campaign_skips_email_fields() {
        let dto = CampaignDto {
            name: "Reminders".into(),
            channel: Channel::Sms,
            ..Default::default()
        };
        assert!(dto.validate().is_empty());
    }

    #[test]
    fn test_sub_campaign_rate_limit_bounds() {
        let mut dto = valid_email_dto();
        dto.sub_campaigns.push(SubCampaign {
            name: "Wave".into(),
            rate_limit_per_minute: 0,
            ..Default::default()
        });
        assert!(dto.validate().contains_key("sub_campaigns"));
    }

    #[test]
    fn test_update_variables_skips_blank_values() {
        let fields = vec![
            CampaignField { key: "promo".into(), label: None, value: Some(" SPRING ".into()) },
            CampaignField { key: "empty".into(), label: None, value: Some("  ".into()) },
            CampaignField { key: "unset".into(), label: None, value: None },
        ];
        let req = UpdateVariablesRequest::from_fields(&fields);
        assert_eq!(req.variables.len(), 1);
        assert_eq!(req.variables["promo"], "SPRING");
    }

    #[test]
    fn test_rates_handle_zero() {
        let stats = CampaignStats { sent: 200, delivered: 150, opened: 30, ..Default::default() };
        assert_eq!(stats.delivery_rate(), 75.0);
        assert_eq!(stats.open_rate(), 20.0);
        assert_eq!(stats.click_rate(), 0.0);
        assert_eq!(CampaignStats::default().delivery_rate(), 0.0);
    }
}
