//! Client-side field validation used by the editor forms before submission

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Loose e-mail shape check: something@something.tld, no whitespace
pub const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("e-mail pattern is valid"));

/// Same check as [`EMAIL_PATTERN`] without compiling per call
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

/// Validation errors keyed by field name
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Validation rules for a single form field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<&'static str>,
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// No constraints
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            pattern: None,
            custom_error: None,
        }
    }

    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn length(mut self, min: usize, max: usize) -> Self {
        self.min_length = Some(min);
        self.max_length = Some(max);
        self
    }

    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub const fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub const fn pattern(mut self, pattern: &'static str, error: &'static str) -> Self {
        self.pattern = Some(pattern);
        self.custom_error = Some(error);
        self
    }

    /// Validates a string value. Empty optional values skip the remaining checks.
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            if self.required {
                return Err(format!("{} is required", field_label));
            }
            return Ok(());
        }

        let len = trimmed.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!("{} must be at least {} characters", field_label, min));
            }
        }
        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!("{} must not exceed {} characters", field_label, max));
            }
        }

        if let Some(pattern) = self.pattern {
            // An invalid pattern is a programming error in the rule table; treat it as a mismatch.
            let matches = Regex::new(pattern)
                .map(|re| re.is_match(trimmed))
                .unwrap_or(false);
            if !matches {
                return Err(self
                    .custom_error
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{} has an invalid format", field_label)));
            }
        }

        Ok(())
    }

    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} must be at least {}", field_label, min));
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} must not exceed {}", field_label, max));
            }
        }
        Ok(())
    }
}

/// Runs `check` and records its error under `field`
pub fn collect(errors: &mut FieldErrors, field: &'static str, check: Result<(), String>) {
    if let Err(message) = check {
        errors.insert(field, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let rules = ValidationRules::required();
        assert!(rules.validate_string("  ", "Name").is_err());
        assert!(rules.validate_string("x", "Name").is_ok());
        assert!(ValidationRules::none().validate_string("", "Name").is_ok());
    }

    #[test]
    fn test_length_counts_chars() {
        let rules = ValidationRules::required().length(3, 5);
        assert!(rules.validate_string("ab", "Name").is_err());
        assert!(rules.validate_string("абв", "Name").is_ok());
        assert!(rules.validate_string("abcdef", "Name").is_err());
    }

    #[test]
    fn test_email_pattern() {
        let rules = ValidationRules::required().pattern(EMAIL_PATTERN, "Invalid e-mail");
        assert!(rules.validate_string("news@example.com", "Sender").is_ok());
        assert_eq!(
            rules.validate_string("news@example", "Sender"),
            Err("Invalid e-mail".to_string())
        );
        assert!(rules.validate_string("a b@example.com", "Sender").is_err());
        assert!(is_valid_email(" news@example.com "));
        assert!(!is_valid_email("news@"));
    }

    #[test]
    fn test_number_range() {
        let rules = ValidationRules::none().range(1.0, 10_000.0);
        assert!(rules.validate_number(0.0, "Rate").is_err());
        assert!(rules.validate_number(600.0, "Rate").is_ok());
        assert!(rules.validate_number(10_001.0, "Rate").is_err());
    }
}
