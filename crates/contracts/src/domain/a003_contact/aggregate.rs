use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Contact row of an uploaded list (`GET /upload/contacts/:campaignId`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Extra columns; the backend stores them as a JSON string or an object
    #[serde(default)]
    pub other_fields: Option<Value>,
}

/// Outcome of reading `other_fields`
#[derive(Debug, Clone, PartialEq)]
pub enum OtherFields {
    Empty,
    Parsed(Map<String, Value>),
    /// Stored value is not a JSON object; keeps the raw text for display
    Invalid(String),
}

impl OtherFields {
    pub fn parse(raw: Option<&Value>) -> Self {
        match raw {
            None | Some(Value::Null) => OtherFields::Empty,
            Some(Value::Object(map)) => OtherFields::Parsed(map.clone()),
            Some(Value::String(s)) if s.trim().is_empty() => OtherFields::Empty,
            Some(Value::String(s)) => match serde_json::from_str::<Value>(s) {
                Ok(Value::Object(map)) => OtherFields::Parsed(map),
                Ok(Value::Null) => OtherFields::Empty,
                _ => OtherFields::Invalid(s.clone()),
            },
            Some(other) => OtherFields::Invalid(other.to_string()),
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, OtherFields::Invalid(_))
    }

    /// Fields as an object; invalid data reads as empty
    pub fn as_map(&self) -> Map<String, Value> {
        match self {
            OtherFields::Parsed(map) => map.clone(),
            OtherFields::Empty | OtherFields::Invalid(_) => Map::new(),
        }
    }
}

impl Contact {
    pub fn other_fields(&self) -> OtherFields {
        OtherFields::parse(self.other_fields.as_ref())
    }

    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Target field a file column can be mapped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    Email,
    Phone,
    FirstName,
    LastName,
    /// Column goes into `other_fields` under its header name
    Other,
    /// Column is not uploaded
    Skip,
}

impl ContactField {
    pub fn all() -> Vec<ContactField> {
        vec![
            ContactField::Email,
            ContactField::Phone,
            ContactField::FirstName,
            ContactField::LastName,
            ContactField::Other,
            ContactField::Skip,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::FirstName => "firstName",
            ContactField::LastName => "lastName",
            ContactField::Other => "other",
            ContactField::Skip => "skip",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ContactField::Email => "E-mail",
            ContactField::Phone => "Phone",
            ContactField::FirstName => "First name",
            ContactField::LastName => "Last name",
            ContactField::Other => "Extra field",
            ContactField::Skip => "Skip",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|f| f.code() == code)
    }

    /// Header aliases recognised when proposing a mapping (lower-case, no separators)
    fn aliases(&self) -> &'static [&'static str] {
        match self {
            ContactField::Email => &["email", "emailaddress", "mail"],
            ContactField::Phone => &["phone", "phonenumber", "mobile", "msisdn", "tel"],
            ContactField::FirstName => &["firstname", "name", "givenname"],
            ContactField::LastName => &["lastname", "surname", "familyname"],
            ContactField::Other | ContactField::Skip => &[],
        }
    }

    /// Proposes a target for a file header; unknown headers become extra fields
    pub fn guess(header: &str) -> Self {
        let normalized: String = header
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        [
            ContactField::Email,
            ContactField::Phone,
            ContactField::FirstName,
            ContactField::LastName,
        ]
        .into_iter()
        .find(|f| f.aliases().contains(&normalized.as_str()))
        .unwrap_or(ContactField::Other)
    }
}

/// One file column and where it goes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMapping {
    pub column: String,
    pub target: ContactField,
}

/// Multipart `mapping` part of `POST /upload/contacts/:campaignId`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactUploadMapping {
    pub columns: Vec<ColumnMapping>,
}

impl ContactUploadMapping {
    pub fn target_of(&self, column: &str) -> Option<ContactField> {
        self.columns
            .iter()
            .find(|m| m.column == column)
            .map(|m| m.target)
    }

    pub fn is_mapped(&self, field: ContactField) -> bool {
        self.columns.iter().any(|m| m.target == field)
    }
}

/// Response of the contact upload endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactUploadResult {
    #[serde(default)]
    pub inserted: usize,
    #[serde(default)]
    pub rejected: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_other_fields_from_json_string() {
        let parsed = OtherFields::parse(Some(&json!("{\"city\":\"Oslo\"}")));
        assert_eq!(parsed.as_map()["city"], "Oslo");
        assert!(!parsed.is_invalid());
    }

    #[test]
    fn test_other_fields_malformed_reads_as_empty() {
        let parsed = OtherFields::parse(Some(&json!("{city: Oslo")));
        assert!(parsed.is_invalid());
        assert!(parsed.as_map().is_empty());

        assert!(OtherFields::parse(Some(&json!("[1,2]"))).is_invalid());
        assert!(OtherFields::parse(Some(&json!(42))).is_invalid());
    }

    #[test]
    fn test_other_fields_empty_variants() {
        assert_eq!(OtherFields::parse(None), OtherFields::Empty);
        assert_eq!(OtherFields::parse(Some(&Value::Null)), OtherFields::Empty);
        assert_eq!(OtherFields::parse(Some(&json!(""))), OtherFields::Empty);
        assert_eq!(OtherFields::parse(Some(&json!("null"))), OtherFields::Empty);
    }

    #[test]
    fn test_guess_mapping() {
        assert_eq!(ContactField::guess("E-mail"), ContactField::Email);
        assert_eq!(ContactField::guess("Phone Number"), ContactField::Phone);
        assert_eq!(ContactField::guess("first_name"), ContactField::FirstName);
        assert_eq!(ContactField::guess("Surname"), ContactField::LastName);
        assert_eq!(ContactField::guess("Loyalty tier"), ContactField::Other);
    }

    #[test]
    fn test_full_name() {
        let c = Contact {
            id: "1".into(),
            email: None,
            phone: None,
            first_name: Some("Ann ".into()),
            last_name: None,
            other_fields: None,
        };
        assert_eq!(c.full_name(), "Ann");
    }
}
