use crate::shared::data_table::{ColumnDef, Record};
use contracts::domain::a003_contact::aggregate::{ColumnMapping, ContactField, ContactUploadMapping};
use contracts::shared::validation::is_valid_email;
use serde_json::Value;

/// Разобранный CSV файл: уникальные заголовки и строки той же ширины
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvData {
    pub file_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvData {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Rows keyed by header, for the preview table
    pub fn to_records(&self) -> Vec<Record> {
        self.rows
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .zip(row)
                    .map(|(h, v)| (h.clone(), Value::String(v.clone())))
                    .collect()
            })
            .collect()
    }

    pub fn preview_columns(&self) -> Vec<ColumnDef> {
        self.headers
            .iter()
            .map(|h| ColumnDef::new(h.clone(), h.clone()))
            .collect()
    }

    fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }
}

/// Blank headers become `column_N`, repeated ones get a `_2`, `_3` suffix
pub fn unique_headers(raw: &[String]) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(raw.len());
    for (idx, header) in raw.iter().enumerate() {
        let base = match header.trim() {
            "" => format!("column_{}", idx + 1),
            h => h.to_string(),
        };
        let mut name = base.clone();
        let mut n = 2;
        while result.contains(&name) {
            name = format!("{}_{}", base, n);
            n += 1;
        }
        result.push(name);
    }
    result
}

/// Case-insensitive header match; only the first column claims a contact field
pub fn propose_mapping(headers: &[String]) -> ContactUploadMapping {
    let mut columns: Vec<ColumnMapping> = Vec::with_capacity(headers.len());
    for header in headers {
        let guess = ContactField::guess(header);
        let taken = guess != ContactField::Other && columns.iter().any(|m| m.target == guess);
        columns.push(ColumnMapping {
            column: header.clone(),
            target: if taken { ContactField::Other } else { guess },
        });
    }
    ContactUploadMapping { columns }
}

/// Проверка сопоставления перед загрузкой
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingReport {
    pub has_contact_column: bool,
    pub duplicate_targets: Vec<ContactField>,
    pub invalid_emails: usize,
    pub rows_without_contact: usize,
}

impl MappingReport {
    pub fn build(data: &CsvData, mapping: &ContactUploadMapping) -> Self {
        let email_idx = column_of(data, mapping, ContactField::Email);
        let phone_idx = column_of(data, mapping, ContactField::Phone);

        let duplicate_targets = [
            ContactField::Email,
            ContactField::Phone,
            ContactField::FirstName,
            ContactField::LastName,
        ]
        .into_iter()
        .filter(|f| mapping.columns.iter().filter(|m| m.target == *f).count() > 1)
        .collect();

        let cell = |row: &Vec<String>, idx: Option<usize>| {
            idx.and_then(|i| row.get(i))
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };

        let mut invalid_emails = 0;
        let mut rows_without_contact = 0;
        for row in &data.rows {
            let email = cell(row, email_idx);
            let phone = cell(row, phone_idx);
            if !email.is_empty() && !is_valid_email(&email) {
                invalid_emails += 1;
            }
            if email.is_empty() && phone.is_empty() {
                rows_without_contact += 1;
            }
        }

        Self {
            has_contact_column: email_idx.is_some() || phone_idx.is_some(),
            duplicate_targets,
            invalid_emails,
            rows_without_contact,
        }
    }

    /// Blocking problems; warnings about individual rows are not included
    pub fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if !self.has_contact_column {
            errors.push("Map an E-mail or Phone column".to_string());
        }
        for field in &self.duplicate_targets {
            errors.push(format!("{} is mapped more than once", field.display_name()));
        }
        errors
    }

    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.invalid_emails > 0 {
            warnings.push(format!("{} rows have an invalid e-mail", self.invalid_emails));
        }
        if self.rows_without_contact > 0 {
            warnings.push(format!(
                "{} rows have neither e-mail nor phone",
                self.rows_without_contact
            ));
        }
        warnings
    }

    pub fn is_ok(&self) -> bool {
        self.errors().is_empty()
    }
}

fn column_of(data: &CsvData, mapping: &ContactUploadMapping, field: ContactField) -> Option<usize> {
    mapping
        .columns
        .iter()
        .find(|m| m.target == field)
        .and_then(|m| data.column_index(&m.column))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(headers: &[&str], rows: &[&[&str]]) -> CsvData {
        CsvData {
            file_name: "list.csv".to_string(),
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn test_unique_headers() {
        let raw = vec!["Email".to_string(), "".to_string(), "Email".to_string()];
        assert_eq!(unique_headers(&raw), vec!["Email", "column_2", "Email_2"]);
    }

    #[test]
    fn test_propose_mapping_matches_case_insensitively() {
        let headers: Vec<String> = ["E-Mail", "Phone Number", "First Name", "City", "mail"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mapping = propose_mapping(&headers);
        assert_eq!(mapping.target_of("E-Mail"), Some(ContactField::Email));
        assert_eq!(mapping.target_of("Phone Number"), Some(ContactField::Phone));
        assert_eq!(mapping.target_of("First Name"), Some(ContactField::FirstName));
        assert_eq!(mapping.target_of("City"), Some(ContactField::Other));
        // second e-mail-like column does not compete for the field
        assert_eq!(mapping.target_of("mail"), Some(ContactField::Other));
    }

    #[test]
    fn test_report_requires_contact_column() {
        let d = data(&["City"], &[&["Riga"]]);
        let report = MappingReport::build(&d, &propose_mapping(&d.headers));
        assert!(!report.has_contact_column);
        assert!(!report.is_ok());
    }

    #[test]
    fn test_report_counts_invalid_emails() {
        let d = data(
            &["email", "phone"],
            &[
                &["a@example.com", ""],
                &["broken", ""],
                &["", "+37120000000"],
                &["", ""],
            ],
        );
        let report = MappingReport::build(&d, &propose_mapping(&d.headers));
        assert!(report.is_ok());
        assert_eq!(report.invalid_emails, 1);
        assert_eq!(report.rows_without_contact, 1);
        assert_eq!(report.warnings().len(), 2);
    }

    #[test]
    fn test_duplicate_targets_block_upload() {
        let d = data(&["a", "b"], &[]);
        let mapping = ContactUploadMapping {
            columns: vec![
                ColumnMapping { column: "a".into(), target: ContactField::Phone },
                ColumnMapping { column: "b".into(), target: ContactField::Phone },
            ],
        };
        let report = MappingReport::build(&d, &mapping);
        assert_eq!(report.duplicate_targets, vec![ContactField::Phone]);
        assert!(!report.is_ok());
    }

    #[test]
    fn test_to_records() {
        let d = data(&["email", "city"], &[&["a@example.com", "Riga"]]);
        let records = d.to_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["city"], Value::String("Riga".into()));
    }
}
