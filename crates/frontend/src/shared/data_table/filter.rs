//! Global search and per-column filters.

use super::column::ColumnDef;
use super::record::{field_text, Record};
use serde_json::Value;
use std::collections::BTreeMap;

/// Restriction on one column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// Multi-select: the value must match one of these
    Values(Vec<String>),
    /// Free text: the value must contain this substring
    Text(String),
}

impl FilterValue {
    /// An empty filter restricts nothing
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Values(values) => values.is_empty(),
            FilterValue::Text(text) => text.trim().is_empty(),
        }
    }

    /// Selected values of a multi-select filter (empty for text filters)
    pub fn selected(&self) -> Vec<String> {
        match self {
            FilterValue::Values(values) => values.clone(),
            FilterValue::Text(_) => Vec::new(),
        }
    }
}

/// Active column filters keyed by `accessor_key`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    filters: BTreeMap<String, FilterValue>,
}

impl FilterState {
    /// Sets the filter of `key`; an empty filter removes it
    pub fn set(&mut self, key: &str, value: FilterValue) {
        if value.is_empty() {
            self.filters.remove(key);
        } else {
            self.filters.insert(key.to_string(), value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.filters.get(key)
    }

    pub fn clear(&mut self) {
        self.filters.clear();
    }

    pub fn active_count(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FilterValue)> {
        self.filters.iter()
    }
}

/// Does `record` pass the filter set on column `key`?
///
/// The cell value is stringified and lower-cased. `exact` (cycle filters)
/// requires equality, otherwise a selected value only has to be contained.
pub fn column_matches(record: &Record, key: &str, filter: &FilterValue, exact: bool) -> bool {
    if filter.is_empty() {
        return true;
    }
    let Some(cell) = field_text(record, key).map(|t| t.to_lowercase()) else {
        return false;
    };
    match filter {
        FilterValue::Values(values) => values.iter().any(|v| {
            let v = v.to_lowercase();
            if exact {
                cell == v
            } else {
                cell.contains(&v)
            }
        }),
        FilterValue::Text(text) => cell.contains(&text.trim().to_lowercase()),
    }
}

/// Global search: some bound column holds a string containing `term`
/// (case-insensitive). A blank term matches everything.
pub fn search_matches(record: &Record, columns: &[ColumnDef], term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    columns
        .iter()
        .filter_map(ColumnDef::key)
        .any(|key| match record.get(key) {
            Some(Value::String(s)) => s.to_lowercase().contains(&term),
            _ => false,
        })
}

/// Search AND every active column filter
pub fn row_matches(
    record: &Record,
    columns: &[ColumnDef],
    term: &str,
    filters: &FilterState,
) -> bool {
    search_matches(record, columns, term)
        && filters.iter().all(|(key, filter)| {
            let exact = columns
                .iter()
                .find(|c| c.key() == Some(key.as_str()))
                .map(|c| c.cycle_filter)
                .unwrap_or(false);
            column_matches(record, key, filter, exact)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rec(v: Value) -> Record {
        v.as_object().cloned().unwrap()
    }

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("Name", "name"),
            ColumnDef::new("Status", "status").cycle_filter(),
            ColumnDef::new("Sent", "sent"),
            ColumnDef::display("Actions"),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive_over_strings() {
        let r = rec(json!({"name": "Spring Sale", "status": "draft", "sent": 42}));
        assert!(search_matches(&r, &columns(), "SPRING"));
        assert!(search_matches(&r, &columns(), "raf"));
        assert!(search_matches(&r, &columns(), "   "));
        // numbers are not string-typed
        assert!(!search_matches(&r, &columns(), "42"));
    }

    #[test]
    fn test_search_ignores_unbound_fields() {
        let r = rec(json!({"name": "A", "secret": "needle"}));
        assert!(!search_matches(&r, &columns(), "needle"));
    }

    #[test]
    fn test_values_filter_substring_vs_exact() {
        let r = rec(json!({"name": "Spring Sale", "status": "completed"}));
        let substring = FilterValue::Values(vec!["sale".into()]);
        assert!(column_matches(&r, "name", &substring, false));
        let partial = FilterValue::Values(vec!["complete".into()]);
        assert!(column_matches(&r, "status", &partial, false));
        assert!(!column_matches(&r, "status", &partial, true));
        assert!(column_matches(&r, "status", &FilterValue::Values(vec!["Completed".into()]), true));
    }

    #[test]
    fn test_null_never_matches_active_filter() {
        let r = rec(json!({"name": null}));
        assert!(!column_matches(&r, "name", &FilterValue::Text("a".into()), false));
        assert!(column_matches(&r, "name", &FilterValue::Values(vec![]), false));
    }

    #[test]
    fn test_row_matches_is_conjunction() {
        let cols = columns();
        let rows = vec![
            rec(json!({"name": "Spring Sale", "status": "draft"})),
            rec(json!({"name": "Spring Promo", "status": "running"})),
            rec(json!({"name": "Autumn Sale", "status": "draft"})),
        ];
        let mut filters = FilterState::default();
        filters.set("status", FilterValue::Values(vec!["draft".into()]));

        let expected: Vec<bool> = rows
            .iter()
            .map(|r| {
                search_matches(r, &cols, "spring")
                    && filters
                        .iter()
                        .all(|(k, f)| column_matches(r, k, f, k == "status"))
            })
            .collect();
        let actual: Vec<bool> = rows
            .iter()
            .map(|r| row_matches(r, &cols, "spring", &filters))
            .collect();
        assert_eq!(actual, expected);
        assert_eq!(actual, vec![true, false, false]);
    }

    #[test]
    fn test_empty_filter_is_removed() {
        let mut filters = FilterState::default();
        filters.set("status", FilterValue::Values(vec!["draft".into()]));
        assert_eq!(filters.active_count(), 1);
        filters.set("status", FilterValue::Values(vec![]));
        assert!(filters.is_empty());
    }
}
