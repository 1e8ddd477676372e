//! Single-column sorting.

use super::record::{value_text, Record};
use serde_json::Value;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    Descending,
    #[default]
    None,
}

impl SortDirection {
    /// ascending → descending → none → ascending
    pub fn next(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
            SortDirection::None => SortDirection::Ascending,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
            SortDirection::None => " ⇅",
        }
    }
}

/// At most one active sort column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    column_key: Option<String>,
    direction: SortDirection,
}

impl SortState {
    pub fn column_key(&self) -> Option<&str> {
        self.column_key.as_deref()
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Direction shown on the header of `key`
    pub fn direction_of(&self, key: &str) -> SortDirection {
        if self.column_key.as_deref() == Some(key) {
            self.direction
        } else {
            SortDirection::None
        }
    }

    pub fn set(&mut self, key: &str, direction: SortDirection) {
        if direction == SortDirection::None {
            self.clear();
        } else {
            self.column_key = Some(key.to_string());
            self.direction = direction;
        }
    }

    /// Header activation: cycles on the same column, restarts on a new one
    pub fn toggle(&mut self, key: &str) {
        let next = if self.column_key.as_deref() == Some(key) {
            self.direction.next()
        } else {
            SortDirection::Ascending
        };
        self.set(key, next);
    }

    pub fn clear(&mut self) {
        self.column_key = None;
        self.direction = SortDirection::None;
    }

    pub fn is_active(&self) -> bool {
        self.column_key.is_some() && self.direction != SortDirection::None
    }
}

/// Compares two cell values in ascending order.
///
/// Numbers compare numerically, booleans false < true, everything else by
/// case-insensitive text. Missing/null values sort after present ones.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(x), Some(y)) => {
            let x = value_text(x).unwrap_or_default().to_lowercase();
            let y = value_text(y).unwrap_or_default().to_lowercase();
            x.cmp(&y)
        }
    }
}

/// Stable sort of row indices by `key`; nulls stay last in both directions
pub fn sort_indices(indices: &mut [usize], rows: &[Record], key: &str, direction: SortDirection) {
    if direction == SortDirection::None {
        return;
    }
    indices.sort_by(|&ia, &ib| {
        let a = rows[ia].get(key).filter(|v| !v.is_null());
        let b = rows[ib].get(key).filter(|v| !v.is_null());
        match (a, b) {
            (Some(_), Some(_)) => {
                let cmp = compare_values(a, b);
                if direction == SortDirection::Descending {
                    cmp.reverse()
                } else {
                    cmp
                }
            }
            _ => compare_values(a, b),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_toggle_cycles_on_same_column() {
        let mut sort = SortState::default();
        sort.toggle("name");
        assert_eq!(sort.direction_of("name"), SortDirection::Ascending);
        sort.toggle("name");
        assert_eq!(sort.direction_of("name"), SortDirection::Descending);
        sort.toggle("name");
        assert!(!sort.is_active());
        assert_eq!(sort.column_key(), None);
        sort.toggle("name");
        assert_eq!(sort.direction_of("name"), SortDirection::Ascending);
    }

    #[test]
    fn test_new_column_resets_previous() {
        let mut sort = SortState::default();
        sort.toggle("name");
        sort.toggle("name");
        sort.toggle("sent");
        assert_eq!(sort.column_key(), Some("sent"));
        assert_eq!(sort.direction(), SortDirection::Ascending);
        assert_eq!(sort.direction_of("name"), SortDirection::None);
    }

    #[test]
    fn test_numeric_and_text_ordering() {
        assert_eq!(compare_values(Some(&json!(9)), Some(&json!(10))), Ordering::Less);
        assert_eq!(compare_values(Some(&json!("b")), Some(&json!("A"))), Ordering::Greater);
        assert_eq!(compare_values(Some(&json!(null)), Some(&json!(1))), Ordering::Greater);
    }

    #[test]
    fn test_sort_indices_keeps_nulls_last() {
        let rows: Vec<Record> = vec![
            json!({"n": 2}),
            json!({"n": null}),
            json!({"n": 10}),
            json!({}),
            json!({"n": 1}),
        ]
        .into_iter()
        .map(|v| v.as_object().cloned().unwrap())
        .collect();

        let mut asc: Vec<usize> = (0..rows.len()).collect();
        sort_indices(&mut asc, &rows, "n", SortDirection::Ascending);
        assert_eq!(asc, vec![4, 0, 2, 1, 3]);

        let mut desc: Vec<usize> = (0..rows.len()).collect();
        sort_indices(&mut desc, &rows, "n", SortDirection::Descending);
        assert_eq!(desc, vec![2, 0, 4, 1, 3]);
    }
}
