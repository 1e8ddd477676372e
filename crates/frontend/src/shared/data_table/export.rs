//! Serialization of the visible row set for clipboard, CSV and spreadsheet export.
//!
//! Only bound columns are exported; values come from the raw field, not the
//! rendered cell.

use super::column::ColumnDef;
use super::record::{field_text, Record};

/// How CSV cells containing separators are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CsvDialect {
    /// Commas inside values become `;`, line breaks become spaces, no quoting
    #[default]
    Legacy,
    /// RFC 4180 quoting through the `csv` writer
    Quoted,
}

/// Header row plus data rows, already stringified
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    /// Projects `rows` onto the bound columns of `columns`
    pub fn build<'a>(columns: &[ColumnDef], rows: impl IntoIterator<Item = &'a Record>) -> Self {
        let bound: Vec<(&str, &str)> = columns
            .iter()
            .filter_map(|c| c.key().map(|k| (c.header.as_str(), k)))
            .collect();

        Self {
            headers: bound.iter().map(|(h, _)| h.to_string()).collect(),
            rows: rows
                .into_iter()
                .map(|record| {
                    bound
                        .iter()
                        .map(|(_, key)| field_text(record, key).unwrap_or_default())
                        .collect()
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Tab-separated text; tabs and line breaks inside cells are flattened
    pub fn to_clipboard_text(&self) -> String {
        let line = |cells: &[String]| {
            cells
                .iter()
                .map(|c| flatten(c, ' '))
                .collect::<Vec<_>>()
                .join("\t")
        };
        let mut out = line(&self.headers);
        for row in &self.rows {
            out.push('\n');
            out.push_str(&line(row));
        }
        out
    }

    pub fn to_csv(&self, dialect: CsvDialect) -> Result<String, String> {
        match dialect {
            CsvDialect::Legacy => {
                let line = |cells: &[String]| {
                    cells
                        .iter()
                        .map(|c| flatten(&c.replace(',', ";"), ' '))
                        .collect::<Vec<_>>()
                        .join(",")
                };
                let mut out = line(&self.headers);
                for row in &self.rows {
                    out.push('\n');
                    out.push_str(&line(row));
                }
                Ok(out)
            }
            CsvDialect::Quoted => {
                let mut writer = csv::WriterBuilder::new()
                    .terminator(csv::Terminator::Any(b'\n'))
                    .from_writer(Vec::new());
                writer
                    .write_record(&self.headers)
                    .map_err(|e| format!("CSV write error: {}", e))?;
                for row in &self.rows {
                    writer
                        .write_record(row)
                        .map_err(|e| format!("CSV write error: {}", e))?;
                }
                let bytes = writer
                    .into_inner()
                    .map_err(|e| format!("CSV flush error: {}", e))?;
                let text = String::from_utf8(bytes).map_err(|e| format!("CSV encoding: {}", e))?;
                Ok(text.trim_end_matches('\n').to_string())
            }
        }
    }

    /// Excel-friendly CSV: UTF-8 BOM, `;` delimiter, quoted cells where needed
    pub fn to_spreadsheet(&self) -> String {
        let mut content = String::from('\u{FEFF}');
        content.push_str(
            &self
                .headers
                .iter()
                .map(|h| escape_csv_cell(h))
                .collect::<Vec<_>>()
                .join(";"),
        );
        content.push('\n');
        for row in &self.rows {
            let escaped: Vec<String> = row.iter().map(|c| escape_csv_cell(c)).collect();
            content.push_str(&escaped.join(";"));
            content.push('\n');
        }
        content
    }
}

fn flatten(cell: &str, with: char) -> String {
    cell.chars()
        .map(|ch| match ch {
            '\t' | '\n' | '\r' => with,
            other => other,
        })
        .collect()
}

/// Экранирует ячейку, если она содержит `;`, кавычки или перевод строки
pub fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> (Vec<ColumnDef>, Vec<Record>) {
        let columns = vec![
            ColumnDef::new("Name", "name"),
            ColumnDef::new("Sent", "sent"),
            ColumnDef::display("Actions"),
        ];
        let rows = vec![
            json!({"name": "Sale, spring", "sent": 10}),
            json!({"name": "Line\nbreak", "sent": null}),
        ]
        .into_iter()
        .map(|v| v.as_object().cloned().unwrap())
        .collect();
        (columns, rows)
    }

    #[test]
    fn test_only_bound_columns_exported() {
        let (columns, rows) = sample();
        let table = ExportTable::build(&columns, &rows);
        assert_eq!(table.headers, vec!["Name", "Sent"]);
        assert_eq!(table.rows[1], vec!["Line\nbreak".to_string(), String::new()]);
    }

    #[test]
    fn test_clipboard_is_tsv() {
        let (columns, rows) = sample();
        let text = ExportTable::build(&columns, &rows).to_clipboard_text();
        assert_eq!(text, "Name\tSent\nSale, spring\t10\nLine break\t");
    }

    #[test]
    fn test_legacy_csv_replaces_commas() {
        let (columns, rows) = sample();
        let csv = ExportTable::build(&columns, &rows)
            .to_csv(CsvDialect::Legacy)
            .unwrap();
        assert_eq!(csv, "Name,Sent\nSale; spring,10\nLine break,");
    }

    #[test]
    fn test_quoted_csv_keeps_commas() {
        let (columns, rows) = sample();
        let csv = ExportTable::build(&columns, &rows)
            .to_csv(CsvDialect::Quoted)
            .unwrap();
        assert_eq!(csv, "Name,Sent\n\"Sale, spring\",10\n\"Line\nbreak\",");
    }

    #[test]
    fn test_spreadsheet_has_bom_and_semicolons() {
        let (columns, rows) = sample();
        let content = ExportTable::build(&columns, &rows).to_spreadsheet();
        assert!(content.starts_with('\u{FEFF}'));
        assert!(content.contains("Name;Sent\n"));
        assert!(content.contains("\"Line\nbreak\";\n"));
    }

    #[test]
    fn test_escape_csv_cell() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("a;b"), "\"a;b\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
