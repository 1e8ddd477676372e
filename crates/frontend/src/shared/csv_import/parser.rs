use super::types::{unique_headers, CsvData};
use wasm_bindgen_futures::JsFuture;

const BOM: char = '\u{feff}';

/// Picks `,`, `;` or tab by counting them in the header line outside quotes
pub fn detect_delimiter(text: &str) -> u8 {
    let first_line = text.lines().next().unwrap_or_default();
    let mut counts = [(b',', 0usize), (b';', 0), (b'\t', 0)];
    let mut in_quotes = false;
    for ch in first_line.bytes() {
        if ch == b'"' {
            in_quotes = !in_quotes;
            continue;
        }
        if in_quotes {
            continue;
        }
        if let Some(entry) = counts.iter_mut().find(|(d, _)| *d == ch) {
            entry.1 += 1;
        }
    }
    counts
        .iter()
        .max_by_key(|(_, n)| *n)
        .filter(|(_, n)| *n > 0)
        .map(|(d, _)| *d)
        .unwrap_or(b',')
}

/// Парсит CSV с обязательной строкой заголовков
pub fn parse_csv(text: &str, file_name: &str) -> Result<CsvData, String> {
    let text = text.trim_start_matches(BOM);
    if text.trim().is_empty() {
        return Err("File is empty".to_string());
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(detect_delimiter(text))
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let raw_headers: Vec<String> = reader
        .headers()
        .map_err(|e| format!("Cannot read header row: {}", e))?
        .iter()
        .map(str::to_string)
        .collect();
    if raw_headers.iter().all(|h| h.trim().is_empty()) {
        return Err("Header row is missing".to_string());
    }
    let headers = unique_headers(&raw_headers);

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|e| format!("Row {}: {}", idx + 2, e))?;
        if record.iter().all(|c| c.is_empty()) {
            continue;
        }
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    Ok(CsvData {
        file_name: file_name.to_string(),
        headers,
        rows,
    })
}

/// Reads a picked file and parses it
pub async fn read_csv_file(file: &web_sys::File) -> Result<CsvData, String> {
    let array_buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;
    let bytes = js_sys::Uint8Array::new(&array_buffer).to_vec();
    let text = String::from_utf8_lossy(&bytes);
    let data = parse_csv(&text, &file.name())?;
    log::debug!(
        "parsed {}: {} columns, {} rows",
        data.file_name,
        data.headers.len(),
        data.row_count()
    );
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter("email,phone\n"), b',');
        assert_eq!(detect_delimiter("email;phone;\"a,b\"\n"), b';');
        assert_eq!(detect_delimiter("email\tphone"), b'\t');
        assert_eq!(detect_delimiter("email"), b',');
    }

    #[test]
    fn test_parse_csv_pads_and_skips_blank_rows() {
        let text = "\u{feff}Email;First name\na@example.com;Ann\n;\nb@example.com\n";
        let data = parse_csv(text, "list.csv").unwrap();
        assert_eq!(data.headers, vec!["Email", "First name"]);
        assert_eq!(data.row_count(), 2);
        assert_eq!(data.rows[1], vec!["b@example.com".to_string(), String::new()]);
    }

    #[test]
    fn test_parse_csv_quoted_cells() {
        let text = "email,note\na@example.com,\"Hello, world\"\n";
        let data = parse_csv(text, "list.csv").unwrap();
        assert_eq!(data.rows[0][1], "Hello, world");
    }

    #[test]
    fn test_parse_csv_empty() {
        assert!(parse_csv("", "x.csv").is_err());
        assert!(parse_csv("\u{feff}  \n", "x.csv").is_err());
    }
}
