/// Utilities for date and time formatting
///
/// Timestamps travel as RFC 3339 in UTC and are shown as DD.MM.YYYY HH:MM
use chrono::{DateTime, NaiveDateTime, Utc};

const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Example: 2024-03-15T14:02:26Z -> "15.03.2024 14:02"
pub fn format_datetime(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%d.%m.%Y %H:%M").to_string())
        .unwrap_or_default()
}

/// Example: 2024-03-15T14:02:26Z -> "15.03.2024"
pub fn format_date(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%d.%m.%Y").to_string())
        .unwrap_or_default()
}

/// Value for `<input type="datetime-local">`
pub fn to_input_value(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format(INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

/// Accepts RFC 3339 or the `datetime-local` shape (read as UTC); blank means "not set"
pub fn parse_input_value(raw: &str) -> Result<Option<DateTime<Utc>>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }
    NaiveDateTime::parse_from_str(raw, INPUT_FORMAT)
        .map(|naive| Some(naive.and_utc()))
        .map_err(|_| format!("Invalid date-time: {}", raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap()
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime(Some(sample())), "15.03.2024 14:02");
        assert_eq!(format_date(Some(sample())), "15.03.2024");
        assert_eq!(format_datetime(None), "");
    }

    #[test]
    fn test_input_value_round_trip() {
        assert_eq!(to_input_value(Some(sample())), "2024-03-15T14:02");
        assert_eq!(
            parse_input_value("2024-03-15T14:02"),
            Ok(Some(Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 0).unwrap()))
        );
    }

    #[test]
    fn test_parse_rfc3339_and_blank() {
        assert_eq!(
            parse_input_value("2024-03-15T16:02:26+02:00"),
            Ok(Some(sample()))
        );
        assert_eq!(parse_input_value("  "), Ok(None));
        assert!(parse_input_value("15.03.2024").is_err());
    }
}
