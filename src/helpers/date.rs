//! Date helper functions
//!
//! Article dates stay strings everywhere ordering matters; these helpers
//! only turn them into something readable.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Parse an article date string in the formats authors commonly use
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y/%m/%d %H:%M:%S",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Format an article date like "January 15, 2024", falling back to the raw
/// string when it cannot be parsed
///
/// # Examples
/// ```ignore
/// display_date("2024-01-15") // -> "January 15, 2024"
/// ```
pub fn display_date(s: &str) -> String {
    match parse_date(s) {
        Some(dt) => dt.format("%B %-d, %Y").to_string(),
        None => s.to_string(),
    }
}

/// Today's date as `YYYY-MM-DD`
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        for s in [
            "2024-01-15",
            "2024/01/15",
            "2024-01-15 10:30:00",
            "2024-01-15T10:30:00",
            "2024-01-15T10:30:00Z",
            "2024-01-15T10:30:00+05:30",
        ] {
            assert_eq!(parse_date(s).map(|d| d.date()), Some(expected), "{}", s);
        }
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2024-01-15"), "January 15, 2024");
        assert_eq!(display_date("2025-04-05T08:00:00Z"), "April 5, 2025");
        assert_eq!(display_date("last Tuesday"), "last Tuesday");
        assert_eq!(display_date(""), "");
    }

    #[test]
    fn test_today_is_sortable() {
        let today = today();
        assert_eq!(today.len(), 10);
        assert!(parse_date(&today).is_some());
    }
}
