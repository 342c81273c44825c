use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Timezone used to turn upstream instants into calendar dates.
/// Issue dates are Indian exchange dates, so instants are read in IST.
pub const DISPLAY_TZ: Tz = chrono_tz::Asia::Kolkata;

/// Parses the date forms the upstream sends: RFC 3339 instants
/// ("2025-01-14T18:30:00.000Z"), naive timestamps and plain "YYYY-MM-DD".
///
/// Instants are converted to [`DISPLAY_TZ`] before the date is taken, so an IST
/// midnight stored as UTC lands on the intended day.
pub fn parse_flexible_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.with_timezone(&DISPLAY_TZ).date_naive());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.date());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Long en-IN date: "15 January 2025".
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Short en-IN date for tables: "15 Jan 2025".
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

/// Formats an upstream date string, or returns `placeholder` when the value is
/// missing, empty or unparseable.
pub fn to_local_date(value: Option<&str>, placeholder: &str) -> String {
    value
        .and_then(parse_flexible_date)
        .map(format_long_date)
        .unwrap_or_else(|| placeholder.to_string())
}

/// Same as [`format_short_date`] for optional dates.
pub fn short_date_or(date: Option<NaiveDate>, placeholder: &str) -> String {
    date.map(format_short_date)
        .unwrap_or_else(|| placeholder.to_string())
}

/// Today's calendar date in [`DISPLAY_TZ`].
pub fn today_in_display_tz() -> NaiveDate {
    Utc::now().with_timezone(&DISPLAY_TZ).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_rfc3339_in_ist() {
        assert_eq!(
            parse_flexible_date("2025-01-14T18:30:00.000Z"),
            Some(date(2025, 1, 15))
        );
        assert_eq!(
            parse_flexible_date("2025-01-15T00:00:00Z"),
            Some(date(2025, 1, 15))
        );
        assert_eq!(
            parse_flexible_date("2025-01-15T10:00:00+05:30"),
            Some(date(2025, 1, 15))
        );
    }

    #[test]
    fn test_parse_naive_forms() {
        assert_eq!(parse_flexible_date("2025-01-15"), Some(date(2025, 1, 15)));
        assert_eq!(
            parse_flexible_date("2025-01-15T09:15:00"),
            Some(date(2025, 1, 15))
        );
        assert_eq!(
            parse_flexible_date("2025-01-15T09:15:00.250"),
            Some(date(2025, 1, 15))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_flexible_date(""), None);
        assert_eq!(parse_flexible_date("next week"), None);
        assert_eq!(parse_flexible_date("2025-02-30"), None);
    }

    #[test]
    fn test_to_local_date() {
        assert_eq!(
            to_local_date(Some("2025-01-15T00:00:00.000Z"), "TBA"),
            "15 January 2025"
        );
        assert_eq!(to_local_date(Some("2025-03-03"), "-"), "3 March 2025");
        assert_eq!(to_local_date(None, "TBA"), "TBA");
        assert_eq!(to_local_date(Some("soon"), "-"), "-");
        assert_eq!(to_local_date(Some(""), "TBA"), "TBA");
    }

    #[test]
    fn test_short_dates() {
        assert_eq!(format_short_date(date(2025, 1, 5)), "5 Jan 2025");
        assert_eq!(short_date_or(None, "TBA"), "TBA");
    }
}
