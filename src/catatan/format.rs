use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};

const MONTHS_ID: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

pub const INVALID_DATE: &str = "Invalid Date";

/// Formats a stored `created-at` value for display in local time, e.g. `17 Okt 2026, 14.30`.
///
/// Besides RFC 3339, accepts a bare date (`2024-01-01`, read as UTC midnight) and a date-time
/// without offset (`2024-01-01T10:00:00`, read as local time).
pub fn format_created_at(raw: &str) -> String {
    match parse_created_at(raw.trim()) {
        Some(parsed) => format_date_id(&parsed),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_created_at(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Local));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let midnight = Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?);
        return Some(midnight.with_timezone(&Local));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
}

/// Indonesian short date with two-digit hour and minute.
pub fn format_date_id<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    format!(
        "{} {} {}, {:02}.{:02}",
        at.day(),
        MONTHS_ID[at.month0() as usize],
        at.year(),
        at.hour(),
        at.minute()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn formats_with_indonesian_months() {
        let wib = FixedOffset::east_opt(7 * 3600).unwrap();
        let at = wib.with_ymd_and_hms(2026, 10, 17, 14, 5, 0).unwrap();
        assert_eq!(format_date_id(&at), "17 Okt 2026, 14.05");

        let at = wib.with_ymd_and_hms(2025, 5, 3, 9, 30, 0).unwrap();
        assert_eq!(format_date_id(&at), "3 Mei 2025, 09.30");
    }

    #[test]
    fn garbage_renders_as_invalid_date() {
        assert_eq!(format_created_at("yesterday-ish"), INVALID_DATE);
    }

    #[test]
    fn parses_stored_timestamps() {
        let formatted = format_created_at("2026-08-17T10:00:00.000Z");
        assert_ne!(formatted, INVALID_DATE);
        assert!(formatted.contains("Agu 2026"));
    }

    #[test]
    fn accepts_date_only_and_offsetless_values() {
        let date_only = format_created_at("2024-06-15");
        assert_ne!(date_only, INVALID_DATE);
        assert!(date_only.contains("2024"));

        assert_eq!(format_created_at("2024-06-15T10:05:00"), "15 Jun 2024, 10.05");
        assert_eq!(format_created_at("2024-06-15T10:05"), "15 Jun 2024, 10.05");
        assert_eq!(format_created_at("2024-13-40"), INVALID_DATE);
    }
}
