//! Number and date formatting for display

use chrono::{DateTime, NaiveDateTime, Utc};

/// Group digits the way `ko-KR` does: `1234567` -> `1,234,567`
pub fn format_number(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// `YYYY-MM-DD HH:MM`
pub fn format_datetime(at: &NaiveDateTime) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

/// Parse a backend timestamp (with or without offset) and format it
pub fn format_timestamp(raw: &str) -> Option<String> {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|at| at.naive_local())
        .or_else(|_| raw.parse::<NaiveDateTime>())
        .ok()?;
    Some(format_datetime(&parsed))
}

/// Coarse "time ago" label
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);

    if elapsed.num_days() > 0 {
        format!("{}일 전", elapsed.num_days())
    } else if elapsed.num_hours() > 0 {
        format!("{}시간 전", elapsed.num_hours())
    } else if elapsed.num_minutes() > 0 {
        format!("{}분 전", elapsed.num_minutes())
    } else {
        "방금 전".to_string()
    }
}

/// [`relative_time`] against the current clock
pub fn relative_to_now(then: DateTime<Utc>) -> String {
    relative_time(then, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(1_234_567), "1,234,567");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(-45_000), "-45,000");
        assert_eq!(format_number(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn formats_backend_timestamps() {
        assert_eq!(
            format_timestamp("2024-03-05T07:08:09").as_deref(),
            Some("2024-03-05 07:08")
        );
        assert_eq!(
            format_timestamp("2024-03-05T07:08:09.123+09:00").as_deref(),
            Some("2024-03-05 07:08")
        );
        assert_eq!(format_timestamp("yesterday"), None);
    }

    #[test]
    fn relative_labels() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(relative_time(now - Duration::seconds(30), now), "방금 전");
        assert_eq!(relative_time(now - Duration::minutes(5), now), "5분 전");
        assert_eq!(relative_time(now - Duration::hours(3), now), "3시간 전");
        assert_eq!(relative_time(now - Duration::days(2), now), "2일 전");
        // future timestamps never show negative ages
        assert_eq!(relative_time(now + Duration::hours(1), now), "방금 전");
    }
}
