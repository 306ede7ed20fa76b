use chrono::{DateTime, Duration as ChronoDuration, Utc};

/// Round length as shown on a scorecard: `"2h 5m"`, or `"45m"` under an hour.
#[must_use]
pub fn format_round_duration(td: ChronoDuration) -> String {
    let secs = td.num_seconds().max(0);

    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;

    let hours = secs / HOUR;
    let minutes = secs / MINUTE % 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Abbreviated calendar date, e.g. `"Aug 1, 2025"`.
#[must_use]
pub fn format_round_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn durations_under_and_over_an_hour() {
        assert_eq!(format_round_duration(ChronoDuration::seconds(59)), "0m");
        assert_eq!(format_round_duration(ChronoDuration::minutes(45)), "45m");
        assert_eq!(
            format_round_duration(ChronoDuration::minutes(125) + ChronoDuration::seconds(30)),
            "2h 5m"
        );
        assert_eq!(format_round_duration(ChronoDuration::seconds(-10)), "0m");
    }

    #[test]
    fn abbreviated_date() {
        let date = Utc.with_ymd_and_hms(2025, 8, 1, 14, 30, 0).unwrap();
        assert_eq!(format_round_date(&date), "Aug 1, 2025");
    }
}
