use chrono::{DateTime, FixedOffset, TimeZone};

/// Wall-clock "HH:MM" of `ts` in `tz`
pub fn format_clock<Tz: TimeZone>(ts: &DateTime<FixedOffset>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.with_timezone(tz).format("%H:%M").to_string()
}

/// "09:00-10:30", or "09:00" when there is no end.
/// An end on a later calendar day is marked with "+N".
pub fn format_time_range<Tz: TimeZone>(
    start: &DateTime<FixedOffset>,
    end: Option<&DateTime<FixedOffset>>,
    tz: &Tz,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let start_clock = format_clock(start, tz);
    let Some(end) = end else {
        return start_clock;
    };

    let days_later = (end.with_timezone(tz).date_naive() - start.with_timezone(tz).date_naive())
        .num_days();
    if days_later > 0 {
        format!("{}-{}+{}", start_clock, format_clock(end, tz), days_later)
    } else {
        format!("{}-{}", start_clock, format_clock(end, tz))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn ts(raw: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(raw).unwrap()
    }

    #[test]
    fn test_format_time_range_same_day() {
        let start = ts("2024-01-15T09:00:00-03:00");
        let end = ts("2024-01-15T10:30:00-03:00");
        let tz = FixedOffset::west_opt(3 * 3600).unwrap();
        assert_eq!(format_time_range(&start, Some(&end), &tz), "09:00-10:30");
    }

    #[test]
    fn test_format_time_range_converts_zone() {
        let start = ts("2024-01-15T09:00:00-03:00");
        assert_eq!(format_time_range(&start, None, &Utc), "12:00");
    }

    #[test]
    fn test_format_time_range_overnight() {
        let start = ts("2024-01-15T22:00:00Z");
        let end = ts("2024-01-16T02:00:00Z");
        assert_eq!(format_time_range(&start, Some(&end), &Utc), "22:00-02:00+1");
    }
}
