use crate::{Error, Result};
use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};
use serde_json::Value;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an IANA timezone name ("America/Sao_Paulo", "UTC")
pub fn parse_tz(name: &str) -> Result<chrono_tz::Tz> {
    name.parse::<chrono_tz::Tz>()
        .map_err(|_| Error::UnknownTimezone(name.to_string()))
}

/// Parse a textual point in time, interpreting offset-less input in `tz`.
///
/// Accepted forms:
/// - RFC 3339 (`2024-01-15T10:30:00-03:00`, `2024-01-15T13:30:00Z`)
/// - naive date-time (`2024-01-15T10:30`, `2024-01-15 10:30:00`)
/// - calendar date (`2024-01-15`, local midnight)
pub fn parse_instant<Tz: TimeZone>(raw: &str, tz: &Tz) -> Result<DateTime<Tz>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(tz));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return resolve_local(tz, naive);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return resolve_local(tz, date.and_time(chrono::NaiveTime::MIN));
    }

    Err(Error::InvalidInstant(format!(
        "'{}' is not an RFC 3339 timestamp, a YYYY-MM-DD date or a local date-time",
        raw
    )))
}

/// Read a JSON value as a point in time: a string accepted by
/// [`parse_instant`] or an integer count of epoch milliseconds.
pub fn instant_from_value<Tz: TimeZone>(value: &Value, tz: &Tz) -> Result<DateTime<Tz>> {
    match value {
        Value::String(raw) => parse_instant(raw, tz),
        Value::Number(n) => {
            let millis = n
                .as_i64()
                .ok_or_else(|| Error::InvalidInstant(format!("{} is not an integer", n)))?;
            DateTime::from_timestamp_millis(millis)
                .map(|dt| dt.with_timezone(tz))
                .ok_or_else(|| Error::InvalidInstant(format!("{} ms is out of range", millis)))
        }
        Value::Null => Err(Error::InvalidInstant("value is null".to_string())),
        other => Err(Error::InvalidInstant(format!(
            "expected a string or epoch milliseconds, got {}",
            json_kind(other)
        ))),
    }
}

/// Resolve a dotted field path (`schedule.startsAt`) inside a JSON record
pub fn lookup_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .filter(|segment| !segment.is_empty())
        .try_fold(value, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
}

// Local times skipped by a DST transition move forward to the first valid
// instant; repeated local times take the earlier offset.
fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Result<DateTime<Tz>> {
    let mut candidate = naive;
    for _ in 0..=4 {
        match tz.from_local_datetime(&candidate) {
            LocalResult::Single(dt) => return Ok(dt),
            LocalResult::Ambiguous(earliest, _) => return Ok(earliest),
            LocalResult::None => candidate += TimeDelta::minutes(30),
        }
    }
    Err(Error::InvalidInstant(format!(
        "{} does not exist in the target timezone",
        naive
    )))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
