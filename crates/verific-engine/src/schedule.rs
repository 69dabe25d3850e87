use crate::bucket::{BucketKind, BucketOptions, Bucketing, bucket_by};
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use serde::Serialize;
use verific_types::Activity;

/// Per-day overview of an event schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleSummary {
    pub label: String,
    pub kind: BucketKind,
    pub day: NaiveDate,
    pub activities: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_start: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_end: Option<DateTime<FixedOffset>>,
}

/// Group activities by the day they start on
pub fn group_schedule<Tz: TimeZone>(
    activities: impl IntoIterator<Item = Activity>,
    now: &DateTime<Tz>,
    options: &BucketOptions,
) -> Bucketing<Activity> {
    bucket_by(activities, |activity| activity.starts_at, now, options)
}

/// Summarize each bucket of a grouped schedule, in display order.
///
/// Activities without an end count as ending when they start.
pub fn summarize(schedule: &Bucketing<Activity>) -> Vec<ScheduleSummary> {
    schedule
        .iter()
        .map(|bucket| ScheduleSummary {
            label: bucket.label.clone(),
            kind: bucket.kind,
            day: bucket.day,
            activities: bucket.items.len(),
            first_start: bucket.items.iter().map(|a| a.starts_at).min(),
            last_end: bucket
                .items
                .iter()
                .map(|a| a.ends_at.unwrap_or(a.starts_at))
                .max(),
        })
        .collect()
}
