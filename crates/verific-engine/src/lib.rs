// Engine module - day bucketing for dated records
// Sits between the shared records (types) and CLI presentation

pub mod bucket;
pub mod label;
pub mod schedule;

pub use bucket::{
    Bucket, BucketKind, BucketOptions, Bucketing, TODAY_LABEL, TOMORROW_LABEL, bucket_by,
    try_bucket_by,
};
pub use label::{format_day, month_name};
pub use schedule::{ScheduleSummary, group_schedule, summarize};
