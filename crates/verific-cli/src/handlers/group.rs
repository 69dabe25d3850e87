use super::HandlerContext;
use crate::args::GroupingArgs;
use crate::input;
use crate::presentation::presenters;
use anyhow::Result;
use chrono::DateTime;
use chrono_tz::Tz;
use std::path::Path;
use verific_engine::try_bucket_by;
use verific_types::{instant_from_value, lookup_path};

pub fn handle(
    ctx: &HandlerContext,
    file: &Path,
    date_field: Option<String>,
    grouping: &GroupingArgs,
) -> Result<()> {
    let settings = ctx.grouping(grouping)?;
    let date_field = date_field.unwrap_or_else(|| ctx.config.date_field.clone());
    let records = input::read_records(file)?;

    tracing::info!(records = records.len(), date_field = %date_field, "grouping records");

    let groups = try_bucket_by(
        records,
        |record| -> std::result::Result<DateTime<Tz>, String> {
            let value = lookup_path(record, &date_field)
                .ok_or_else(|| format!("missing field '{}'", date_field))?;
            instant_from_value(value, &settings.tz).map_err(|e| e.to_string())
        },
        &settings.now,
        &settings.options,
    )?;

    let view_model = presenters::present_groups(groups, &settings, date_field);
    ctx.render(view_model)
}
