use super::HandlerContext;
use crate::args::GroupingArgs;
use crate::input;
use crate::presentation::presenters;
use anyhow::Result;
use std::path::Path;
use verific_engine::group_schedule;

pub fn handle(ctx: &HandlerContext, file: &Path, grouping: &GroupingArgs) -> Result<()> {
    let settings = ctx.grouping(grouping)?;
    let mut activities = input::read_activities(file)?;

    // Chronological inside each day; sort is stable so equal starts keep file order
    activities.sort_by_key(|a| a.starts_at);
    tracing::info!(activities = activities.len(), "grouping schedule");

    let schedule = group_schedule(activities, &settings.now, &settings.options);
    ctx.render(presenters::present_schedule(schedule, &settings))
}
