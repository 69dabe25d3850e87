use super::view_models::*;
use crate::args::hints::cmd;
use crate::config::Config;
use crate::handlers::GroupingSettings;
use serde_json::Value;
use std::path::PathBuf;
use verific_engine::{Bucketing, summarize};
use verific_types::Activity;

fn present_reference(settings: &GroupingSettings) -> ReferenceViewModel {
    ReferenceViewModel {
        now: settings.now.to_rfc3339(),
        timezone: settings.tz.name().to_string(),
        tz: settings.tz,
    }
}

pub fn present_groups(
    groups: Bucketing<Value>,
    settings: &GroupingSettings,
    date_field: String,
) -> CommandResultViewModel<GroupListViewModel> {
    let empty = groups.is_empty();
    let result = CommandResultViewModel::new(GroupListViewModel {
        reference: present_reference(settings),
        date_field,
        groups,
    });

    if empty {
        result.with_suggestion(
            Suggestion::new("The input had no records; check the file or pipe").with_command(cmd::GROUP),
        )
    } else {
        result
    }
}

pub fn present_schedule(
    schedule: Bucketing<Activity>,
    settings: &GroupingSettings,
) -> CommandResultViewModel<ScheduleViewModel> {
    let summaries = summarize(&schedule);
    CommandResultViewModel::new(ScheduleViewModel {
        reference: present_reference(settings),
        schedule,
        summaries,
    })
}

pub fn present_config(
    path: PathBuf,
    exists: bool,
    config: Config,
) -> CommandResultViewModel<ConfigViewModel> {
    let result = CommandResultViewModel::new(ConfigViewModel {
        path,
        exists,
        config,
    });

    if exists {
        result
    } else {
        result.with_suggestion(
            Suggestion::new("No config file yet; write the defaults with").with_command(cmd::CONFIG_INIT),
        )
    }
}

pub fn present_config_written(
    path: PathBuf,
    overwritten: bool,
) -> CommandResultViewModel<ConfigWrittenViewModel> {
    CommandResultViewModel::new(ConfigWrittenViewModel { path, overwritten })
        .with_suggestion(Suggestion::new("Inspect the settings with").with_command(cmd::CONFIG_SHOW))
}

pub fn present_guidance(
    config_path: PathBuf,
    config_exists: bool,
) -> CommandResultViewModel<GuidanceViewModel> {
    CommandResultViewModel::new(GuidanceViewModel {
        config_path,
        config_exists,
    })
}
