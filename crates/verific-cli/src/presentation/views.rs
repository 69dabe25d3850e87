use super::formatters::{text, time};
use super::view_models::*;
use crate::args::hints::cmd;
use owo_colors::OwoColorize;
use std::fmt;
use verific_engine::{Bucket, BucketKind};

const TITLE_WIDTH: usize = 72;

fn header<T>(bucket: &Bucket<T>, color: bool) -> String {
    let text = format!("{} ({})", bucket.label, bucket.items.len());
    if !color {
        return text;
    }
    match bucket.kind {
        BucketKind::Today => text.green().bold().to_string(),
        BucketKind::Tomorrow => text.yellow().bold().to_string(),
        BucketKind::Date => text.bold().to_string(),
    }
}

fn dim(text: &str, color: bool) -> String {
    if color {
        text.bright_black().to_string()
    } else {
        text.to_string()
    }
}

impl CreateView for GroupListViewModel {
    fn create_view<'a>(&'a self, color: bool) -> Box<dyn fmt::Display + 'a> {
        Box::new(GroupListView { data: self, color })
    }
}

struct GroupListView<'a> {
    data: &'a GroupListViewModel,
    color: bool,
}

impl fmt::Display for GroupListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.groups.is_empty() {
            return writeln!(f, "No records to group.");
        }

        for (i, bucket) in self.data.groups.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", header(bucket, self.color))?;
            for record in &bucket.items {
                writeln!(f, "  {}", text::record_title(record, TITLE_WIDTH))?;
            }
        }
        Ok(())
    }
}

impl CreateView for ScheduleViewModel {
    fn create_view<'a>(&'a self, color: bool) -> Box<dyn fmt::Display + 'a> {
        Box::new(ScheduleView { data: self, color })
    }
}

struct ScheduleView<'a> {
    data: &'a ScheduleViewModel,
    color: bool,
}

impl fmt::Display for ScheduleView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.schedule.is_empty() {
            return writeln!(f, "No activities scheduled.");
        }

        let tz = &self.data.reference.tz;
        for (i, bucket) in self.data.schedule.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", header(bucket, self.color))?;
            for activity in &bucket.items {
                let range =
                    time::format_time_range(&activity.starts_at, activity.ends_at.as_ref(), tz);
                let name = text::truncate(&activity.name, TITLE_WIDTH);
                match &activity.location {
                    Some(location) => writeln!(
                        f,
                        "  {:<13} {} {}",
                        range,
                        name,
                        dim(&format!("@ {}", location), self.color)
                    )?,
                    None => writeln!(f, "  {:<13} {}", range, name)?,
                }
            }
        }
        Ok(())
    }
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, color: bool) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView { data: self, color })
    }
}

struct ConfigView<'a> {
    data: &'a ConfigViewModel,
    color: bool,
}

impl fmt::Display for ConfigView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.data.exists {
            String::new()
        } else {
            dim(" (not found, showing defaults)", self.color)
        };
        writeln!(f, "# {}{}", self.data.path.display(), status)?;
        let body = toml::to_string_pretty(&self.data.config).map_err(|_| fmt::Error)?;
        write!(f, "{}", body)
    }
}

impl CreateView for ConfigWrittenViewModel {
    fn create_view<'a>(&'a self, _color: bool) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigWrittenView { data: self })
    }
}

struct ConfigWrittenView<'a> {
    data: &'a ConfigWrittenViewModel,
}

impl fmt::Display for ConfigWrittenView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.data.overwritten {
            "Overwrote"
        } else {
            "Wrote"
        };
        writeln!(f, "{} {}", verb, self.data.path.display())
    }
}

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self, _color: bool) -> Box<dyn fmt::Display + 'a> {
        Box::new(GuidanceView { data: self })
    }
}

struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
}

impl fmt::Display for GuidanceView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "verific - group event schedules by day\n")?;

        if !self.data.config_exists {
            writeln!(f, "Get started:")?;
            writeln!(f, "  {:<42} # Write {}", cmd::CONFIG_INIT, self.data.config_path.display())?;
            writeln!(f)?;
        }

        writeln!(f, "Quick commands:")?;
        writeln!(f, "  {:<42} # Activities by day", cmd::SCHEDULE)?;
        writeln!(f, "  {:<42} # Any JSON export by day", cmd::GROUP)?;
        writeln!(f, "  {:<42} # Effective settings", cmd::CONFIG_SHOW)?;
        writeln!(f, "\nFor more commands:")?;
        writeln!(f, "  verific --help")
    }
}
