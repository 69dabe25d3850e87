use crate::config::Config;
use chrono_tz::Tz;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;
use verific_engine::{Bucketing, ScheduleSummary};
use verific_types::Activity;

/// Builds the plain-text view of a view model
pub trait CreateView {
    fn create_view<'a>(&'a self, color: bool) -> Box<dyn fmt::Display + 'a>;
}

/// Envelope shared by every command's JSON output
#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T> {
    pub content: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,
}

impl<T> CommandResultViewModel<T> {
    pub fn new(content: T) -> Self {
        Self {
            content,
            suggestions: Vec::new(),
        }
    }

    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Suggestion {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: None,
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }
}

/// Reference point every grouping was computed against
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceViewModel {
    /// RFC 3339 instant in `timezone`
    pub now: String,
    pub timezone: String,
    #[serde(skip)]
    pub tz: Tz,
}

#[derive(Debug, Serialize)]
pub struct GroupListViewModel {
    pub reference: ReferenceViewModel,
    pub date_field: String,
    #[serde(flatten)]
    pub groups: Bucketing<Value>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleViewModel {
    pub reference: ReferenceViewModel,
    #[serde(flatten)]
    pub schedule: Bucketing<Activity>,
    pub summaries: Vec<ScheduleSummary>,
}

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub path: PathBuf,
    pub exists: bool,
    pub config: Config,
}

#[derive(Debug, Serialize)]
pub struct ConfigWrittenViewModel {
    pub path: PathBuf,
    pub overwritten: bool,
}

#[derive(Debug, Serialize)]
pub struct GuidanceViewModel {
    pub config_path: PathBuf,
    pub config_exists: bool,
}
