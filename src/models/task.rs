use chrono::{DateTime, FixedOffset, NaiveDate};
use log::warn;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use super::Resource;
use crate::constants::{PRIORITY_DEFAULT, PRIORITY_MAX, PRIORITY_MIN};
use crate::error::ResourceKind;
use crate::utils::datetime;

/// When a task is scheduled.
///
/// `date` is always present; `datetime` only for tasks with a time of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Due {
    /// Human-readable due string, e.g. "every monday at 9am"
    pub string: String,
    pub date: String,
    pub is_recurring: bool,
    pub datetime: Option<String>,
    pub timezone: Option<String>,
}

impl Due {
    /// True when the due descriptor carries a non-empty date/time.
    pub fn has_time(&self) -> bool {
        self.datetime.as_deref().is_some_and(|dt| !dt.is_empty())
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        datetime::parse_date(&self.date).ok()
    }

    /// The RFC3339 timestamp, if present and well-formed.
    pub fn parsed_datetime(&self) -> Option<DateTime<FixedOffset>> {
        self.datetime
            .as_deref()
            .and_then(|dt| datetime::parse_rfc3339(dt).ok())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationUnit {
    Minute,
    Day,
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationUnit::Minute => f.write_str("minute"),
            DurationUnit::Day => f.write_str("day"),
        }
    }
}

/// Estimated time to complete a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duration {
    pub amount: u32,
    pub unit: DurationUnit,
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            DurationUnit::Minute => write!(f, "{}m", self.amount),
            DurationUnit::Day => write!(f, "{}d", self.amount),
        }
    }
}

/// An active (or just completed) task.
///
/// `project_id` and `labels` are plain references; they are never resolved
/// locally. Labels are referenced by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub project_id: String,
    pub section_id: Option<String>,
    pub content: String,
    pub description: String,
    pub is_completed: bool,
    pub labels: Vec<String>,
    pub parent_id: Option<String>,
    pub order: i64,
    /// 1 (normal) to 4 (urgent)
    pub priority: i64,
    pub due: Option<Due>,
    pub duration: Option<Duration>,
    pub url: String,
    pub comment_count: i64,
    pub created_at: String,
    pub creator_id: String,
    pub assignee_id: Option<String>,
    pub assigner_id: Option<String>,
}

impl Task {
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l == name)
    }
}

impl Resource for Task {
    const KIND: ResourceKind = ResourceKind::Task;

    fn id(&self) -> &str {
        &self.id
    }
}

/// A validated task priority.
///
/// Values in `[PRIORITY_MIN, PRIORITY_MAX]` are kept as is. Anything else is
/// replaced by `PRIORITY_DEFAULT`, not by the nearest bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Priority(i64);

impl Priority {
    pub fn clamp(value: i64) -> Self {
        if (PRIORITY_MIN..=PRIORITY_MAX).contains(&value) {
            Priority(value)
        } else {
            warn!(
                "Priority {} outside {}..={}, using default {}",
                value, PRIORITY_MIN, PRIORITY_MAX, PRIORITY_DEFAULT
            );
            Priority(PRIORITY_DEFAULT)
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority(PRIORITY_DEFAULT)
    }
}

impl From<i64> for Priority {
    fn from(value: i64) -> Self {
        Priority::clamp(value)
    }
}

/// Body of `POST /tasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateTaskArgs {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_datetime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_unit: Option<DurationUnit>,
}

impl CreateTaskArgs {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }
}

/// Body of `POST /tasks/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateTaskArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_datetime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_unit: Option<DurationUnit>,
}

/// Task creation by human-readable names.
///
/// The client resolves `project` and every entry of `labels` through its name
/// caches before sending the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub content: String,
    pub project: Option<String>,
    pub labels: Vec<String>,
    /// Checked with [`Priority::clamp`]; `None` sends the default.
    pub priority: Option<i64>,
    pub due_string: Option<String>,
}

/// Query string for `GET /tasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    /// Label name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Raw Todoist filter expression, e.g. `today | overdue`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub ids: Vec<String>,
}

impl TaskQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project_id(mut self, id: impl Into<String>) -> Self {
        self.project_id = Some(id.into());
        self
    }

    pub fn with_section_id(mut self, id: impl Into<String>) -> Self {
        self.section_id = Some(id.into());
        self
    }

    pub fn with_label(mut self, name: impl Into<String>) -> Self {
        self.label = Some(name.into());
        self
    }

    pub fn with_raw_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn with_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }
}

fn comma_joined<S: Serializer>(ids: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ids.join(","))
}
