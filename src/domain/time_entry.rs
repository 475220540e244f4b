use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// Time logged against a project, in minutes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeEntry {
    pub id: Uuid,
    pub project_id: Uuid,
    pub date: NaiveDate,
    pub minutes: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl TimeEntry {
    pub fn new(project_id: Uuid, date: NaiveDate, minutes: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id,
            date,
            minutes,
            task: None,
            note: None,
        }
    }

    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        self.task = Some(task.into());
        self
    }
}

impl Identifiable for TimeEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for TimeEntry {
    fn display_label(&self) -> String {
        format!("{} {}min", self.date, self.minutes)
    }
}
