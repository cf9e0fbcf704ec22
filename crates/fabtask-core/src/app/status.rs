//! Status - task 一覧表示用のビュー

use serde::{Deserialize, Serialize};

use crate::domain::TaskMetadata;
use crate::typed::Task;

/// One row of a task listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub metadata: TaskMetadata,

    pub runs_once: bool,

    pub has_run: bool,
}

impl TaskSummary {
    pub fn of(task: &dyn Task) -> Self {
        let has_run = task.has_run();
        Self {
            name: task.name().to_string(),
            description: task.description().map(str::to_string),
            metadata: TaskMetadata {
                hosts: task.hosts().map(<[String]>::to_vec),
                roles: task.roles().map(<[String]>::to_vec),
            },
            runs_once: has_run.is_some(),
            has_run: has_run.unwrap_or(false),
        }
    }
}
