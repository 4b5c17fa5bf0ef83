//! Task records as exchanged with the department tasks backend.
//!
//! The backend owns every task. The client only ever holds transient copies
//! returned by the list endpoint and never edits them locally: after any
//! mutation the list is fetched again.

use serde::{Deserialize, Serialize};

/// Backend-assigned task identifier, the sole handle for complete/delete.
pub type TaskId = i64;

/// Lifecycle state of a task. The only transition is `Active` -> `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Active,
    Done,
}

impl TaskStatus {
    pub fn is_done(self) -> bool {
        matches!(self, TaskStatus::Done)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub department: String,
    pub author: String,
    pub status: TaskStatus,
    /// Set by the backend once somebody completes the task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<String>,
}

impl Task {
    /// Whether the "complete" action should be offered for this task.
    pub fn can_complete(&self) -> bool {
        !self.status.is_done()
    }
}

/// Most done tasks a done listing shows.
pub const DONE_LIST_LIMIT: usize = 20;

/// Done tasks of `tasks` in backend order, at most [`DONE_LIST_LIMIT`].
pub fn done_tasks(tasks: &[Task]) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| task.status.is_done())
        .take(DONE_LIST_LIMIT)
        .collect()
}

/// Body of `POST /api/create-department-task`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub department: String,
    pub author: String,
}

impl NewTask {
    pub fn new(title: &str, department: &str, author: &str) -> Self {
        NewTask {
            title: title.to_string(),
            department: department.to_string(),
            author: author.to_string(),
        }
    }
}

/// Body of `PATCH /api/department-tasks/{id}/complete`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompleteTask {
    pub modified_by: String,
}
