//! Client side of the department tasks HTTP API.
//!
//! The backend is an external collaborator. Every operation is a single round
//! trip with no retry and no timeout override. Failures come in two kinds:
//!
//! - **Domain**: a well-formed response carrying a non-empty `error` field
//! - **Transport/parse**: network failure or a body that is not JSON
//!
//! Both are shown to the user the same way, as a blocking alert with the
//! message text.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use deptask::api::{DepartmentTasks, TaskApi};
//! use deptask::libs::store::DepartmentFilter;
//!
//! # async fn run() -> Result<(), deptask::api::ApiError> {
//! let api = DepartmentTasks::new();
//! let tasks = api.list_tasks(&DepartmentFilter::Named("Sales".into())).await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::store::DepartmentFilter;
use crate::libs::task::{NewTask, Task, TaskId};
use thiserror::Error;

pub mod tasks;

pub use tasks::{DepartmentTasks, API_BASE_URL};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend understood the request and rejected it.
    #[error("{0}")]
    Domain(String),
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_domain(&self) -> bool {
        matches!(self, ApiError::Domain(_))
    }
}

/// The four operations the mini-app performs against the backend.
#[allow(async_fn_in_trait)]
pub trait TaskApi {
    /// `POST /api/create-department-task`
    async fn create_task(&self, task: &NewTask) -> Result<(), ApiError>;

    /// `GET /api/department-tasks[?department=<name>]`, in backend order.
    async fn list_tasks(&self, department: &DepartmentFilter) -> Result<Vec<Task>, ApiError>;

    /// `PATCH /api/department-tasks/{id}/complete`
    async fn complete_task(&self, id: TaskId, modified_by: &str) -> Result<(), ApiError>;

    /// `DELETE /api/department-tasks/{id}`
    async fn delete_task(&self, id: TaskId) -> Result<(), ApiError>;
}
