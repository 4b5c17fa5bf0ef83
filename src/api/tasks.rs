//! reqwest implementation of [`TaskApi`] against the fixed backend origin.

use super::{ApiError, TaskApi};
use crate::libs::store::DepartmentFilter;
use crate::libs::task::{CompleteTask, NewTask, Task, TaskId};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use tracing::debug;

/// Origin of the department tasks backend, fixed at deployment time.
pub const API_BASE_URL: &str = "https://tasks.deptask.app";

const CREATE_PATH: &str = "api/create-department-task";
const TASKS_PATH: &str = "api/department-tasks";

/// Uniform response envelope. Every endpoint may carry `error`; only the
/// list endpoint carries `tasks`.
#[derive(Debug, Default, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl ApiResponse {
    /// Parses a response body. An empty body counts as `{}`; a non-empty
    /// `error` becomes [`ApiError::Domain`].
    pub fn parse(body: &str) -> Result<Self, ApiError> {
        let body = body.trim();
        let response: ApiResponse = if body.is_empty() {
            ApiResponse::default()
        } else {
            serde_json::from_str(body)?
        };

        match response.error {
            Some(ref message) if !message.trim().is_empty() => Err(ApiError::Domain(message.clone())),
            _ => Ok(response),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DepartmentTasks {
    client: Client,
    base_url: String,
}

impl Default for DepartmentTasks {
    fn default() -> Self {
        Self::new()
    }
}

impl DepartmentTasks {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    /// Points the client at another origin. Only tests need this.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn create_request(&self, task: &NewTask) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, CREATE_PATH);
        self.client.post(url).json(task)
    }

    /// `All` sends no query at all; a named department is URL-encoded.
    pub fn list_request(&self, department: &DepartmentFilter) -> RequestBuilder {
        let request = self.client.get(format!("{}/{}", self.base_url, TASKS_PATH));
        match department.name() {
            Some(name) => request.query(&[("department", name)]),
            None => request,
        }
    }

    pub fn complete_request(&self, id: TaskId, modified_by: &str) -> RequestBuilder {
        let url = format!("{}/{}/{}/complete", self.base_url, TASKS_PATH, id);
        let body = CompleteTask {
            modified_by: modified_by.to_string(),
        };
        self.client.patch(url).json(&body)
    }

    pub fn delete_request(&self, id: TaskId) -> RequestBuilder {
        self.client.delete(format!("{}/{}/{}", self.base_url, TASKS_PATH, id))
    }

    async fn send(&self, request: RequestBuilder) -> Result<ApiResponse, ApiError> {
        let request = request.build()?;
        debug!(method = %request.method(), url = %request.url(), "sending request");

        let res = self
            .client
            .execute(request)
            .await
            .inspect_err(|e| debug!("request failed: {e}"))?;
        let status = res.status();
        let body = res.text().await?;
        debug!(%status, "response received");

        ApiResponse::parse(&body).inspect_err(|e| debug!(%status, "request rejected: {e}"))
    }
}

impl TaskApi for DepartmentTasks {
    async fn create_task(&self, task: &NewTask) -> Result<(), ApiError> {
        self.send(self.create_request(task)).await?;
        Ok(())
    }

    async fn list_tasks(&self, department: &DepartmentFilter) -> Result<Vec<Task>, ApiError> {
        Ok(self.send(self.list_request(department)).await?.tasks)
    }

    async fn complete_task(&self, id: TaskId, modified_by: &str) -> Result<(), ApiError> {
        self.send(self.complete_request(id, modified_by)).await?;
        Ok(())
    }

    async fn delete_task(&self, id: TaskId) -> Result<(), ApiError> {
        self.send(self.delete_request(id)).await?;
        Ok(())
    }
}
