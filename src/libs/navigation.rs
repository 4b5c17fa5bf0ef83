//! Two-screen navigation: departments <-> tasks.

use super::app::MiniApp;
use super::messages::Message;
use super::render::ListRegion;
use super::store::{DepartmentFilter, Screen};
use super::surface::Surface;
use crate::api::TaskApi;
use tracing::info;

impl<A: TaskApi, S: Surface> MiniApp<A, S> {
    /// Opens the task screen for `department` and loads its list.
    pub async fn select_department(&mut self, department: DepartmentFilter) {
        info!(department = %department, "opening task screen");
        self.store.current_department = department;
        self.store.current_view = Screen::Tasks;

        let title = self.department_title();
        self.surface.show_tasks(&title);
        self.reload().await;
    }

    /// Back to the department screen. The department filter is remembered.
    pub fn show_departments(&mut self) {
        self.store.current_view = Screen::Departments;
        self.surface.show_departments();
    }

    /// Heading of the task screen for the current filter.
    pub fn department_title(&self) -> String {
        match self.store.current_department.name() {
            Some(name) => name.to_string(),
            None => Message::AllTasksTitle.to_string(),
        }
    }

    /// Fetches the list for the current filter. A failed load shows the
    /// error in the list region and as an alert.
    pub async fn reload(&mut self) {
        self.set_list(ListRegion::Loading);

        match self.api.list_tasks(&self.store.current_department).await {
            Ok(tasks) => {
                info!(count = tasks.len(), "task list loaded");
                self.set_list(ListRegion::from_tasks(tasks));
            }
            Err(e) => {
                self.set_list(ListRegion::Failed(e.to_string()));
                self.alert_error(&e);
            }
        }
    }
}
