#![allow(dead_code)]

use deptask::api::{ApiError, TaskApi};
use deptask::libs::render::ListRegion;
use deptask::libs::store::DepartmentFilter;
use deptask::libs::surface::Surface;
use deptask::libs::task::{NewTask, Task, TaskId, TaskStatus};
use std::cell::RefCell;
use std::rc::Rc;

/// Requests received by [`FakeBackend`], in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(NewTask),
    List(DepartmentFilter),
    Complete(TaskId, String),
    Delete(TaskId),
}

#[derive(Debug, Clone)]
pub enum Failure {
    Domain(String),
    Parse,
}

/// What the surface was told and what the backend received, interleaved.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Request(Call),
    SubmitEnabled(bool),
    Alert(String),
    OpenCreate(String),
    CloseCreate,
    OpenConfirm(String),
    CloseConfirm,
}

pub type Journal = Rc<RefCell<Vec<Event>>>;

#[derive(Debug, Default)]
struct State {
    tasks: Vec<Task>,
    next_id: TaskId,
    calls: Vec<Call>,
    fail_next: Option<Failure>,
    stalled: bool,
    journal: Option<Journal>,
}

/// In-memory stand-in for the department tasks backend.
#[derive(Debug, Default)]
pub struct FakeBackend {
    state: RefCell<State>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0);
        Self {
            state: RefCell::new(State {
                tasks,
                next_id,
                ..State::default()
            }),
        }
    }

    /// Also writes every request to `journal`.
    pub fn journaled(self, journal: &Journal) -> Self {
        self.state.borrow_mut().journal = Some(journal.clone());
        self
    }

    /// Requests from now on never resolve.
    pub fn stall(&self) {
        self.state.borrow_mut().stalled = true;
    }

    pub fn resume(&self) {
        self.state.borrow_mut().stalled = false;
    }

    /// Makes the next request fail.
    pub fn fail_next(&self, failure: Failure) {
        self.state.borrow_mut().fail_next = Some(failure);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub fn list_calls(&self) -> usize {
        self.calls().iter().filter(|c| matches!(c, Call::List(_))).count()
    }

    pub fn mutation_calls(&self) -> Vec<Call> {
        self.calls().into_iter().filter(|c| !matches!(c, Call::List(_))).collect()
    }

    async fn wait_unless_stalled(&self) {
        let stalled = self.state.borrow().stalled;
        if stalled {
            std::future::pending::<()>().await;
        }
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        let mut state = self.state.borrow_mut();
        if let Some(journal) = &state.journal {
            journal.borrow_mut().push(Event::Request(call.clone()));
        }
        state.calls.push(call);
        match state.fail_next.take() {
            Some(Failure::Domain(message)) => Err(ApiError::Domain(message)),
            Some(Failure::Parse) => Err(serde_json::from_str::<serde_json::Value>("<html>").unwrap_err().into()),
            None => Ok(()),
        }
    }
}

impl TaskApi for FakeBackend {
    async fn create_task(&self, task: &NewTask) -> Result<(), ApiError> {
        self.wait_unless_stalled().await;
        self.record(Call::Create(task.clone()))?;
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        state.tasks.push(Task {
            id,
            title: task.title.clone(),
            department: task.department.clone(),
            author: task.author.clone(),
            status: TaskStatus::Active,
            last_modified_by: None,
        });
        Ok(())
    }

    async fn list_tasks(&self, department: &DepartmentFilter) -> Result<Vec<Task>, ApiError> {
        self.wait_unless_stalled().await;
        self.record(Call::List(department.clone()))?;
        let state = self.state.borrow();
        Ok(state
            .tasks
            .iter()
            .filter(|t| department.name().map_or(true, |name| t.department == name))
            .cloned()
            .collect())
    }

    async fn complete_task(&self, id: TaskId, modified_by: &str) -> Result<(), ApiError> {
        self.wait_unless_stalled().await;
        self.record(Call::Complete(id, modified_by.to_string()))?;
        let mut state = self.state.borrow_mut();
        match state.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.status = TaskStatus::Done;
                task.last_modified_by = Some(modified_by.to_string());
                Ok(())
            }
            None => Err(ApiError::Domain("Task not found".to_string())),
        }
    }

    async fn delete_task(&self, id: TaskId) -> Result<(), ApiError> {
        self.wait_unless_stalled().await;
        self.record(Call::Delete(id))?;
        let mut state = self.state.borrow_mut();
        let before = state.tasks.len();
        state.tasks.retain(|t| t.id != id);
        match state.tasks.len() < before {
            true => Ok(()),
            false => Err(ApiError::Domain("Task not found".to_string())),
        }
    }
}

/// Surface that only writes what it is told to a [`Journal`].
#[derive(Debug, Default)]
pub struct RecordingSurface {
    journal: Journal,
}

impl RecordingSurface {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
        }
    }

    fn push(&self, event: Event) {
        self.journal.borrow_mut().push(event);
    }
}

impl Surface for RecordingSurface {
    fn show_departments(&mut self) {}

    fn show_tasks(&mut self, _title: &str) {}

    fn show_list(&mut self, _region: &ListRegion) {}

    fn alert(&mut self, message: &str) {
        self.push(Event::Alert(message.to_string()));
    }

    fn open_create_modal(&mut self, department: &str) {
        self.push(Event::OpenCreate(department.to_string()));
    }

    fn close_create_modal(&mut self) {
        self.push(Event::CloseCreate);
    }

    fn mark_input_invalid(&mut self) {}

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.push(Event::SubmitEnabled(enabled));
    }

    fn open_confirm(&mut self, text: &str) {
        self.push(Event::OpenConfirm(text.to_string()));
    }

    fn close_confirm(&mut self) {
        self.push(Event::CloseConfirm);
    }
}

pub fn task(id: TaskId, title: &str, department: &str, status: TaskStatus) -> Task {
    Task {
        id,
        title: title.to_string(),
        department: department.to_string(),
        author: "Olga".to_string(),
        status,
        last_modified_by: None,
    }
}
