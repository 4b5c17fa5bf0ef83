//! Create-task modal and confirm dialog.
//!
//! Each modal is `closed -> open -> closed`. Only one modal may be open at a
//! time, and while a modal's request is in flight further submits are
//! ignored and the submit control stays disabled. If the request future is
//! dropped before it resolves, closing or cancelling the modal resets it.

use super::app::MiniApp;
use super::messages::Message;
use super::surface::Surface;
use super::task::{NewTask, TaskId};
use crate::api::{ApiError, TaskApi};
use tracing::{info, warn};

#[derive(Debug, Default)]
pub struct CreateModal {
    department: Option<String>,
    in_flight: bool,
}

impl CreateModal {
    pub fn is_open(&self) -> bool {
        self.department.is_some()
    }

    /// Department the new task will be filed under.
    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}

/// Intent bound to the confirm dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    Complete { id: TaskId },
    Delete { id: TaskId, title: String },
    /// Deletes every listed done task, one request each.
    ClearDone { ids: Vec<TaskId> },
}

impl ConfirmAction {
    pub fn prompt(&self) -> Message {
        match self {
            ConfirmAction::Complete { .. } => Message::ConfirmComplete,
            ConfirmAction::Delete { title, .. } => Message::ConfirmDelete(title.clone()),
            ConfirmAction::ClearDone { ids } => Message::ConfirmClearDone(ids.len()),
        }
    }
}

#[derive(Debug, Default)]
pub struct ConfirmDialog {
    pending: Option<ConfirmAction>,
    in_flight: bool,
}

impl ConfirmDialog {
    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&ConfirmAction> {
        self.pending.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Task created, modal closed, list reloaded.
    Created,
    /// Blank title: nothing sent, input marked, modal still open.
    Invalid,
    /// Request failed: error alerted, modal still open.
    Failed,
    /// No modal open or a submit already in flight.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Action succeeded and the list was reloaded.
    Done,
    /// Action failed and the error was alerted.
    Failed,
    /// Nothing pending or a confirm already in flight.
    Ignored,
}

impl<A: TaskApi, S: Surface> MiniApp<A, S> {
    /// Opens the create modal for `department`. Returns `false` when another
    /// modal is open or the department is blank.
    pub fn open_create_modal(&mut self, department: &str) -> bool {
        if self.any_modal_open() {
            warn!("create modal refused: another modal is open");
            return false;
        }
        let department = department.trim();
        if department.is_empty() {
            self.alert(Message::SelectDepartmentFirst);
            return false;
        }

        self.create.department = Some(department.to_string());
        self.surface.open_create_modal(department);
        self.surface.set_submit_enabled(true);
        true
    }

    /// Closes the create modal. A submit abandoned mid-request (its future
    /// dropped) leaves `in_flight` set; closing clears it.
    pub fn close_create_modal(&mut self) {
        if self.create.in_flight {
            warn!("create modal closed with an abandoned request");
            self.surface.set_submit_enabled(true);
        }
        self.create = CreateModal::default();
        self.surface.close_create_modal();
    }

    /// Submits the create modal with the raw input text.
    pub async fn submit_create(&mut self, input: &str) -> SubmitOutcome {
        if self.create.in_flight {
            return SubmitOutcome::Ignored;
        }
        let Some(department) = self.create.department.clone() else {
            return SubmitOutcome::Ignored;
        };

        let title = input.trim();
        if title.is_empty() {
            self.surface.mark_input_invalid();
            return SubmitOutcome::Invalid;
        }

        let task = NewTask::new(title, &department, self.host.user_name());
        self.create.in_flight = true;
        self.surface.set_submit_enabled(false);
        let result = self.api.create_task(&task).await;
        self.create.in_flight = false;
        self.surface.set_submit_enabled(true);

        match result {
            Ok(()) => {
                info!(department = %department, "task created");
                self.close_create_modal();
                self.alert(Message::TaskCreated {
                    title: task.title,
                    department,
                });
                self.reload().await;
                SubmitOutcome::Created
            }
            Err(e) => {
                self.alert_error(&e);
                SubmitOutcome::Failed
            }
        }
    }

    pub fn open_complete_confirm(&mut self, id: TaskId) -> bool {
        self.open_confirm(ConfirmAction::Complete { id })
    }

    pub fn open_delete_confirm(&mut self, id: TaskId, title: &str) -> bool {
        let opened = self.open_confirm(ConfirmAction::Delete {
            id,
            title: title.to_string(),
        });
        if opened {
            self.store.task_to_delete_id = Some(id);
        }
        opened
    }

    /// Asks to delete every done task of the current list. Alerts and opens
    /// nothing when there is none.
    pub fn open_clear_done_confirm(&mut self) -> bool {
        if self.any_modal_open() {
            warn!("confirm dialog refused: another modal is open");
            return false;
        }
        let ids: Vec<TaskId> = self
            .tasks()
            .iter()
            .filter(|task| task.status.is_done())
            .map(|task| task.id)
            .collect();
        if ids.is_empty() {
            self.alert(Message::NoDoneTasks);
            return false;
        }
        self.open_confirm(ConfirmAction::ClearDone { ids })
    }

    fn open_confirm(&mut self, action: ConfirmAction) -> bool {
        if self.any_modal_open() {
            warn!(?action, "confirm dialog refused: another modal is open");
            return false;
        }
        self.surface.open_confirm(&action.prompt().to_string());
        self.surface.set_submit_enabled(true);
        self.confirm.pending = Some(action);
        true
    }

    /// Runs the bound action once. The dialog closes whatever the outcome.
    pub async fn confirm(&mut self) -> ConfirmOutcome {
        if self.confirm.in_flight {
            return ConfirmOutcome::Ignored;
        }
        let Some(action) = self.confirm.pending.clone() else {
            return ConfirmOutcome::Ignored;
        };

        self.confirm.in_flight = true;
        self.surface.set_submit_enabled(false);
        let result = match &action {
            ConfirmAction::Complete { id } => self.api.complete_task(*id, self.host.user_name()).await,
            ConfirmAction::Delete { id, .. } => self.api.delete_task(*id).await,
            ConfirmAction::ClearDone { ids } => self.delete_all(ids).await,
        };
        self.confirm.in_flight = false;
        self.surface.set_submit_enabled(true);
        self.close_confirm();

        match result {
            Ok(()) => {
                info!(?action, "confirmed action done");
                if let ConfirmAction::ClearDone { ids } = &action {
                    self.alert(Message::DoneCleared(ids.len()));
                }
                self.reload().await;
                ConfirmOutcome::Done
            }
            Err(e) => {
                self.alert_error(&e);
                ConfirmOutcome::Failed
            }
        }
    }

    /// Stops at the first failed delete; later ids are left untouched.
    async fn delete_all(&self, ids: &[TaskId]) -> Result<(), ApiError> {
        for id in ids {
            self.api.delete_task(*id).await?;
        }
        Ok(())
    }

    /// Closes the dialog and drops the pending action without any request.
    /// Also clears a confirm abandoned mid-request.
    pub fn cancel_confirm(&mut self) {
        if self.confirm.in_flight {
            warn!("confirm dialog cancelled with an abandoned request");
            self.surface.set_submit_enabled(true);
        }
        self.close_confirm();
    }

    fn close_confirm(&mut self) {
        self.confirm = ConfirmDialog::default();
        self.store.task_to_delete_id = None;
        self.surface.close_confirm();
    }
}
