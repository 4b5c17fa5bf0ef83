//! Terminal rendition of the mini-app page.
//!
//! Screens become headers, the list region becomes a table and alerts are
//! printed as messages. Input and confirmation prompts are driven by the
//! command that owns the session, so the modal hooks here only print.

use super::messages::Message;
use super::render::ListRegion;
use super::surface::Surface;
use super::view::View;
use crate::{msg_error, msg_info, msg_print, msg_warning};

#[derive(Debug, Default)]
pub struct TerminalSurface {
    quiet_list: bool,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface that skips printing the list region, for one-shot commands
    /// that do not need the refreshed list.
    pub fn without_list() -> Self {
        Self { quiet_list: true }
    }
}

impl Surface for TerminalSurface {
    fn show_departments(&mut self) {}

    fn show_tasks(&mut self, title: &str) {
        if !self.quiet_list {
            msg_print!(Message::TasksHeader(title.to_string()), true);
        }
    }

    fn show_list(&mut self, region: &ListRegion) {
        if self.quiet_list {
            return;
        }
        match region {
            // Nothing to draw while a request is outstanding.
            ListRegion::Loading => {}
            ListRegion::Empty => msg_info!(Message::ListEmpty),
            ListRegion::Failed(error) => msg_error!(Message::ListFailed(error.clone())),
            ListRegion::Tasks(tasks) => View::tasks(tasks),
        }
    }

    fn alert(&mut self, message: &str) {
        msg_print!(message);
    }

    fn open_create_modal(&mut self, _department: &str) {}

    fn close_create_modal(&mut self) {}

    fn mark_input_invalid(&mut self) {
        msg_warning!(Message::TitleRequired);
    }

    fn set_submit_enabled(&mut self, _enabled: bool) {}

    fn open_confirm(&mut self, _text: &str) {}

    fn close_confirm(&mut self) {}
}
