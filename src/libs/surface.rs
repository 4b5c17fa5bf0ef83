//! The page side of the mini-app: everything the controllers show to the
//! user goes through a [`Surface`].
//!
//! Two implementations ship with the crate. [`MarkupSurface`] keeps the page
//! state as generated markup, the way the mini-app shell displays it.
//! [`TerminalSurface`] prints the same state to a terminal.
//!
//! [`MarkupSurface`]: super::markup::MarkupSurface
//! [`TerminalSurface`]: super::terminal::TerminalSurface

use super::render::ListRegion;

pub trait Surface {
    /// Shows the department screen and hides the task screen.
    fn show_departments(&mut self);

    /// Shows the task screen under `title` and hides the department screen.
    fn show_tasks(&mut self, title: &str);

    /// Replaces the content of the task list region.
    fn show_list(&mut self, region: &ListRegion);

    /// Blocking notification, used for every success and error message.
    fn alert(&mut self, message: &str);

    /// Opens the create modal for `department` with a cleared, focused input.
    fn open_create_modal(&mut self, department: &str);

    fn close_create_modal(&mut self);

    /// Applies the error style to the title input and refocuses it.
    fn mark_input_invalid(&mut self);

    /// Enables or disables the control that submits the open modal.
    fn set_submit_enabled(&mut self, enabled: bool);

    fn open_confirm(&mut self, text: &str);

    fn close_confirm(&mut self);
}
