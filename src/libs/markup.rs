//! Page state of the mini-app kept as markup.

use super::render::{escape_html, ListRegion, TaskListRenderer};
use super::store::Screen;
use super::surface::Surface;

/// State of the create-task modal as shown on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateModalView {
    pub department: String,
    pub input_value: String,
    pub input_invalid: bool,
    pub input_focused: bool,
}

#[derive(Debug, Clone)]
pub struct MarkupSurface {
    pub screen: Screen,
    pub tasks_title: String,
    /// HTML of the task list region.
    pub list_html: String,
    pub create_modal: Option<CreateModalView>,
    pub confirm_text: Option<String>,
    pub submit_enabled: bool,
    /// Every alert raised so far, oldest first.
    pub alerts: Vec<String>,
}

impl Default for MarkupSurface {
    fn default() -> Self {
        Self {
            screen: Screen::Departments,
            tasks_title: String::new(),
            list_html: TaskListRenderer::render(&ListRegion::Loading),
            create_modal: None,
            confirm_text: None,
            submit_enabled: true,
            alerts: Vec::new(),
        }
    }
}

impl MarkupSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_alert(&self) -> Option<&str> {
        self.alerts.last().map(String::as_str)
    }

    /// Both screens, with the inactive one hidden.
    pub fn page_html(&self) -> String {
        let hidden = |screen: Screen| if self.screen == screen { "" } else { " hidden" };
        format!(
            "<section id=\"departments-screen\" class=\"screen{}\"></section>\
             <section id=\"tasks-screen\" class=\"screen{}\"><h2>{}</h2><div id=\"tasks-list\">{}</div></section>",
            hidden(Screen::Departments),
            hidden(Screen::Tasks),
            escape_html(&self.tasks_title),
            self.list_html
        )
    }
}

impl Surface for MarkupSurface {
    fn show_departments(&mut self) {
        self.screen = Screen::Departments;
    }

    fn show_tasks(&mut self, title: &str) {
        self.screen = Screen::Tasks;
        self.tasks_title = title.to_string();
    }

    fn show_list(&mut self, region: &ListRegion) {
        self.list_html = TaskListRenderer::render(region);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn open_create_modal(&mut self, department: &str) {
        self.create_modal = Some(CreateModalView {
            department: department.to_string(),
            input_value: String::new(),
            input_invalid: false,
            input_focused: true,
        });
    }

    fn close_create_modal(&mut self) {
        self.create_modal = None;
    }

    fn mark_input_invalid(&mut self) {
        if let Some(modal) = self.create_modal.as_mut() {
            modal.input_invalid = true;
            modal.input_focused = true;
        }
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn open_confirm(&mut self, text: &str) {
        self.confirm_text = Some(text.to_string());
    }

    fn close_confirm(&mut self) {
        self.confirm_text = None;
    }
}
