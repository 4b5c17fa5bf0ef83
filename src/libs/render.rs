//! Task list rendering for the mini-app page.
//!
//! The list region is either a placeholder (loading, empty, failed) or the
//! tasks as returned by the backend, in backend order. [`TaskListRenderer`]
//! turns it into the HTML fragment the page shell displays. Active tasks get
//! a "complete" button, every task gets a "delete" button.
//!
//! User text reaches the markup in two contexts: as element text and inside
//! the JavaScript string literal of an `onclick` handler. The first goes
//! through [`escape_html`]; the second goes through [`js_string`] and then
//! [`escape_html`], so a title like `Tom's report` cannot close the literal.

use super::messages::Message;
use super::task::Task;
use std::fmt::Write;

/// Content of the task list region.
#[derive(Debug, Clone, PartialEq)]
pub enum ListRegion {
    Loading,
    Empty,
    Failed(String),
    Tasks(Vec<Task>),
}

impl ListRegion {
    /// Wraps a freshly loaded list, mapping no tasks to the empty placeholder.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        if tasks.is_empty() {
            ListRegion::Empty
        } else {
            ListRegion::Tasks(tasks)
        }
    }

    pub fn tasks(&self) -> &[Task] {
        match self {
            ListRegion::Tasks(tasks) => tasks,
            _ => &[],
        }
    }
}

/// Escapes text for HTML element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes text for the inside of a single-quoted JavaScript string literal.
pub fn js_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            '<' => out.push_str("\\x3C"),
            _ => out.push(c),
        }
    }
    out
}

pub struct TaskListRenderer;

impl TaskListRenderer {
    pub fn render(region: &ListRegion) -> String {
        match region {
            ListRegion::Loading => Self::placeholder("loading", &Message::ListLoading.to_string()),
            ListRegion::Empty => Self::placeholder("empty", &Message::ListEmpty.to_string()),
            ListRegion::Failed(error) => Self::placeholder("error", &Message::ListFailed(error.clone()).to_string()),
            ListRegion::Tasks(tasks) => tasks.iter().map(Self::task_item).collect(),
        }
    }

    fn placeholder(kind: &str, text: &str) -> String {
        format!("<div class=\"placeholder {}\">{}</div>", kind, escape_html(text))
    }

    fn task_item(task: &Task) -> String {
        let (status_class, status_text) = if task.status.is_done() {
            ("done", Message::StatusDone)
        } else {
            ("active", Message::StatusActive)
        };

        let mut html = String::new();
        // Writing into a String cannot fail.
        let _ = write!(html, "<div class=\"task-item {}\" data-id=\"{}\">", status_class, task.id);
        let _ = write!(
            html,
            "<div class=\"task-header\"><span class=\"task-dept\">{}</span><span class=\"task-status {}\">{}</span></div>",
            escape_html(&task.department),
            status_class,
            status_text
        );
        let _ = write!(html, "<div class=\"task-title\">{}</div>", escape_html(&task.title));
        let _ = write!(
            html,
            "<div class=\"task-meta\">{}</div>",
            escape_html(&Message::AuthorLine(task.author.clone()).to_string())
        );
        if let Some(name) = &task.last_modified_by {
            let _ = write!(
                html,
                "<div class=\"task-meta completed-by\">{}</div>",
                escape_html(&Message::CompletedByLine(name.clone()).to_string())
            );
        }

        html.push_str("<div class=\"task-actions\">");
        if task.can_complete() {
            let _ = write!(
                html,
                "<button class=\"btn-complete\" onclick=\"confirmComplete({})\">{}</button>",
                task.id,
                Message::ActionComplete
            );
        }
        let handler = format!("confirmDelete({}, '{}')", task.id, js_string(&task.title));
        let _ = write!(
            html,
            "<button class=\"btn-delete\" onclick=\"{}\">{}</button>",
            escape_html(&handler),
            Message::ActionDelete
        );
        html.push_str("</div></div>");
        html
    }
}
