//! Ephemeral view state of one mini-app session.

use super::task::TaskId;
use std::fmt;

/// The two screens of the mini-app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Departments,
    Tasks,
}

/// Department filter for the task list. `All` means no filter at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DepartmentFilter {
    #[default]
    All,
    Named(String),
}

impl DepartmentFilter {
    /// Parses a user-facing department value. `"all"` (any case) and blank
    /// input mean no filter.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            DepartmentFilter::All
        } else {
            DepartmentFilter::Named(value.to_string())
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            DepartmentFilter::All => None,
            DepartmentFilter::Named(name) => Some(name),
        }
    }
}

impl From<Option<String>> for DepartmentFilter {
    fn from(value: Option<String>) -> Self {
        value.map(|v| DepartmentFilter::parse(&v)).unwrap_or_default()
    }
}

impl fmt::Display for DepartmentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepartmentFilter::All => write!(f, "all"),
            DepartmentFilter::Named(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewStore {
    pub current_view: Screen,
    pub current_department: DepartmentFilter,
    /// Pending delete target, cleared whenever the confirm dialog closes.
    pub task_to_delete_id: Option<TaskId>,
}

impl ViewStore {
    pub fn new() -> Self {
        Self::default()
    }
}
