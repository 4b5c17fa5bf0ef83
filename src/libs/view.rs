use super::messages::Message;
use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "DEPARTMENT", "STATUS", "TITLE", "AUTHOR", "COMPLETED BY"]);
        for task in tasks {
            let status = match task.status.is_done() {
                true => Message::StatusDone,
                false => Message::StatusActive,
            };
            table.add_row(row![
                task.id,
                task.department,
                status,
                task.title,
                task.author,
                task.last_modified_by.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();
    }
}
