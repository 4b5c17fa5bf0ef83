use crate::libs::{
    messages::Message,
    store::DepartmentFilter,
    task::{done_tasks, Task},
    terminal::TerminalSurface,
    view::View,
};
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Department to show; all departments when omitted
    #[arg(short, long)]
    department: Option<String>,
    /// Show only the most recent done tasks
    #[arg(long)]
    done: bool,
}

pub async fn cmd(args: ListArgs) -> Result<()> {
    let surface = match args.done {
        true => TerminalSurface::without_list(),
        false => TerminalSurface::new(),
    };
    let (mut app, _) = super::session(surface)?;
    app.select_department(DepartmentFilter::from(args.department)).await;
    super::ensure_loaded(app.list())?;

    if args.done {
        let done: Vec<Task> = done_tasks(app.tasks()).into_iter().cloned().collect();
        msg_print!(Message::DoneTasksHeader(app.department_title()), true);
        match done.is_empty() {
            true => msg_info!(Message::NoDoneTasks),
            false => View::tasks(&done),
        }
    }
    Ok(())
}
