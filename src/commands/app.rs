//! Interactive terminal session mirroring the mini-app: a department screen,
//! a task screen, the create modal and the confirm dialog.

use crate::api::DepartmentTasks;
use crate::libs::{
    app::MiniApp,
    config::Config,
    messages::Message,
    modal::SubmitOutcome,
    store::{DepartmentFilter, Screen},
    task::Task,
    terminal::TerminalSurface,
};
use crate::{msg_info, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

type Session = MiniApp<DepartmentTasks, TerminalSurface>;

pub async fn cmd() -> Result<()> {
    let (mut app, config) = super::session(TerminalSurface::new())?;

    loop {
        match app.store().current_view {
            Screen::Departments => {
                if !departments_screen(&mut app, &config).await? {
                    break;
                }
            }
            Screen::Tasks => tasks_screen(&mut app, &config).await?,
        }
    }
    Ok(())
}

/// Returns `false` when the user leaves the session.
async fn departments_screen(app: &mut Session, config: &Config) -> Result<bool> {
    let mut items = vec![Message::MenuAllTasks.to_string()];
    items.extend(config.departments.iter().cloned());
    items.push(Message::MenuExit.to_string());

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectDepartment.to_string())
        .items(&items)
        .default(0)
        .interact()?;

    if selection == items.len() - 1 {
        return Ok(false);
    }
    let filter = match selection {
        0 => DepartmentFilter::All,
        n => DepartmentFilter::Named(items[n].clone()),
    };
    app.select_department(filter).await;
    Ok(true)
}

async fn tasks_screen(app: &mut Session, config: &Config) -> Result<()> {
    let options = [
        Message::MenuNewTask,
        Message::MenuCompleteTask,
        Message::MenuDeleteTask,
        Message::MenuClearDone,
        Message::MenuRefresh,
        Message::MenuBack,
    ];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectTaskAction.to_string())
        .items(&options)
        .default(0)
        .interact()?;

    match selection {
        0 => create_task(app, config).await?,
        1 => complete_task(app).await?,
        2 => delete_task(app).await?,
        3 => clear_done(app).await?,
        4 => app.reload().await,
        _ => app.show_departments(),
    }
    Ok(())
}

async fn create_task(app: &mut Session, config: &Config) -> Result<()> {
    let department = match app.store().current_department.name() {
        Some(name) => name.to_string(),
        None => {
            if config.departments.is_empty() {
                msg_warning!(Message::DepartmentsRequired);
                return Ok(());
            }
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::SelectDepartment.to_string())
                .items(&config.departments)
                .default(0)
                .interact()?;
            config.departments[selection].clone()
        }
    };

    if !app.open_create_modal(&department) {
        return Ok(());
    }

    loop {
        let title: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTitle.to_string())
            .allow_empty(true)
            .interact_text()?;

        match app.submit_create(&title).await {
            SubmitOutcome::Created | SubmitOutcome::Ignored => return Ok(()),
            SubmitOutcome::Invalid | SubmitOutcome::Failed => {
                let retry = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::RetryCreate.to_string())
                    .default(true)
                    .interact()?;
                if !retry {
                    app.close_create_modal();
                    return Ok(());
                }
            }
        }
    }
}

async fn complete_task(app: &mut Session) -> Result<()> {
    let active: Vec<Task> = app.tasks().iter().filter(|t| t.can_complete()).cloned().collect();
    let Some(task) = pick_task(&active, Message::NoActiveTasks)? else {
        return Ok(());
    };

    if app.open_complete_confirm(task.id) {
        super::confirm_or_cancel(app, false).await?;
    }
    Ok(())
}

async fn delete_task(app: &mut Session) -> Result<()> {
    let tasks = app.tasks().to_vec();
    let Some(task) = pick_task(&tasks, Message::NoTasks)? else {
        return Ok(());
    };

    if app.open_delete_confirm(task.id, &task.title) {
        super::confirm_or_cancel(app, false).await?;
    }
    Ok(())
}

async fn clear_done(app: &mut Session) -> Result<()> {
    if app.open_clear_done_confirm() {
        super::confirm_or_cancel(app, false).await?;
    }
    Ok(())
}

fn pick_task<'a>(tasks: &'a [Task], when_empty: Message) -> Result<Option<&'a Task>> {
    if tasks.is_empty() {
        msg_info!(when_empty);
        return Ok(None);
    }

    let labels: Vec<String> = tasks.iter().map(|t| format!("#{} {}", t.id, t.title)).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectTask.to_string())
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(tasks.get(selection))
}
