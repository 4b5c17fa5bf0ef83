pub mod app;
pub mod clear;
pub mod complete;
pub mod create;
pub mod delete;
pub mod init;
pub mod list;
pub mod render;

use crate::api::{DepartmentTasks, TaskApi};
use crate::libs::{
    app::MiniApp,
    config::Config,
    host::ConfiguredHost,
    messages::Message,
    modal::{ConfirmOutcome, SubmitOutcome},
    render::ListRegion,
    store::DepartmentFilter,
    surface::Surface,
    task::TaskId,
};
use crate::{msg_bail_anyhow, msg_info};
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};
use tracing::debug;

const AFTER_HELP: &str = "Examples:
  deptask init
  deptask app
  deptask list -d Sales
  deptask list -d Sales --done
  deptask create \"Call client\" -d Sales
  deptask complete 12
  deptask delete 12 -y
  deptask clear -d Sales";

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure departments and display name")]
    Init(init::InitArgs),
    #[command(about = "Interactive session: departments and tasks screens")]
    App,
    #[command(about = "List tasks of a department")]
    List(list::ListArgs),
    #[command(about = "Create a task in a department")]
    Create(create::CreateArgs),
    #[command(about = "Mark a task as done")]
    Complete(complete::CompleteArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Delete every done task of a department")]
    Clear(clear::ClearArgs),
    #[command(about = "Print the task list markup of the mini-app")]
    Render(render::RenderArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true), after_help = AFTER_HELP)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::App => app::cmd().await,
            Commands::List(args) => list::cmd(args).await,
            Commands::Create(args) => create::cmd(args).await,
            Commands::Complete(args) => complete::cmd(args).await,
            Commands::Delete(args) => delete::cmd(args).await,
            Commands::Clear(args) => clear::cmd(args).await,
            Commands::Render(args) => render::cmd(args).await,
        }
    }
}

/// Starts a session against the backend, with the configured display name
/// standing in for the host session.
pub(crate) fn session<S: Surface>(surface: S) -> Result<(MiniApp<DepartmentTasks, S>, Config)> {
    let config = Config::read()?;
    let host = ConfiguredHost::new(config.first_name.clone());
    Ok((MiniApp::new(DepartmentTasks::new(), surface, &host), config))
}

/// Asks for confirmation of the open dialog, then confirms or cancels it.
pub(crate) async fn confirm_or_cancel<S: Surface>(
    app: &mut MiniApp<DepartmentTasks, S>,
    assume_yes: bool,
) -> Result<ConfirmOutcome> {
    let Some(prompt) = app.confirm_dialog().pending().map(|action| action.prompt()) else {
        return Ok(ConfirmOutcome::Ignored);
    };

    let confirmed = assume_yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt.to_string())
            .default(false)
            .interact()?;

    if confirmed {
        Ok(app.confirm().await)
    } else {
        app.cancel_confirm();
        msg_info!(Message::OperationCancelled);
        Ok(ConfirmOutcome::Ignored)
    }
}

/// Fails the command when the confirmed action failed. A cancelled dialog
/// is not a failure.
pub(crate) fn ensure_done(outcome: ConfirmOutcome) -> Result<()> {
    match outcome {
        ConfirmOutcome::Done | ConfirmOutcome::Ignored => Ok(()),
        ConfirmOutcome::Failed => msg_bail_anyhow!(Message::ActionNotDone),
    }
}

/// Fails the command unless the task was created.
pub(crate) fn ensure_created(outcome: SubmitOutcome) -> Result<()> {
    match outcome {
        SubmitOutcome::Created => Ok(()),
        SubmitOutcome::Invalid | SubmitOutcome::Failed | SubmitOutcome::Ignored => {
            msg_bail_anyhow!(Message::TaskNotCreated)
        }
    }
}

/// Fails the command when the last list load failed.
pub(crate) fn ensure_loaded(list: &ListRegion) -> Result<()> {
    if let ListRegion::Failed(_) = list {
        msg_bail_anyhow!(Message::ListNotLoaded);
    }
    Ok(())
}

/// Title of task `id` for the delete prompt. The lookup is best effort: it
/// neither alerts nor touches the session's list.
pub(crate) async fn lookup_title<S: Surface>(app: &MiniApp<DepartmentTasks, S>, id: TaskId) -> String {
    let title = match app.api().list_tasks(&DepartmentFilter::All).await {
        Ok(tasks) => tasks.into_iter().find(|task| task.id == id).map(|task| task.title),
        Err(e) => {
            debug!(id, "title lookup failed: {e}");
            None
        }
    };
    title.unwrap_or_else(|| format!("#{}", id))
}
