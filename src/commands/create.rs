use crate::libs::{messages::Message, terminal::TerminalSurface};
use crate::msg_bail_anyhow;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Task title
    #[arg(required = true)]
    title: String,
    /// Department the task belongs to
    #[arg(short, long)]
    department: String,
}

pub async fn cmd(args: CreateArgs) -> Result<()> {
    let (mut app, _) = super::session(TerminalSurface::without_list())?;
    if !app.open_create_modal(&args.department) {
        msg_bail_anyhow!(Message::TaskNotCreated);
    }
    super::ensure_created(app.submit_create(&args.title).await)
}
