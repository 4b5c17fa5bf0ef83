use crate::libs::terminal::TerminalSurface;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// Task ID
    id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: CompleteArgs) -> Result<()> {
    let (mut app, _) = super::session(TerminalSurface::without_list())?;
    if app.open_complete_confirm(args.id) {
        let outcome = super::confirm_or_cancel(&mut app, args.yes).await?;
        super::ensure_done(outcome)?;
    }
    Ok(())
}
