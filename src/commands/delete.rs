use crate::libs::terminal::TerminalSurface;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: DeleteArgs) -> Result<()> {
    let (mut app, _) = super::session(TerminalSurface::without_list())?;
    let title = super::lookup_title(&app, args.id).await;
    if app.open_delete_confirm(args.id, &title) {
        let outcome = super::confirm_or_cancel(&mut app, args.yes).await?;
        super::ensure_done(outcome)?;
    }
    Ok(())
}
