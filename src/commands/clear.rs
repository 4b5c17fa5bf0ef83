use crate::libs::{store::DepartmentFilter, terminal::TerminalSurface};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Department to clear; all departments when omitted
    #[arg(short, long)]
    department: Option<String>,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: ClearArgs) -> Result<()> {
    let (mut app, _) = super::session(TerminalSurface::without_list())?;
    app.select_department(DepartmentFilter::from(args.department)).await;
    super::ensure_loaded(app.list())?;

    if app.open_clear_done_confirm() {
        let outcome = super::confirm_or_cancel(&mut app, args.yes).await?;
        super::ensure_done(outcome)?;
    }
    Ok(())
}
