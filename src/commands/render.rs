use crate::libs::{markup::MarkupSurface, store::DepartmentFilter};
use crate::msg_error;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Department to render; all departments when omitted
    #[arg(short, long)]
    department: Option<String>,
    /// Print both screens instead of the list region only
    #[arg(short, long)]
    page: bool,
}

pub async fn cmd(args: RenderArgs) -> Result<()> {
    let (mut app, _) = super::session(MarkupSurface::new())?;
    app.select_department(DepartmentFilter::from(args.department)).await;

    let surface = app.surface();
    for alert in &surface.alerts {
        msg_error!(alert);
    }
    match args.page {
        true => println!("{}", surface.page_html()),
        false => println!("{}", surface.list_html),
    }
    super::ensure_loaded(app.list())
}
