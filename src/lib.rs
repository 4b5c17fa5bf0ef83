//! # deptask - Department task tracker client
//!
//! Client for the departmental task tracker mini-app. It renders two screens
//! (department list, task list) and performs four operations against the
//! remote HTTP API: create, list, complete and delete tasks.
//!
//! ## Features
//!
//! - **API Client**: One round trip per operation, domain vs transport errors
//! - **Navigation**: Department and task screens with list reloads
//! - **Rendering**: Task list markup with escaped user text
//! - **Modals**: Create-task modal and confirm dialog, one at a time
//! - **Terminal Session**: The same flows driven from a terminal
//!
//! ## Usage
//!
//! ```rust,no_run
//! use deptask::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
