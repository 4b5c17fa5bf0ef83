//! Core of the department tasks mini-app.
//!
//! ## Features
//!
//! - **Task Model**: Wire records and the `active -> done` status
//! - **Host Bridge**: Optional host session with an `Admin` fallback name
//! - **View Store**: Current screen, department filter, pending delete target
//! - **Navigation**: Department and task screens, list reloads
//! - **Rendering**: Task list markup with escaped user text
//! - **Modals**: Create-task modal and confirm dialog with in-flight guards
//! - **Surfaces**: Markup page state and a terminal rendition
//! - **Configuration**: Departments and display name for terminal sessions
//!
//! ## Usage
//!
//! ```rust,no_run
//! use deptask::api::DepartmentTasks;
//! use deptask::libs::{app::MiniApp, host::NoHost, markup::MarkupSurface, store::DepartmentFilter};
//!
//! # async fn run() {
//! let mut app = MiniApp::new(DepartmentTasks::new(), MarkupSurface::new(), &NoHost);
//! app.select_department(DepartmentFilter::Named("Sales".into())).await;
//! println!("{}", app.surface().list_html);
//! # }
//! ```

pub mod app;
pub mod config;
pub mod data_storage;
pub mod host;
pub mod markup;
pub mod messages;
pub mod modal;
pub mod navigation;
pub mod render;
pub mod store;
pub mod surface;
pub mod task;
pub mod terminal;
pub mod view;
