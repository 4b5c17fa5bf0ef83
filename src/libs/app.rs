//! The mini-app session.
//!
//! [`MiniApp`] is the single owner of everything one session touches: the API
//! client, the page surface, the view store, the resolved user name, the last
//! loaded list and both modal controllers. Navigation lives in
//! [`navigation`](super::navigation), modal handling in [`modal`](super::modal).

use super::host::{HostBridge, HostSession};
use super::messages::Message;
use super::modal::{ConfirmDialog, CreateModal};
use super::render::ListRegion;
use super::store::ViewStore;
use super::surface::Surface;
use super::task::Task;
use crate::api::{ApiError, TaskApi};
use tracing::warn;

pub struct MiniApp<A: TaskApi, S: Surface> {
    pub(crate) api: A,
    pub(crate) surface: S,
    pub(crate) store: ViewStore,
    pub(crate) host: HostBridge,
    pub(crate) list: ListRegion,
    pub(crate) create: CreateModal,
    pub(crate) confirm: ConfirmDialog,
}

impl<A: TaskApi, S: Surface> MiniApp<A, S> {
    /// Starts a session on the department screen. The host session is
    /// consulted once, here.
    pub fn new(api: A, mut surface: S, host: &dyn HostSession) -> Self {
        let host = HostBridge::init(host);
        surface.show_departments();

        Self {
            api,
            surface,
            store: ViewStore::new(),
            host,
            list: ListRegion::Loading,
            create: CreateModal::default(),
            confirm: ConfirmDialog::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn store(&self) -> &ViewStore {
        &self.store
    }

    pub fn user_name(&self) -> &str {
        self.host.user_name()
    }

    pub fn list(&self) -> &ListRegion {
        &self.list
    }

    /// Tasks of the last successful load, in backend order.
    pub fn tasks(&self) -> &[Task] {
        self.list.tasks()
    }

    pub fn create_modal(&self) -> &CreateModal {
        &self.create
    }

    pub fn confirm_dialog(&self) -> &ConfirmDialog {
        &self.confirm
    }

    pub(crate) fn any_modal_open(&self) -> bool {
        self.create.is_open() || self.confirm.is_open()
    }

    pub(crate) fn set_list(&mut self, region: ListRegion) {
        self.surface.show_list(&region);
        self.list = region;
    }

    pub(crate) fn alert(&mut self, message: Message) {
        self.surface.alert(&message.to_string());
    }

    pub(crate) fn alert_error(&mut self, error: &ApiError) {
        if !error.is_domain() {
            warn!("request failed: {error}");
        }
        self.alert(Message::RequestFailed(error.to_string()));
    }
}
