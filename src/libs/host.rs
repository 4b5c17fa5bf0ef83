//! Bridge to the optional host session of the embedding chat platform.
//!
//! The host may or may not be there. When it is, it gets asked to expand the
//! viewport and may provide the first name of the current user. Neither is
//! required: a failed expand is ignored and a missing name falls back to
//! [`FALLBACK_USER_NAME`].

use anyhow::Result;
use tracing::{debug, warn};

/// Display name used when the host does not provide one.
pub const FALLBACK_USER_NAME: &str = "Admin";

/// Capabilities the host session may expose.
pub trait HostSession {
    /// Asks the host to expand the viewport to full size. Best effort.
    fn expand(&self) -> Result<()>;

    /// First name of the active user, if the host knows it.
    fn first_name(&self) -> Option<String>;
}

/// Null host: nothing to expand and nobody to name.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHost;

impl HostSession for NoHost {
    fn expand(&self) -> Result<()> {
        Ok(())
    }

    fn first_name(&self) -> Option<String> {
        None
    }
}

/// Host backed by the local configuration, used for terminal sessions.
#[derive(Debug, Default, Clone)]
pub struct ConfiguredHost {
    first_name: Option<String>,
}

impl ConfiguredHost {
    pub fn new(first_name: Option<String>) -> Self {
        Self { first_name }
    }
}

impl HostSession for ConfiguredHost {
    fn expand(&self) -> Result<()> {
        Ok(())
    }

    fn first_name(&self) -> Option<String> {
        self.first_name.clone()
    }
}

/// Values derived from the host session once, at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostBridge {
    user_name: String,
}

impl HostBridge {
    pub fn init(session: &dyn HostSession) -> Self {
        if let Err(e) = session.expand() {
            warn!("viewport expand failed, continuing: {e}");
        }

        let user_name = session
            .first_name()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| FALLBACK_USER_NAME.to_string());
        debug!(user = %user_name, "host session resolved");

        Self { user_name }
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }
}
