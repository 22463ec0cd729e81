//! # Core Traits (Ports)
//!
//! The environment the hydration core runs in. Each port is a thin contract;
//! the browser shell, the CLI and the tests provide their own implementations.

use crate::models::PostData;

#[cfg(feature = "testing")]
use mockall::automock;

/// Live-update transport.
#[cfg_attr(feature = "testing", automock)]
pub trait Connection {
    /// Position the sync cursor. Must be called before any post is extracted.
    fn set_sync_counter(&self, ctr: u64);
}

/// Page chrome outside the thread region.
#[cfg_attr(feature = "testing", automock)]
pub trait Ui {
    /// Set the visible page title.
    fn set_title(&self, title: &str);

    /// Best-effort desktop notification about a reply to one of the viewer's
    /// posts. Fire-and-forget: the environment is free to ignore it.
    fn notify_about_reply(&self, post: &PostData);
}

/// Session-level queries against the freshly loaded page.
#[cfg_attr(feature = "testing", automock)]
pub trait Session {
    /// Pure query. True when the page is a ban notice for this board.
    fn is_banned(&self) -> bool;

    /// Read page-embedded configuration. Runs before the payload is parsed.
    fn extract_configs(&self);
}
