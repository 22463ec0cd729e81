//! Collaborators for hydrating a saved page outside a browser. Side effects
//! that would reach the browser chrome are recorded or logged instead.

use std::cell::RefCell;

use chrono::{Local, TimeZone};
use rb_client::{Page, Post, PostRenderer};
use rb_core::{Connection, PostData, Session, Ui};

#[derive(Default)]
pub struct OfflineUi {
    title: RefCell<String>,
}

impl OfflineUi {
    pub fn title(&self) -> String {
        self.title.borrow().clone()
    }
}

impl Ui for OfflineUi {
    fn set_title(&self, title: &str) {
        *self.title.borrow_mut() = title.to_string();
    }

    fn notify_about_reply(&self, post: &PostData) {
        tracing::info!(post = post.id, thread = post.op, "reply to one of your posts");
    }
}

pub struct OfflineConnection;

impl Connection for OfflineConnection {
    fn set_sync_counter(&self, ctr: u64) {
        tracing::debug!(ctr, "sync counter positioned");
    }
}

pub struct OfflineSession {
    pub banned: bool,
}

impl Session for OfflineSession {
    fn is_banned(&self) -> bool {
        self.banned
    }

    fn extract_configs(&self) {}
}

/// Minimal post view rendering for saved pages.
pub struct OfflineRenderer;

impl PostRenderer for OfflineRenderer {
    fn render_time(&self, page: &mut Page, post: &Post) {
        let Some(el) = post.view().el(page) else {
            return;
        };
        let Ok(Some(time)) = page.first_within(el, "time") else {
            return;
        };
        if let Some(local) = Local.timestamp_opt(post.data().time, 0).single() {
            page.set_text(time, &local.format("%d %b %Y (%a) %H:%M").to_string());
        }
    }

    fn render_name(&self, page: &mut Page, post: &Post) {
        let (Some(el), Some(auth)) = (post.view().el(page), post.data().auth.as_deref()) else {
            return;
        };
        if let Ok(Some(staff)) = page.first_within(el, ".staff") {
            page.set_text(staff, &format!("## {auth}"));
        }
    }

    fn render_image(&self, page: &mut Page, post: &Post, reveal: bool) {
        if reveal {
            return;
        }
        let Some(el) = post.view().el(page) else {
            return;
        };
        if let Ok(Some(thumb)) = page.first_within(el, "figure img") {
            page.remove(thumb);
        }
    }

    fn reparse_body(&self, _page: &mut Page, post: &Post) {
        tracing::debug!(post = post.id(), "body re-parse requested");
    }
}
