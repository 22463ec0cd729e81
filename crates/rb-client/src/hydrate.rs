//! # Thread hydration
//!
//! Attaches live post models to a server-rendered thread page without
//! re-rendering it, then applies the client-only adjustments the server leaves
//! out for cacheability.

use std::iter;

use rb_core::{HydrateError, Result, ThreadPayload};

use crate::env::ClientEnv;
use crate::extract::{extract_post, Extracted};
use crate::localize::{localize_names, localize_omitted, set_thread_title};
use crate::page::{Page, PAYLOAD_ELEMENT};
use crate::state::ThreadState;

/// The thread page currently on screen together with its live state.
#[derive(Default)]
pub struct ThreadPage {
    pub page: Page,
    pub state: ThreadState,
}

impl ThreadPage {
    pub fn new(markup: &str) -> Self {
        Self {
            page: Page::parse(markup),
            state: ThreadState::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The viewer is banned from the board; nothing was attached
    Banned,
    Hydrated {
        thread: u64,
        registered: usize,
        hidden: usize,
        missing: usize,
    },
}

pub struct Hydrator<'a> {
    env: ClientEnv<'a>,
}

impl<'a> Hydrator<'a> {
    pub fn new(env: ClientEnv<'a>) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &ClientEnv<'a> {
        &self.env
    }

    /// Hydrate a thread page. When `markup` is given it replaces the current
    /// thread region first; otherwise the markup already on the page is used.
    #[tracing::instrument(skip_all, fields(replace = markup.is_some()))]
    pub fn hydrate(&self, thread_page: &mut ThreadPage, markup: Option<&str>) -> Result<Outcome> {
        let ThreadPage { page, state } = thread_page;
        let env = &self.env;

        if let Some(markup) = markup {
            page.replace(markup);
            // Models of the old markup have no fragments left to attach to
            state.reset();
        }
        if env.session.is_banned() {
            tracing::info!("viewer is banned from this board");
            return Ok(Outcome::Banned);
        }
        env.session.extract_configs();

        // Reset before parsing so a failed parse leaves "no thread loaded"
        state.reset();
        let raw = page
            .payload()
            .ok_or(HydrateError::MissingPayload(PAYLOAD_ELEMENT))?;
        let payload: ThreadPayload = serde_json::from_str(&raw)?;
        let (mut thread, replies) = payload.into_parts();

        env.connection.set_sync_counter(thread.log_ctr);
        state.counters.set_post_count(thread.post_ctr, thread.image_ctr);
        state.posts.lowest_id = replies.first().map_or(thread.id(), |p| p.id);
        if let Some(image) = thread.post.image.as_mut() {
            image.large = true;
        }

        localize_omitted(page, env.options, env.lang)?;
        localize_names(page, env.options, env.lang)?;
        set_thread_title(env.ui, &thread);

        let op = thread.id();
        let mut outcome = (0, 0, 0);
        for post in iter::once(thread.post).chain(replies) {
            match extract_post(env, page, &mut state.posts, post, op)? {
                Extracted::Registered => outcome.0 += 1,
                Extracted::Hidden => outcome.1 += 1,
                Extracted::Missing => outcome.2 += 1,
            }
        }

        // Later posts may have made placeholder links in still-open posts
        // resolvable, so open bodies are re-parsed once everything is in.
        for id in state.posts.editing_snapshot() {
            if let Some(post) = state.posts.get(id) {
                env.renderer.reparse_body(page, post);
            }
        }

        let (registered, hidden, missing) = outcome;
        tracing::info!(thread = op, registered, hidden, missing, "thread hydrated");
        Ok(Outcome::Hydrated {
            thread: op,
            registered,
            hidden,
            missing,
        })
    }
}
