//! # rb-client
//!
//! Hydrates a server-rendered Rusty-Board thread page into live post models,
//! keeping the banner counters and page title in sync.

pub mod env;
pub mod extract;
pub mod hydrate;
pub mod links;
pub mod localize;
pub mod page;
pub mod posts;
pub mod state;

pub use env::ClientEnv;
pub use extract::{extract_post, should_collapse, Extracted};
pub use hydrate::{Hydrator, Outcome, ThreadPage};
pub use links::localize_links;
pub use localize::{localize_names, localize_omitted, set_thread_title, thread_title};
pub use page::Page;
pub use posts::{Post, PostRenderer, PostView};
pub use state::{PostCollection, PostCounters, ThreadState};

#[cfg(feature = "testing")]
pub use posts::MockPostRenderer;
