//! # Thread state
//!
//! Process-wide state of the currently displayed thread: the post registry and
//! the banner counters. Both are reset at the start of every full hydration and
//! mutated incrementally until the next one replaces them.

use std::collections::BTreeMap;

use crate::posts::Post;

/// Live post models of the current thread, keyed by post id.
#[derive(Debug, Default)]
pub struct PostCollection {
    models: BTreeMap<u64, Post>,
    /// Posts below this id are outside the loaded window
    pub lowest_id: u64,
}

impl PostCollection {
    /// Register a model. A second model with the same id replaces the first,
    /// so the registry never holds more than one model per id.
    pub fn add(&mut self, post: Post) -> &Post {
        let id = post.id();
        self.models.insert(id, post);
        &self.models[&id]
    }

    pub fn get(&self, id: u64) -> Option<&Post> {
        self.models.get(&id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.models.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Post> {
        self.models.values()
    }

    /// Ids of all models still open for editing, detached from the registry so
    /// callers may mutate it while walking the list.
    pub fn editing_snapshot(&self) -> Vec<u64> {
        self.iter().filter(|p| p.editing()).map(Post::id).collect()
    }

    pub fn clear(&mut self) {
        self.models.clear();
        self.lowest_id = 0;
    }
}

/// Running post and image tally rendered into the thread banner.
#[derive(Debug, Default)]
pub struct PostCounters {
    posts: u32,
    images: u32,
    text: String,
}

impl PostCounters {
    /// Externally set thread post and image counts.
    pub fn set_post_count(&mut self, posts: u32, images: u32) {
        self.posts = posts;
        self.images = images;
        self.render();
    }

    /// Count one more streamed-in post and/or image.
    pub fn increment_post_count(&mut self, post: bool, has_image: bool) {
        if post {
            self.posts = self.posts.saturating_add(1);
        }
        if has_image {
            self.images = self.images.saturating_add(1);
        }
        self.render();
    }

    pub fn posts(&self) -> u32 {
        self.posts
    }

    pub fn images(&self) -> u32 {
        self.images
    }

    /// Current banner text.
    pub fn text(&self) -> &str {
        &self.text
    }

    fn render(&mut self) {
        self.text = if self.posts == 0 && self.images == 0 {
            String::new()
        } else {
            format!("{} / {}", self.posts, self.images)
        };
    }
}

/// Lifecycle owner of the registry and counters.
#[derive(Debug, Default)]
pub struct ThreadState {
    pub posts: PostCollection,
    pub counters: PostCounters,
}

impl ThreadState {
    /// Back to "no thread loaded".
    pub fn reset(&mut self) {
        self.posts.clear();
        self.counters.set_post_count(0, 0);
    }
}
