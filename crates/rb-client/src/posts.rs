//! # Posts
//!
//! A live post is a single record with two facets: the data model parsed from
//! the payload and the view addressing its server-rendered fragment. The view
//! holds no pointer into the page; it finds its element by id on demand.

use ego_tree::NodeId;
use rb_core::{Image, PostData, PostLink};

use crate::page::Page;

#[cfg(any(test, feature = "testing"))]
use mockall::automock;

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    data: PostData,
    view: PostView,
}

impl Post {
    pub fn new(data: PostData) -> Self {
        let view = PostView::new(data.id);
        Self { data, view }
    }

    pub fn id(&self) -> u64 {
        self.data.id
    }

    /// Id of the owning thread
    pub fn op(&self) -> u64 {
        self.data.op
    }

    pub fn editing(&self) -> bool {
        self.data.editing
    }

    pub fn links(&self) -> Option<&[PostLink]> {
        self.data.links.as_deref()
    }

    pub fn backlinks(&self) -> Option<&[PostLink]> {
        self.data.backlinks.as_deref()
    }

    pub fn image(&self) -> Option<&Image> {
        self.data.image.as_ref()
    }

    pub fn data(&self) -> &PostData {
        &self.data
    }

    pub fn view(&self) -> &PostView {
        &self.view
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostView {
    id: u64,
}

impl PostView {
    pub fn new(id: u64) -> Self {
        Self { id }
    }

    /// Stable element id of the post's fragment.
    pub fn element_id(&self) -> String {
        element_id(self.id)
    }

    pub fn el(&self, page: &Page) -> Option<NodeId> {
        page.element_by_id(&self.element_id())
    }
}

pub fn element_id(post: u64) -> String {
    format!("p{post}")
}

/// Per-post rendering owned by the post view layer. The hydration core only
/// decides when these run and on which post.
#[cfg_attr(any(test, feature = "testing"), automock)]
pub trait PostRenderer {
    /// Timezone correction or relative time.
    fn render_time(&self, page: &mut Page, post: &Post);

    /// Localized staff title next to the poster name.
    fn render_name(&self, page: &mut Page, post: &Post);

    /// `reveal == false` collapses the image to its placeholder form.
    fn render_image(&self, page: &mut Page, post: &Post, reveal: bool);

    /// Re-run the body parser against the current registry.
    fn reparse_body(&self, page: &mut Page, post: &Post);
}
