//! Turn a payload post plus its server-rendered fragment into a live post.

use rb_core::{FileType, Image, Options, PostData, Result};

use crate::env::ClientEnv;
use crate::links::localize_links;
use crate::page::Page;
use crate::posts::{Post, PostView};
use crate::state::PostCollection;

/// What became of one payload post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extracted {
    Registered,
    /// Hidden by the viewer; the fragment was removed
    Hidden,
    /// No fragment with the post's id exists in the page
    Missing,
}

/// Extract the model and view of `post` from the page and apply the
/// client-only formatting the server leaves out.
pub fn extract_post(
    env: &ClientEnv<'_>,
    page: &mut Page,
    registry: &mut PostCollection,
    mut post: PostData,
    op: u64,
) -> Result<Extracted> {
    let view = PostView::new(post.id);
    let el = view.el(page);

    if env.hidden.contains(&post.id) {
        if let Some(el) = el {
            page.remove(el);
        }
        tracing::debug!(post = post.id, "removed hidden post");
        return Ok(Extracted::Hidden);
    }
    if el.is_none() {
        tracing::warn!(post = post.id, "no markup fragment for post");
        return Ok(Extracted::Missing);
    }

    post.op = op;
    let model = registry.add(Post::new(post));

    // Will do unneeded work when the viewer is on UTC
    env.renderer.render_time(page, model);

    // Base-locale staff titles are already correct server-side
    if model.data().has_staff_title() && !env.options.is_base_locale() {
        env.renderer.render_name(page, model);
    }

    localize_links(env, page, model, model.links(), true)?;
    localize_links(env, page, model, model.backlinks(), false)?;

    if let Some(image) = model.image() {
        if should_collapse(env.options, image) {
            env.renderer.render_image(page, model, false);
        }
    }

    Ok(Extracted::Registered)
}

/// Any single matching preference collapses the thumbnail.
pub fn should_collapse(options: &Options, image: &Image) -> bool {
    options.hide_thumbs
        || options.work_mode_toggle
        || (image.spoiler && !options.spoilers)
        || (image.file_type == FileType::Gif && options.autogif)
}
