//! Tag reply links that point at the viewer's own posts.

use std::collections::HashSet;

use rb_core::{PostLink, Result};

use crate::env::ClientEnv;
use crate::page::Page;
use crate::posts::Post;

/// Append the localized "(You)" marker to every anchor in `post`'s fragment
/// that references one of the viewer's posts, and request a desktop
/// notification per such id when `notify` is set.
///
/// Returns the number of anchors that received a marker.
pub fn localize_links(
    env: &ClientEnv<'_>,
    page: &mut Page,
    post: &Post,
    links: Option<&[PostLink]>,
    notify: bool,
) -> Result<usize> {
    let Some(links) = links else {
        return Ok(0);
    };
    let Some(el) = post.view().el(page) else {
        return Ok(0);
    };

    let you = env.lang.posts.you.as_str();
    let mut seen = HashSet::new();
    let mut tagged = 0;
    for link in links {
        let id = link.id();
        if !env.mine.contains(&id) || !seen.insert(id) {
            continue;
        }
        for anchor in page.select_within(el, &format!(r#"a[data-id="{id}"]"#))? {
            let text = page.text(anchor);
            // Circular quotes would otherwise collect the marker twice
            if !text.contains(you) {
                page.set_text(anchor, &format!("{text} {you}"));
                tagged += 1;
            }
        }
        if notify {
            env.ui.notify_about_reply(post.data());
        }
    }
    Ok(tagged)
}
