//! # rb-ui
//!
//! Server-side rendering of a thread page in the shape the client hydrates:
//! one `#p<id>` article per post, the omitted-posts banner after the
//! thread-starting post, and the JSON payload in `#post-data`. Everything is
//! rendered in the base locale.

use askama::Template;
use rb_core::models::{PostData, ThreadPayload};
use rb_core::LanguagePack;

/// Flattened per-post fields the template needs.
pub struct PostRow {
    pub id: u64,
    pub time: i64,
    pub name: String,
    pub staff: String,
    pub body: String,
    pub has_image: bool,
    pub spoiler: bool,
    pub banned: bool,
    pub links: Vec<u64>,
    pub backlinks: Vec<u64>,
}

impl PostRow {
    fn new(post: &PostData, lang: &LanguagePack) -> Self {
        let ids = |links: &Option<Vec<rb_core::PostLink>>| {
            links
                .iter()
                .flatten()
                .map(|l| l.id())
                .collect::<Vec<_>>()
        };
        Self {
            id: post.id,
            time: post.time,
            name: post
                .name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| lang.posts.anon.clone()),
            staff: post.auth.clone().unwrap_or_default(),
            body: post.body.clone(),
            has_image: post.image.is_some(),
            spoiler: post.image.as_ref().is_some_and(|i| i.spoiler),
            banned: post.banned,
            links: ids(&post.links),
            backlinks: ids(&post.backlinks),
        }
    }
}

#[derive(Template)]
#[template(path = "thread.html")]
pub struct ThreadTemplate<'a> {
    pub board: &'a str,
    pub subject: &'a str,
    pub rows: Vec<PostRow>,
    pub omitted_posts: u64,
    pub omitted_images: u64,
    pub omit_text: String,
    pub banned_notice: &'a str,
    pub payload: String,
}

impl<'a> ThreadTemplate<'a> {
    /// Build the template for `thread`, rendered in the base locale.
    pub fn new(thread: &'a ThreadPayload, lang: &'a LanguagePack) -> serde_json::Result<Self> {
        let mut rows = Vec::with_capacity(thread.posts.len() + 1);
        rows.push(PostRow::new(&thread.post, lang));
        rows.extend(thread.posts.iter().map(|p| PostRow::new(p, lang)));

        let shown_images = rows.iter().filter(|r| r.has_image).count() as u64;
        let omitted_posts = u64::from(thread.post_ctr).saturating_sub(rows.len() as u64);
        let omitted_images = u64::from(thread.image_ctr).saturating_sub(shown_images);

        let mut omit_text = lang.pluralize(omitted_posts, "post");
        if omitted_images != 0 {
            omit_text.push_str(&format!(
                " {} {}",
                lang.posts.and,
                lang.pluralize(omitted_images, "image")
            ));
        }
        omit_text.push_str(&format!(" {} ", lang.posts.omitted));

        Ok(Self {
            board: &thread.board,
            subject: &thread.subject,
            rows,
            omitted_posts,
            omitted_images,
            omit_text,
            banned_notice: &lang.posts.banned,
            // Keep the payload from terminating its own script element
            payload: serde_json::to_string(thread)?.replace("</", "<\\/"),
        })
    }
}

/// Render a full thread page in the base locale.
pub fn render_thread(thread: &ThreadPayload) -> anyhow::Result<String> {
    let lang = LanguagePack::default();
    let html = ThreadTemplate::new(thread, &lang)?.render()?;
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ThreadPayload {
        let mut op = PostData::new(1);
        op.body = "first <b>".into();
        let mut reply = PostData::new(2);
        reply.links = Some(vec![rb_core::PostLink(1, 1)]);
        reply.banned = true;
        ThreadPayload {
            board: "a".into(),
            subject: "Hello".into(),
            post_ctr: 7,
            image_ctr: 0,
            log_ctr: 3,
            posts: vec![reply],
            post: op,
        }
    }

    #[test]
    fn test_renders_fragments_and_payload() {
        let html = render_thread(&payload()).unwrap();
        assert!(html.contains(r#"<article id="p1" class="op">"#));
        assert!(html.contains(r#"<article id="p2">"#));
        assert!(html.contains(r#"data-omit="5""#));
        assert!(html.contains("5 posts omitted "));
        assert!(html.contains(r#"data-id="1""#));
        assert!(html.contains(r#"<b class="banned">"#));
        assert!(html.contains(r#"<script id="post-data" type="application/json">{"#));
        assert!(html.contains("first &lt;b&gt;"));
    }

    #[test]
    fn test_payload_cannot_close_script() {
        let mut thread = payload();
        thread.post.body = "</script><b>".into();
        let html = render_thread(&thread).unwrap();
        assert_eq!(html.matches("</script>").count(), 1);
    }
}
