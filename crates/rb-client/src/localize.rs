//! Client-side localization of thread-level markup. The server always renders
//! in the base locale for better cacheability, so these passes only act when
//! the viewer's locale or preferences differ.

use rb_core::{LanguagePack, Options, Result, ThreadData, Ui};

use crate::page::Page;

/// Server-rendered placeholder name for posters without a name or tripcode.
const SERVER_ANON: &str = "Anonymous";

/// Rewrite the "N posts and M images omitted" banner in the active locale.
///
/// Returns whether the banner was rewritten.
pub fn localize_omitted(page: &mut Page, options: &Options, lang: &LanguagePack) -> Result<bool> {
    if options.is_base_locale() {
        tracing::debug!("base locale; omitted banner left as rendered");
        return Ok(false);
    }
    let Some(el) = page.first(".omit")? else {
        tracing::debug!("no omitted-posts banner");
        return Ok(false);
    };

    let count = |name: &str| {
        page.attr(el, name)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(0)
    };
    let (posts, images) = (count("data-omit"), count("data-image-omit"));

    let mut text = lang.pluralize(posts, "post");
    if images != 0 {
        text.push_str(&format!(" {} {}", lang.posts.and, lang.pluralize(images, "image")));
    }
    text.push_str(&format!(" {} ", lang.posts.omitted));

    page.replace_first_child(el, &text);
    if let Some(history) = page.first_within(el, "a.history")? {
        page.set_text(history, &lang.posts.see_all);
    }
    Ok(true)
}

/// Localize poster names and banned-post notices.
pub fn localize_names(page: &mut Page, options: &Options, lang: &LanguagePack) -> Result<()> {
    if options.anonymise {
        for el in page.select(".name")? {
            page.set_text(el, &lang.posts.anon);
        }
    } else if !options.is_base_locale() {
        for el in page.select(".name")? {
            if page.text(el) == SERVER_ANON {
                page.set_text(el, &lang.posts.anon);
            }
        }
        for el in page.select(".banned")? {
            page.set_text(el, &lang.posts.banned);
        }
    }
    Ok(())
}

/// `/<board>/ - <escaped subject> (#<id>)`
pub fn thread_title(thread: &ThreadData) -> String {
    format!(
        "/{}/ - {} (#{})",
        thread.board,
        html_escape::encode_text(&thread.subject),
        thread.id()
    )
}

/// Set the thread title on the page tab.
pub fn set_thread_title(ui: &dyn Ui, thread: &ThreadData) {
    ui.set_title(&thread_title(thread));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rb_core::{MockUi, PostData, PostStrings};

    const OMIT: &str = r#"<span class="omit" data-omit="3" data-image-omit="1">3 posts and 1 image omitted <span class="act"><a class="history" href="?last=100">See all</a></span></span>"#;

    fn german() -> LanguagePack {
        let mut lang = LanguagePack::default();
        lang.posts = PostStrings {
            anon: "Anonym".into(),
            banned: "NUTZER WURDE GESPERRT".into(),
            you: "(Du)".into(),
            and: "und".into(),
            omitted: "ausgelassen".into(),
            see_all: "Alle anzeigen".into(),
        };
        lang.plurals
            .insert("post".into(), ["Beitrag".into(), "Beiträge".into()]);
        lang.plurals
            .insert("image".into(), ["Bild".into(), "Bilder".into()]);
        lang
    }

    fn german_options() -> Options {
        Options {
            lang: "de_DE".into(),
            ..Options::default()
        }
    }

    #[test]
    fn test_omitted_noop_in_base_locale() {
        let mut page = Page::parse(OMIT);
        let before = page.to_html();
        assert!(!localize_omitted(&mut page, &Options::default(), &german()).unwrap());
        assert_eq!(page.to_html(), before);
    }

    #[test]
    fn test_omitted_rewrites_text_and_link() {
        let mut page = Page::parse(OMIT);
        assert!(localize_omitted(&mut page, &german_options(), &german()).unwrap());
        let el = page.first(".omit").unwrap().unwrap();
        assert_eq!(page.text(el), "3 Beiträge und 1 Bild ausgelassen Alle anzeigen");
    }

    #[test]
    fn test_omitted_without_images() {
        let mut page = Page::parse(
            r#"<span class="omit" data-omit="1" data-image-omit="0">1 post omitted <a class="history">See all</a></span>"#,
        );
        localize_omitted(&mut page, &german_options(), &german()).unwrap();
        let el = page.first(".omit").unwrap().unwrap();
        assert_eq!(page.text(el), "1 Beitrag ausgelassen Alle anzeigen");
    }

    #[test]
    fn test_omitted_missing_banner_is_skipped() {
        let mut page = Page::parse("<article id=\"p1\"></article>");
        assert!(!localize_omitted(&mut page, &german_options(), &german()).unwrap());
    }

    #[test]
    fn test_names_and_ban_notices() {
        let markup = r#"<b class="name">Anonymous</b><b class="name">moot</b><b class="banned">USER WAS BANNED FOR THIS POST</b>"#;

        let mut page = Page::parse(markup);
        localize_names(&mut page, &german_options(), &german()).unwrap();
        let names: Vec<_> = page
            .select(".name")
            .unwrap()
            .into_iter()
            .map(|n| page.text(n))
            .collect();
        assert_eq!(names, ["Anonym", "moot"]);
        let banned = page.first(".banned").unwrap().unwrap();
        assert_eq!(page.text(banned), "NUTZER WURDE GESPERRT");

        let mut page = Page::parse(markup);
        let anonymise = Options {
            anonymise: true,
            ..Options::default()
        };
        localize_names(&mut page, &anonymise, &german()).unwrap();
        for n in page.select(".name").unwrap() {
            assert_eq!(page.text(n), "Anonym");
        }

        let mut page = Page::parse(markup);
        let before = page.to_html();
        localize_names(&mut page, &Options::default(), &german()).unwrap();
        assert_eq!(page.to_html(), before);
    }

    #[test]
    fn test_title_escapes_subject() {
        let thread = ThreadData {
            board: "a".into(),
            subject: "Hi & bye".into(),
            post_ctr: 0,
            image_ctr: 0,
            log_ctr: 0,
            post: PostData::new(42),
        };
        insta::assert_snapshot!(thread_title(&thread), @"/a/ - Hi &amp; bye (#42)");

        let mut ui = MockUi::new();
        ui.expect_set_title()
            .withf(|t| t.to_string() == "/a/ - Hi &amp; bye (#42)")
            .times(1)
            .return_const(());
        set_thread_title(&ui, &thread);
    }

    #[test]
    fn test_title_keeps_slashes_and_quotes() {
        let thread = ThreadData {
            board: "mu".into(),
            subject: "AC/DC it's <live>".into(),
            post_ctr: 0,
            image_ctr: 0,
            log_ctr: 0,
            post: PostData::new(7),
        };
        insta::assert_snapshot!(thread_title(&thread), @"/mu/ - AC/DC it's &lt;live&gt; (#7)");
    }
}
