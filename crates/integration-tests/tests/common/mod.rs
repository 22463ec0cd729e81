//! Shared setup: a server-rendered thread plus a hydration environment whose
//! collaborators are mocks or recorders.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashSet;

use rb_client::{ClientEnv, Hydrator, Outcome, Page, Post, PostRenderer, ThreadPage};
use rb_core::{
    FileType, Image, LanguagePack, MockConnection, MockSession, MockUi, Options, PostData,
    PostLink, Result, ThreadPayload,
};

pub fn image(file_type: FileType) -> Image {
    Image {
        file_type,
        spoiler: false,
        large: false,
        name: "cat".into(),
        sha1: "da39a3ee5e6b4b0d".into(),
    }
}

/// Thread 1 on /a/. Ten posts and three images exist, of which the op and
/// replies 2, 3 and 4 were rendered. 2 is still open, 4 was made by staff.
pub fn payload() -> ThreadPayload {
    let mut op = PostData::new(1);
    op.time = 1_700_000_000;
    op.body = "cats or dogs".into();
    op.image = Some(image(FileType::Jpg));
    op.backlinks = Some(vec![PostLink(2, 1)]);

    let mut open = PostData::new(2);
    open.time = 1_700_000_060;
    open.body = "cats".into();
    open.links = Some(vec![PostLink(1, 1)]);
    open.editing = true;

    let mut spam = PostData::new(3);
    spam.body = "buy now".into();

    let mut staff = PostData::new(4);
    staff.auth = Some("admin".into());
    staff.banned = true;
    staff.links = Some(vec![PostLink(1, 1), PostLink(2, 1)]);

    ThreadPayload {
        board: "a".into(),
        subject: "Cats & dogs".into(),
        post_ctr: 10,
        image_ctr: 3,
        log_ctr: 55,
        posts: vec![open, spam, staff],
        post: op,
    }
}

pub fn render(payload: &ThreadPayload) -> String {
    rb_ui::render_thread(payload).expect("fixture thread renders")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Time(u64),
    Name(u64),
    Image(u64, bool),
    Reparse(u64),
}

/// Renderer that only records what it was asked to do.
#[derive(Default)]
pub struct RecordingRenderer {
    calls: RefCell<Vec<Call>>,
}

impl RecordingRenderer {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl PostRenderer for RecordingRenderer {
    fn render_time(&self, _page: &mut Page, post: &Post) {
        self.record(Call::Time(post.id()));
    }

    fn render_name(&self, _page: &mut Page, post: &Post) {
        self.record(Call::Name(post.id()));
    }

    fn render_image(&self, _page: &mut Page, post: &Post, reveal: bool) {
        self.record(Call::Image(post.id(), reveal));
    }

    fn reparse_body(&self, _page: &mut Page, post: &Post) {
        self.record(Call::Reparse(post.id()));
    }
}

pub fn lenient_session(banned: bool) -> MockSession {
    let mut session = MockSession::new();
    session.expect_is_banned().return_const(banned);
    session.expect_extract_configs().return_const(());
    session
}

pub fn lenient_ui() -> MockUi {
    let mut ui = MockUi::new();
    ui.expect_set_title().return_const(());
    ui.expect_notify_about_reply().return_const(());
    ui
}

pub fn lenient_connection() -> MockConnection {
    let mut connection = MockConnection::new();
    connection.expect_set_sync_counter().return_const(());
    connection
}

pub struct Fixture {
    pub options: Options,
    pub lang: LanguagePack,
    pub hidden: HashSet<u64>,
    pub mine: HashSet<u64>,
    pub connection: MockConnection,
    pub ui: MockUi,
    pub session: MockSession,
    pub renderer: RecordingRenderer,
}

impl Fixture {
    /// Viewer hid post 3 and wrote the op.
    pub fn new() -> Self {
        Self {
            options: Options::default(),
            lang: LanguagePack::default(),
            hidden: [3].into_iter().collect(),
            mine: [1].into_iter().collect(),
            connection: lenient_connection(),
            ui: lenient_ui(),
            session: lenient_session(false),
            renderer: RecordingRenderer::default(),
        }
    }

    pub fn hydrate(&self, thread: &mut ThreadPage, markup: &str) -> Result<Outcome> {
        Hydrator::new(ClientEnv {
            options: &self.options,
            lang: &self.lang,
            hidden: &self.hidden,
            mine: &self.mine,
            connection: &self.connection,
            ui: &self.ui,
            session: &self.session,
            renderer: &self.renderer,
        })
        .hydrate(thread, Some(markup))
    }
}
