//! # Domain Models
//!
//! The structured payload the server embeds in every thread page. These
//! records are transient: they are parsed once per hydration and dropped as
//! soon as the posts have been extracted into live models.

use serde::{Deserialize, Serialize};

/// Reference from one post to another: `(target post id, target thread id)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostLink(pub u64, pub u64);

impl PostLink {
    pub fn id(&self) -> u64 {
        self.0
    }

    pub fn op(&self) -> u64 {
        self.1
    }
}

/// Media type of an uploaded file, carried as a numeric code in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum FileType {
    Jpg,
    Png,
    Gif,
    Webm,
    Pdf,
    Svg,
    Mp4,
    Mp3,
    Ogg,
    Zip,
    SevenZip,
    TarGz,
    TarXz,
    Flac,
    NoFile,
    Txt,
    /// A code this client does not know about yet
    Other(u8),
}

impl From<u8> for FileType {
    fn from(code: u8) -> Self {
        match code {
            0 => Self::Jpg,
            1 => Self::Png,
            2 => Self::Gif,
            3 => Self::Webm,
            4 => Self::Pdf,
            5 => Self::Svg,
            6 => Self::Mp4,
            7 => Self::Mp3,
            8 => Self::Ogg,
            9 => Self::Zip,
            10 => Self::SevenZip,
            11 => Self::TarGz,
            12 => Self::TarXz,
            13 => Self::Flac,
            14 => Self::NoFile,
            15 => Self::Txt,
            other => Self::Other(other),
        }
    }
}

impl From<FileType> for u8 {
    fn from(t: FileType) -> u8 {
        match t {
            FileType::Jpg => 0,
            FileType::Png => 1,
            FileType::Gif => 2,
            FileType::Webm => 3,
            FileType::Pdf => 4,
            FileType::Svg => 5,
            FileType::Mp4 => 6,
            FileType::Mp3 => 7,
            FileType::Ogg => 8,
            FileType::Zip => 9,
            FileType::SevenZip => 10,
            FileType::TarGz => 11,
            FileType::TarXz => 12,
            FileType::Flac => 13,
            FileType::NoFile => 14,
            FileType::Txt => 15,
            FileType::Other(code) => code,
        }
    }
}

/// Descriptor of the file attached to a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub file_type: FileType,
    #[serde(default)]
    pub spoiler: bool,
    /// Render expanded instead of as a thumbnail
    #[serde(default)]
    pub large: bool,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sha1: String,
}

/// A single post as described by the embedded payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostData {
    pub id: u64,
    /// Unix timestamp, seconds
    #[serde(default)]
    pub time: i64,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip: Option<String>,
    /// Staff title the post was made under (e.g. "admin")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<PostLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backlinks: Option<Vec<PostLink>>,
    /// Still open for edits by its author
    #[serde(default)]
    pub editing: bool,
    /// Poster was banned for this post
    #[serde(default)]
    pub banned: bool,
    /// Id of the owning thread. Assigned during extraction.
    #[serde(default, skip_serializing)]
    pub op: u64,
}

impl PostData {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            time: 0,
            body: String::new(),
            name: None,
            trip: None,
            auth: None,
            image: None,
            links: None,
            backlinks: None,
            editing: false,
            banned: false,
            op: 0,
        }
    }

    pub fn has_staff_title(&self) -> bool {
        self.auth.as_deref().is_some_and(|a| !a.is_empty())
    }
}

/// Thread-level fields of the payload. The thread-starting post's own fields
/// are flattened into `post`; its id doubles as the thread id.
///
/// The reply list is deliberately not a field here: it is split off by
/// [`ThreadPayload::into_parts`] so nothing downstream can iterate it twice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreadData {
    pub board: String,
    pub subject: String,
    pub post_ctr: u32,
    pub image_ctr: u32,
    pub log_ctr: u64,
    pub post: PostData,
}

impl ThreadData {
    pub fn id(&self) -> u64 {
        self.post.id
    }
}

/// The payload exactly as serialized in the page.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadPayload {
    pub board: String,
    #[serde(default)]
    pub subject: String,
    pub post_ctr: u32,
    pub image_ctr: u32,
    pub log_ctr: u64,
    /// Replies in ascending id order
    pub posts: Vec<PostData>,
    #[serde(flatten)]
    pub post: PostData,
}

impl ThreadPayload {
    /// Detach the reply list from the thread record.
    pub fn into_parts(self) -> (ThreadData, Vec<PostData>) {
        let ThreadPayload {
            board,
            subject,
            post_ctr,
            image_ctr,
            log_ctr,
            posts,
            post,
        } = self;
        let thread = ThreadData {
            board,
            subject,
            post_ctr,
            image_ctr,
            log_ctr,
            post,
        };
        (thread, posts)
    }
}
