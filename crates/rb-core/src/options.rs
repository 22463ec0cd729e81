//! Viewer preferences consumed read-only by the hydration core.

use serde::{Deserialize, Serialize};

/// Locale the server renders every page in.
pub const BASE_LOCALE: &str = "en_GB";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Display every poster as anonymous
    pub anonymise: bool,
    /// Active locale tag
    pub lang: String,
    pub hide_thumbs: bool,
    pub work_mode_toggle: bool,
    /// Reveal spoilered images
    pub spoilers: bool,
    /// Do not autoplay animated images
    pub autogif: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            anonymise: false,
            lang: BASE_LOCALE.to_string(),
            hide_thumbs: false,
            work_mode_toggle: false,
            spoilers: true,
            autogif: false,
        }
    }
}

impl Options {
    /// True when the server-rendered markup is already in the viewer's locale.
    pub fn is_base_locale(&self) -> bool {
        self.lang == BASE_LOCALE
    }
}
