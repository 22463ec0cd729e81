//! # Language tables
//!
//! Localized strings the client applies on top of server markup. Lookup of the
//! active table is the environment's business; this module only defines the
//! shape and the base-locale defaults.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostStrings {
    pub anon: String,
    pub banned: String,
    pub you: String,
    pub and: String,
    pub omitted: String,
    pub see_all: String,
}

impl Default for PostStrings {
    fn default() -> Self {
        Self {
            anon: "Anonymous".into(),
            banned: "USER WAS BANNED FOR THIS POST".into(),
            you: "(You)".into(),
            and: "and".into(),
            omitted: "omitted".into(),
            see_all: "See all".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguagePack {
    pub posts: PostStrings,
    /// `[singular, plural]` forms keyed by noun
    pub plurals: HashMap<String, [String; 2]>,
}

impl Default for LanguagePack {
    fn default() -> Self {
        let plurals = [("post", "posts"), ("image", "images")]
            .into_iter()
            .map(|(one, many)| (one.to_string(), [one.to_string(), many.to_string()]))
            .collect();
        Self {
            posts: PostStrings::default(),
            plurals,
        }
    }
}

impl LanguagePack {
    pub fn from_json(raw: &str) -> Result<Self> {
        let pack: Self = serde_json::from_str(raw)?;
        tracing::debug!(plurals = pack.plurals.len(), "loaded language pack");
        Ok(pack)
    }

    /// Pluralize `n` with the forms registered under `noun`. Unknown nouns
    /// fall back to the bare noun.
    pub fn pluralize(&self, n: u64, noun: &str) -> String {
        match self.plurals.get(noun) {
            Some(forms) => pluralize(n, forms),
            None => format!("{n} {noun}"),
        }
    }
}

/// `"1 post"`, `"3 posts"`, `"0 posts"`.
pub fn pluralize(n: u64, [singular, plural]: &[String; 2]) -> String {
    let word = if n == 1 { singular } else { plural };
    format!("{n} {word}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize_forms() {
        let lang = LanguagePack::default();
        assert_eq!(lang.pluralize(1, "post"), "1 post");
        assert_eq!(lang.pluralize(0, "post"), "0 posts");
        assert_eq!(lang.pluralize(12, "image"), "12 images");
        assert_eq!(lang.pluralize(2, "reply"), "2 reply");
    }

    #[test]
    fn test_partial_pack_keeps_defaults() {
        let lang = LanguagePack::from_json(r#"{"posts":{"you":"(Você)"}}"#).unwrap();
        assert_eq!(lang.posts.you, "(Você)");
        assert_eq!(lang.posts.anon, "Anonymous");
        assert!(lang.plurals.contains_key("post"));
    }
}
