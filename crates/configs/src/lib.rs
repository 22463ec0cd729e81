//! # configs
//!
//! Typed settings for the `rusty-board` binary, layered from an optional
//! `rusty-board.toml` and `RB__`-prefixed environment variables (`.env` is
//! read first).

use std::collections::HashSet;
use std::path::PathBuf;

use config::{Config, Environment, File, FileFormat};
use rb_core::Options;
use serde::Deserialize;
use thiserror::Error;

const ENV_PREFIX: &str = "RB";
const DEFAULT_FILE: &str = "rusty-board";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub format: LogFormat,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            format: LogFormat::Plain,
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Saved thread page to hydrate
    pub page: PathBuf,
    /// JSON language table; the built-in base-locale table when unset
    #[serde(default)]
    pub lang_pack: Option<PathBuf>,
    #[serde(default)]
    pub options: Options,
    #[serde(default)]
    pub hidden: HashSet<u64>,
    #[serde(default)]
    pub mine: HashSet<u64>,
    /// Treat the viewer as banned from the board
    #[serde(default)]
    pub banned: bool,
    #[serde(default)]
    pub log: LogSettings,
}

impl Settings {
    /// Load from `rusty-board.toml` (optional) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        let builder = Config::builder()
            .add_source(File::with_name(DEFAULT_FILE).required(false))
            .add_source(environment());
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Load from an inline TOML document layered under the environment.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from_str(raw, FileFormat::Toml))
            .add_source(environment());
        Ok(builder.build()?.try_deserialize()?)
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("hidden")
        .with_list_parse_key("mine")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_settings_fill_defaults() {
        let settings = Settings::from_toml(r#"page = "thread.html""#).unwrap();
        assert_eq!(settings.page, PathBuf::from("thread.html"));
        assert!(settings.options.is_base_locale());
        assert!(settings.hidden.is_empty());
        assert!(!settings.banned);
        assert_eq!(settings.log.format, LogFormat::Plain);
        assert_eq!(settings.log.filter, "info");
    }

    #[test]
    fn test_full_settings() {
        let settings = Settings::from_toml(
            r#"
            page = "t.html"
            lang_pack = "de_DE.json"
            hidden = [3, 4]
            mine = [5]

            [options]
            lang = "de_DE"
            autogif = true

            [log]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(settings.lang_pack, Some(PathBuf::from("de_DE.json")));
        assert!(settings.hidden.contains(&3) && settings.hidden.contains(&4));
        assert!(settings.mine.contains(&5));
        assert_eq!(settings.options.lang, "de_DE");
        assert!(settings.options.autogif);
        assert_eq!(settings.log.format, LogFormat::Json);
    }

    #[test]
    fn test_missing_page_is_an_error() {
        assert!(Settings::from_toml("banned = true").is_err());
    }
}
