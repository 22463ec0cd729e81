//! # HydrateError
//!
//! Centralized error handling for the Rusty-Board client.
//! Only conditions that must abort a hydration are represented here; anything
//! the page can live without is logged and skipped where it happens.

use thiserror::Error;

/// The primary error type for all client operations.
#[derive(Error, Debug)]
pub enum HydrateError {
    /// The embedded thread payload is not valid JSON for a thread
    #[error("malformed thread payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// The page has no embedded thread payload at all
    #[error("thread payload element #{0} not found")]
    MissingPayload(&'static str),

    /// A CSS selector built by the client failed to parse
    #[error("invalid selector `{0}`")]
    Selector(String),
}

/// A specialized Result type for client logic.
pub type Result<T> = std::result::Result<T, HydrateError>;
