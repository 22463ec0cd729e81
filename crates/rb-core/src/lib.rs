//! rusty-board/crates/rb-core/src/lib.rs
//!
//! Shared data model, preferences and port definitions for the Rusty-Board
//! thread client.

pub mod error;
pub mod lang;
pub mod models;
pub mod options;
pub mod traits;

// Re-exporting for easier access in other crates
pub use error::*;
pub use lang::*;
pub use models::*;
pub use options::*;
pub use traits::*;
