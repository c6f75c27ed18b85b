/// btree-notes library
///
/// A notes client that keeps every note in a remote B-Tree database,
/// talking to it one SQL statement at a time over HTTP.

pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod logging;
pub mod ui;

// Re-exports for convenience
pub use crate::config::Config;
pub use crate::core::Session;
pub use crate::db::Database;
pub use crate::error::{NotesError, Result};
