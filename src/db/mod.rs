/// Remote database module for btree-notes
///
/// Notes live in a B-Tree database reachable only through an HTTP endpoint
/// that accepts SQL text. This module builds the statements, ships them and
/// decodes what comes back.

pub mod connection;
pub mod models;
pub mod queries;
pub mod statements;
pub mod transport;

#[cfg(test)]
pub mod testing;

pub use connection::Database;
pub use models::*;
pub use statements::Statement;
pub use transport::{HttpTransport, QueryTransport};
