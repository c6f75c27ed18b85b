/// Core functionality modules
///
/// The session and its handlers: bootstrap, create, read/render, delete,
/// plus the interactive shell that drives them.

pub mod bootstrap;
pub mod creator;
pub mod fetcher;
pub mod ids;
pub mod remover;
pub mod repl;
pub mod session;

pub use ids::{ClockIds, FixedId, IdSource};
pub use remover::DELETE_PROMPT;
pub use repl::ShellCommand;
pub use session::Session;
