/// Presentation layer
///
/// A `Surface` is whatever shows the status line and the notes grid and can
/// talk to the user. The grid content itself is a plain `NotesView` value.

pub mod form;
pub mod html;
pub mod terminal;
pub mod view;

#[cfg(test)]
pub mod testing;

pub use form::NoteForm;
pub use html::HtmlPage;
pub use terminal::TerminalSurface;
pub use view::{NotesView, DELETE_LABEL, PLACEHOLDER};

use crate::db::Connectivity;
use crate::error::Result;

/// Where a session's output goes
pub trait Surface {
    /// Replace the status line
    fn set_status(&mut self, status: Connectivity) -> Result<()>;

    /// Replace the whole notes grid
    fn show_notes(&mut self, view: &NotesView) -> Result<()>;

    /// Blocking message to the user
    fn alert(&mut self, message: &str) -> Result<()>;

    /// Ask a yes/no question; `false` means declined
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}
