/// Session startup
///
/// Creates the notes table and shows whatever is already in it.

use crate::core::Session;
use crate::error::Result;
use crate::ui::{NotesView, Surface};

impl<S: Surface> Session<S> {
    /// Create the table, then render the list
    ///
    /// The CREATE result is ignored either way; on a server that already has
    /// the table it simply fails.
    pub async fn start(&mut self) -> Result<NotesView> {
        let outcome = self.db.create_notes_table().await;
        let result = self.observe(outcome)?;
        if let Some(message) = &result.error_message {
            tracing::debug!(%message, "create table ignored");
        }

        self.refresh().await
    }
}
