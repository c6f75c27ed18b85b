/// Read and render
///
/// Fetches every note and rebuilds the whole grid from the response.

use crate::core::Session;
use crate::error::Result;
use crate::ui::{NotesView, Surface};

impl<S: Surface> Session<S> {
    /// Fetch all notes and replace whatever the surface shows
    pub async fn refresh(&mut self) -> Result<NotesView> {
        let outcome = self.db.select_notes().await;
        let result = self.observe(outcome)?;

        let view = NotesView::from_result(&result);
        tracing::debug!(cards = view.cards().len(), "rendering notes");
        self.surface.show_notes(&view)?;

        Ok(view)
    }
}
