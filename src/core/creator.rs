// Handles the new-note form.
//
// No validation on purpose: empty fields are inserted as empty strings and
// the server decides what to do with over-long text.

use crate::core::Session;
use crate::db::NewNote;
use crate::error::Result;
use crate::ui::Surface;

impl<S: Surface> Session<S> {
    /// Insert whatever is in the form
    ///
    /// On success the form is cleared and the list refreshed. On failure the
    /// error is shown as `Error: <message>` and the form is left alone.
    /// Returns whether the insert went through.
    pub async fn submit(&mut self) -> Result<bool> {
        let note = NewNote {
            id: self.ids.next_id(),
            title: self.form.title.clone(),
            content: self.form.content.clone(),
        };
        let id = note.id;

        let outcome = self.db.insert_note(note).await;
        let result = self.observe(outcome)?;

        match result.error_message {
            None => {
                tracing::info!(id, "note created");
                self.form.reset();
                self.refresh().await?;
                Ok(true)
            }
            Some(message) => {
                tracing::info!(id, %message, "note rejected");
                self.surface.alert(&format!("Error: {}", message))?;
                Ok(false)
            }
        }
    }

    /// Fill the form and submit it
    pub async fn create(&mut self, title: &str, content: &str) -> Result<bool> {
        self.form.title = title.to_string();
        self.form.content = content.to_string();
        self.submit().await
    }
}
