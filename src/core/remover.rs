/// Note deletion
///
/// Always asks first. Once confirmed, errors from the server are ignored and
/// the list is refreshed regardless.

use crate::core::Session;
use crate::error::Result;
use crate::ui::Surface;

/// Question asked before every delete
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this from the database?";

impl<S: Surface> Session<S> {
    /// Delete one note after confirmation
    ///
    /// Returns whether the delete was sent.
    pub async fn delete(&mut self, id: i64) -> Result<bool> {
        if !self.surface.confirm(DELETE_PROMPT)? {
            tracing::debug!(id, "delete declined");
            return Ok(false);
        }

        let outcome = self.db.delete_note(id).await;
        let result = self.observe(outcome)?;
        if let Some(message) = &result.error_message {
            tracing::debug!(id, %message, "delete error ignored");
        }

        self.refresh().await?;
        Ok(true)
    }
}
