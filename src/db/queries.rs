/// Note queries against the remote table
///
/// Thin wrappers that pick the right statement for each note operation.

use crate::db::{Database, NewNote, QueryOutcome, Statement};

impl Database {
    /// Ask the server to create the notes table
    ///
    /// Not idempotent on our side; a second call is whatever the server makes
    /// of a duplicate CREATE.
    pub async fn create_notes_table(&self) -> QueryOutcome {
        self.execute(&Statement::create_table(self.table())).await
    }

    /// Insert one note
    pub async fn insert_note(&self, note: NewNote) -> QueryOutcome {
        self.execute(&Statement::insert(self.table(), note)).await
    }

    /// Fetch every note, in whatever order the server returns them
    pub async fn select_notes(&self) -> QueryOutcome {
        self.execute(&Statement::select_all(self.table())).await
    }

    /// Delete a note by id
    ///
    /// Deleting an id that does not exist still sends the statement.
    pub async fn delete_note(&self, id: i64) -> QueryOutcome {
        self.execute(&Statement::delete_by_id(self.table(), id)).await
    }
}
