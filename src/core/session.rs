/// One client session
///
/// Owns the database handle, the surface and the form. Every handler goes
/// through `observe`, which is where the connectivity status gets updated.

use crate::core::{ClockIds, IdSource};
use crate::db::{Database, QueryOutcome, QueryResult};
use crate::error::Result;
use crate::ui::{NoteForm, Surface};

pub struct Session<S> {
    pub(crate) db: Database,
    pub(crate) surface: S,
    pub(crate) form: NoteForm,
    pub(crate) ids: Box<dyn IdSource>,
}

impl<S: Surface> Session<S> {
    /// New session with clock-based ids
    pub fn new(db: Database, surface: S) -> Self {
        Self::with_ids(db, surface, Box::new(ClockIds))
    }

    pub fn with_ids(db: Database, surface: S, ids: Box<dyn IdSource>) -> Self {
        Self {
            db,
            surface,
            form: NoteForm::default(),
            ids,
        }
    }

    pub fn form(&self) -> &NoteForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut NoteForm {
        &mut self.form
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Send raw SQL and report connectivity
    pub async fn run_sql(&mut self, sql: &str) -> Result<QueryResult> {
        let outcome = self.db.run_sql(sql).await;
        self.observe(outcome)
    }

    /// Push the round trip's connectivity to the status line
    pub(crate) fn observe(&mut self, outcome: QueryOutcome) -> Result<QueryResult> {
        self.surface.set_status(outcome.connectivity)?;
        Ok(outcome.result)
    }
}
