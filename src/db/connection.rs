/// Handle on the remote database
///
/// Pairs a transport with the table the notes live in.

use crate::config::Config;
use crate::db::{HttpTransport, QueryOutcome, QueryTransport, Statement};
use crate::error::Result;
use std::sync::Arc;

/// Database wrapper around a query transport
#[derive(Clone)]
pub struct Database {
    transport: Arc<dyn QueryTransport>,
    table: String,
}

impl Database {
    /// Connect to the endpoint named in the config
    ///
    /// Nothing goes over the wire until the first statement.
    ///
    /// # Examples
    /// ```no_run
    /// use btree_notes_lib::{Config, Database};
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let db = Database::new(&Config::default())?;
    /// assert_eq!(db.table(), "notes");
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: &Config) -> Result<Self> {
        let transport = HttpTransport::new(config.endpoint.clone())?;
        Ok(Self::with_transport(Arc::new(transport), &config.table))
    }

    /// Use any transport, e.g. an in-memory one
    pub fn with_transport(transport: Arc<dyn QueryTransport>, table: &str) -> Self {
        Self {
            transport,
            table: table.to_string(),
        }
    }

    /// Table holding the notes
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Send raw SQL text
    pub async fn run_sql(&self, sql: &str) -> QueryOutcome {
        self.transport.send(sql).await
    }

    /// Send a typed statement
    pub async fn execute(&self, statement: &Statement) -> QueryOutcome {
        let sql = statement.to_string();
        tracing::debug!(kind = statement.kind(), %sql, "sending statement");

        let outcome = self.run_sql(&sql).await;
        if let Some(message) = &outcome.result.error_message {
            tracing::debug!(kind = statement.kind(), %message, "statement failed");
        }
        outcome
    }
}
