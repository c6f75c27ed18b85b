// In-memory transport for tests. Replays queued outcomes in order and
// remembers every statement it was handed.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::db::{QueryOutcome, QueryResult, QueryTransport};

#[derive(Clone, Default)]
pub struct ScriptedTransport {
    responses: Arc<Mutex<VecDeque<QueryOutcome>>>,
    sent: Arc<Mutex<Vec<String>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a connected response built from a JSON body
    pub fn reply(&self, body: Value) -> &Self {
        self.push(QueryOutcome::connected(QueryResult::from_json(body)))
    }

    /// Queue a response listing these `(id, title, content)` rows
    pub fn reply_rows(&self, rows: &[(i64, &str, &str)]) -> &Self {
        let rows: Vec<Value> = rows
            .iter()
            .map(|(id, title, content)| json!([id, title, content]))
            .collect();
        self.reply(json!({ "rows": rows }))
    }

    /// Queue an unreachable-server response
    pub fn reply_offline(&self) -> &Self {
        self.push(QueryOutcome::offline())
    }

    fn push(&self, outcome: QueryOutcome) -> &Self {
        self.responses.lock().unwrap().push_back(outcome);
        self
    }

    /// Statements sent so far
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueryTransport for ScriptedTransport {
    async fn send(&self, sql: &str) -> QueryOutcome {
        self.sent.lock().unwrap().push(sql.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            // Unscripted calls look like a statement with no result set
            .unwrap_or_else(|| {
                QueryOutcome::connected(QueryResult::from_json(
                    json!({"message": "Query executed successfully"}),
                ))
            })
    }
}
