/// Data models for the remote database
///
/// The server speaks loose JSON: values come back as strings, errors arrive
/// under either `error` or `error_message`, and some statements answer with a
/// bare `message`. Everything here is tolerant of that.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Message used when the server could not be reached at all
pub const OFFLINE_MESSAGE: &str = "Could not reach DB server";

/// A note as stored in the remote table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl Note {
    /// Decode one `[id, title, content]` row
    ///
    /// Returns `None` when the row is too short or the id is not an integer.
    pub fn from_row(row: &[Value]) -> Option<Self> {
        let [id, title, content, ..] = row else {
            return None;
        };

        Some(Self {
            id: cell_to_id(id)?,
            title: cell_to_text(title),
            content: cell_to_text(content),
        })
    }
}

/// Input for creating a note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNote {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Request body sent to the endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub sql: String,
}

/// Parsed response body
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<Vec<Value>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    #[serde(rename = "rowCount", skip_serializing_if = "Option::is_none")]
    pub row_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl QueryResult {
    /// Synthetic result for a failed round trip
    ///
    /// Same shape as an application error so callers need only one check.
    pub fn offline() -> Self {
        Self::failed(OFFLINE_MESSAGE)
    }

    /// Result carrying only an error message
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error_message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Interpret any JSON value the server sent back
    ///
    /// Fields with an unexpected type are dropped rather than failing the
    /// whole response. Non-object bodies carry neither rows nor an error.
    pub fn from_json(value: Value) -> Self {
        let Value::Object(mut fields) = value else {
            return Self::default();
        };

        let error_message = take_error(&mut fields, "error_message")
            .or_else(|| take_error(&mut fields, "error"));

        let rows: Option<Vec<Vec<Value>>> = match fields.remove("rows") {
            Some(Value::Array(rows)) => Some(
                rows.into_iter()
                    .map(|row| match row {
                        Value::Array(cells) => cells,
                        other => vec![other],
                    })
                    .collect(),
            ),
            _ => None,
        };

        let columns: Option<Vec<String>> = match fields.remove("columns") {
            Some(Value::Array(columns)) => Some(
                columns
                    .into_iter()
                    .filter_map(|c| c.as_str().map(str::to_string))
                    .collect(),
            ),
            _ => None,
        };

        Self {
            rows,
            error_message,
            columns,
            row_count: fields.get("rowCount").and_then(Value::as_u64),
            message: fields
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }

    /// Whether the server (or the transport) reported a failure
    pub fn is_error(&self) -> bool {
        self.error_message.is_some()
    }

    /// Decode every row into a note, in server order
    ///
    /// Rows that do not look like `[id, title, content]` are skipped.
    pub fn notes(&self) -> Vec<Note> {
        let Some(rows) = &self.rows else {
            return Vec::new();
        };

        rows.iter()
            .filter_map(|row| {
                let note = Note::from_row(row);
                if note.is_none() {
                    tracing::warn!(?row, "skipping row that is not a note");
                }
                note
            })
            .collect()
    }
}

/// Last observed state of the connection to the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// No request made yet
    #[default]
    Unknown,
    Connected,
    Offline,
}

impl Connectivity {
    /// Text for the status line
    pub fn status_text(&self) -> &'static str {
        match self {
            Connectivity::Unknown => "Connecting...",
            Connectivity::Connected => "Connected: B-Tree Stable",
            Connectivity::Offline => "Database Offline",
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.status_text())
    }
}

/// What one round trip produced
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome {
    pub connectivity: Connectivity,
    pub result: QueryResult,
}

impl QueryOutcome {
    pub fn connected(result: QueryResult) -> Self {
        Self {
            connectivity: Connectivity::Connected,
            result,
        }
    }

    pub fn offline() -> Self {
        Self {
            connectivity: Connectivity::Offline,
            result: QueryResult::offline(),
        }
    }
}

// Empty strings, null and false count as "no error", matching how the
// server's own page checks the field.
fn take_error(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn cell_to_id(cell: &Value) -> Option<i64> {
    match cell {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn cell_to_text(cell: &Value) -> String {
    match cell {
        Value::String(s) => unescape_literal(s),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Undo the backslash escaping applied when the literal was written
///
/// The server keeps escape characters in stored text verbatim. It cannot tell
/// us whether a backslash was an escape or real text, so every stored
/// backslash is treated as an escape. Text written without escaping (through
/// the `sql` command or another client) loses its backslashes:
/// `C:\tmp` reads back as `C:tmp`.
pub fn unescape_literal(stored: &str) -> String {
    let mut out = String::with_capacity(stored.len());
    let mut chars = stored.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next) => out.push(next),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_note_from_numeric_row() {
        let row = vec![json!(42), json!("Groceries"), json!("Milk, eggs")];
        let note = Note::from_row(&row).unwrap();
        assert_eq!(note.id, 42);
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.content, "Milk, eggs");
    }

    #[test]
    fn test_note_from_string_row() {
        let row = vec![json!("7"), json!("a"), json!(null)];
        let note = Note::from_row(&row).unwrap();
        assert_eq!(note.id, 7);
        assert_eq!(note.content, "");
    }

    #[test]
    fn test_note_from_bad_rows() {
        assert!(Note::from_row(&[json!(1), json!("only two")]).is_none());
        assert!(Note::from_row(&[json!("x"), json!("a"), json!("b")]).is_none());
    }

    #[test]
    fn test_result_accepts_both_error_keys() {
        let a = QueryResult::from_json(json!({"error_message": "duplicate key"}));
        assert_eq!(a.error_message.as_deref(), Some("duplicate key"));

        let b = QueryResult::from_json(json!({"error": "Parse error: x"}));
        assert_eq!(b.error_message.as_deref(), Some("Parse error: x"));
        assert!(b.rows.is_none());
    }

    #[test]
    fn test_result_select_shape() {
        let result = QueryResult::from_json(json!({
            "columns": ["id", "title", "content"],
            "rows": [["1", "a", "b"], ["2", "c", "d"]],
            "rowCount": 2
        }));

        assert!(!result.is_error());
        assert_eq!(result.row_count, Some(2));
        assert_eq!(result.columns.as_ref().map(Vec::len), Some(3));
        let ids: Vec<i64> = result.notes().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_result_unknown_shapes() {
        let result = QueryResult::from_json(json!({"message": "Query executed successfully"}));
        assert!(!result.is_error());
        assert!(result.notes().is_empty());
        assert_eq!(result.message.as_deref(), Some("Query executed successfully"));

        assert_eq!(QueryResult::from_json(json!([1, 2])), QueryResult::default());
        assert!(QueryResult::from_json(json!({"rows": "nope"})).rows.is_none());
        assert!(!QueryResult::from_json(json!({"error": ""})).is_error());
    }

    #[test]
    fn test_offline_only_sets_error() {
        let result = QueryResult::offline();
        assert_eq!(result.error_message.as_deref(), Some(OFFLINE_MESSAGE));
        assert!(result.rows.is_none());
        assert!(result.columns.is_none());
        assert!(result.row_count.is_none());
        assert!(result.message.is_none());
    }

    #[test]
    fn test_unescape_literal() {
        assert_eq!(unescape_literal(r"it\'s"), "it's");
        assert_eq!(unescape_literal(r"a\\b"), r"a\b");
        assert_eq!(unescape_literal("trailing\\"), "trailing\\");
    }

    #[test]
    fn test_unescaped_foreign_text_loses_backslashes() {
        // Rows not written through quote_literal are read as if they were
        let row = vec![json!("1"), json!(r"C:\tmp"), json!(r"a\\b")];
        let note = Note::from_row(&row).unwrap();
        assert_eq!(note.title, "C:tmp");
        assert_eq!(note.content, r"a\b");
    }

    #[test]
    fn test_connectivity_text() {
        assert_eq!(Connectivity::Connected.to_string(), "Connected: B-Tree Stable");
        assert_eq!(Connectivity::Offline.to_string(), "Database Offline");
    }
}
