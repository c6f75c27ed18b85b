// What the notes grid shows
//
// A pure function of the latest SELECT response. Every surface rebuilds
// from this value, never from what it displayed before.

use crate::db::{Note, QueryResult};

/// Shown when there is nothing to list
pub const PLACEHOLDER: &str = "No notes found in the B-Tree.";

/// Label on every card's delete control
pub const DELETE_LABEL: &str = "Delete Permanent";

/// Contents of the notes grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesView {
    /// No rows, an error, or a response we could not read
    Placeholder,
    /// One card per note, in server order
    Cards(Vec<Note>),
}

impl NotesView {
    /// Build the grid for a SELECT response
    ///
    /// Errors and unrecognised shapes both end up as the placeholder.
    pub fn from_result(result: &QueryResult) -> Self {
        Self::from_notes(result.notes())
    }

    pub fn from_notes(notes: Vec<Note>) -> Self {
        if notes.is_empty() {
            NotesView::Placeholder
        } else {
            NotesView::Cards(notes)
        }
    }

    /// Cards on display, empty for the placeholder
    pub fn cards(&self) -> &[Note] {
        match self {
            NotesView::Placeholder => &[],
            NotesView::Cards(notes) => notes.as_slice(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, NotesView::Placeholder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rows_become_cards() {
        let result = QueryResult::from_json(json!({"rows": [[2, "b", "y"], [1, "a", "x"]]}));
        let view = NotesView::from_result(&result);

        let titles: Vec<&str> = view.cards().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "a"]);
    }

    #[test]
    fn test_placeholder_cases() {
        for body in [
            json!({"rows": []}),
            json!({"message": "Query executed successfully"}),
            json!({"error": "Table not found"}),
            json!({"rows": [["not-a-number", "a", "b"]]}),
            json!(null),
        ] {
            let view = NotesView::from_result(&QueryResult::from_json(body));
            assert!(view.is_placeholder());
            assert!(view.cards().is_empty());
        }

        assert!(NotesView::from_result(&QueryResult::offline()).is_placeholder());
    }
}
