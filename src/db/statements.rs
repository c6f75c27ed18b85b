/// SQL statements understood by the remote engine
///
/// Statements are built as values and only turned into text at the edge,
/// so user input is always rendered through `quote_literal`.

use crate::db::NewNote;
use std::fmt;

/// Every statement the client sends
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    CreateTable { table: String },
    Insert { table: String, note: NewNote },
    SelectAll { table: String },
    DeleteById { table: String, id: i64 },
}

impl Statement {
    pub fn create_table(table: &str) -> Self {
        Statement::CreateTable {
            table: table.to_string(),
        }
    }

    pub fn insert(table: &str, note: NewNote) -> Self {
        Statement::Insert {
            table: table.to_string(),
            note,
        }
    }

    pub fn select_all(table: &str) -> Self {
        Statement::SelectAll {
            table: table.to_string(),
        }
    }

    pub fn delete_by_id(table: &str, id: i64) -> Self {
        Statement::DeleteById {
            table: table.to_string(),
            id,
        }
    }

    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::CreateTable { .. } => "create_table",
            Statement::Insert { .. } => "insert",
            Statement::SelectAll { .. } => "select",
            Statement::DeleteById { .. } => "delete",
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::CreateTable { table } => write!(
                f,
                "CREATE TABLE {} (id INT PRIMARY, title STRING(64), content STRING(255));",
                table
            ),
            Statement::Insert { table, note } => write!(
                f,
                "INSERT INTO {} VALUES ({}, {}, {});",
                table,
                note.id,
                quote_literal(&note.title),
                quote_literal(&note.content)
            ),
            Statement::SelectAll { table } => write!(f, "SELECT * FROM {};", table),
            Statement::DeleteById { table, id } => {
                write!(f, "DELETE FROM {} WHERE id = {};", table, id)
            }
        }
    }
}

/// Render text as a single-quoted literal
///
/// The engine's tokenizer treats a backslash as "take the next character
/// literally", so `'` and `\` are the only characters that need escaping.
pub fn quote_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        if c == '\'' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::unescape_literal;

    fn note(title: &str, content: &str) -> NewNote {
        NewNote {
            id: 123,
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_statement_text() {
        assert_eq!(
            Statement::create_table("notes").to_string(),
            "CREATE TABLE notes (id INT PRIMARY, title STRING(64), content STRING(255));"
        );
        assert_eq!(Statement::select_all("notes").to_string(), "SELECT * FROM notes;");
        assert_eq!(
            Statement::delete_by_id("notes", 77).to_string(),
            "DELETE FROM notes WHERE id = 77;"
        );
    }

    #[test]
    fn test_insert_plain_text() {
        let sql = Statement::insert("notes", note("Groceries", "Milk, eggs")).to_string();
        assert_eq!(sql, "INSERT INTO notes VALUES (123, 'Groceries', 'Milk, eggs');");
    }

    #[test]
    fn test_insert_empty_fields() {
        let sql = Statement::insert("notes", note("", "")).to_string();
        assert_eq!(sql, "INSERT INTO notes VALUES (123, '', '');");
    }

    #[test]
    fn test_quote_literal_escapes() {
        assert_eq!(quote_literal("it's"), r"'it\'s'");
        assert_eq!(quote_literal(r"C:\tmp"), r"'C:\\tmp'");
        assert_eq!(
            quote_literal("'); DROP TABLE notes; --"),
            r"'\'); DROP TABLE notes; --'"
        );
    }

    #[test]
    fn test_escaped_text_survives_storage() {
        // The engine strips only the outer quotes
        for text in ["it's", r"back\slash", r"\'", "plain"] {
            let quoted = quote_literal(text);
            let stored = &quoted[1..quoted.len() - 1];
            assert_eq!(unescape_literal(stored), text);
        }
    }

    #[test]
    fn test_kind() {
        assert_eq!(Statement::select_all("notes").kind(), "select");
        assert_eq!(Statement::delete_by_id("notes", 1).kind(), "delete");
    }
}
