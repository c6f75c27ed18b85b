// Interactive session on a terminal. Mirrors a page load: the table is
// created and listed once, then each command is one handler invocation.

use crate::core::Session;
use crate::error::{NotesError, Result};
use crate::ui::TerminalSurface;
use std::io::{BufRead, Write};

const PROMPT: &str = "notes> ";

const HELP: &str = "\
Commands:
    add              Write a new note (prompts for title and content)
    delete <id>      Delete a note
    list             Refresh the note list
    sql <statement>  Send a raw statement and print the response
    help             Show this help
    quit             Leave";

/// One parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add,
    Delete(i64),
    List,
    Sql(String),
    Help,
    Quit,
    Empty,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "" => Ok(ShellCommand::Empty),
            "add" | "new" => Ok(ShellCommand::Add),
            "list" | "ls" | "refresh" => Ok(ShellCommand::List),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
            "delete" | "del" | "rm" => rest
                .parse()
                .map(ShellCommand::Delete)
                .map_err(|_| NotesError::InvalidInput(format!("'{}' is not a note id", rest))),
            "sql" if !rest.is_empty() => Ok(ShellCommand::Sql(rest.to_string())),
            "sql" => Err(NotesError::InvalidInput("sql needs a statement".to_string())),
            other => Err(NotesError::InvalidInput(format!("unknown command '{}'", other))),
        }
    }
}

impl<R: BufRead, W: Write, E: Write> Session<TerminalSurface<R, W, E>> {
    /// Run until `quit` or end of input
    pub async fn run_shell(&mut self) -> Result<()> {
        self.start().await?;
        self.surface.say("Type 'help' for commands.")?;

        loop {
            let Some(line) = self.surface.prompt(PROMPT)? else {
                break;
            };

            let command = match ShellCommand::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    self.surface.say(&e.user_message())?;
                    continue;
                }
            };

            match command {
                ShellCommand::Empty => {}
                ShellCommand::Help => self.surface.say(HELP)?,
                ShellCommand::Quit => break,
                ShellCommand::List => {
                    self.refresh().await?;
                }
                ShellCommand::Delete(id) => {
                    self.delete(id).await?;
                }
                ShellCommand::Sql(sql) => {
                    let result = self.run_sql(&sql).await?;
                    self.surface.show_result(&result)?;
                }
                ShellCommand::Add => {
                    if !self.fill_form()? {
                        break;
                    }
                    self.submit().await?;
                }
            }
        }

        Ok(())
    }

    /// Prompt for both fields, offering what is already in the form
    ///
    /// Returns `false` at end of input.
    fn fill_form(&mut self) -> Result<bool> {
        let Some(title) = self.surface.prompt(&field_label("Title", &self.form.title))? else {
            return Ok(false);
        };
        if !title.is_empty() || self.form.title.is_empty() {
            self.form.title = title;
        }

        let Some(content) = self.surface.prompt(&field_label("Content", &self.form.content))? else {
            return Ok(false);
        };
        if !content.is_empty() || self.form.content.is_empty() {
            self.form.content = content;
        }

        Ok(true)
    }
}

fn field_label(name: &str, current: &str) -> String {
    if current.is_empty() {
        format!("{}: ", name)
    } else {
        format!("{} [{}]: ", name, current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedId;
    use crate::db::testing::ScriptedTransport;
    use crate::db::Database;
    use crate::ui::PLACEHOLDER;
    use serde_json::json;
    use std::io::Cursor;
    use std::sync::Arc;

    type TestSession = Session<TerminalSurface<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>>;

    fn setup(input: &str) -> (TestSession, ScriptedTransport) {
        let transport = ScriptedTransport::new();
        let db = Database::with_transport(Arc::new(transport.clone()), "notes");
        let surface = TerminalSurface::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), Vec::new());
        (Session::with_ids(db, surface, Box::new(FixedId(1))), transport)
    }

    fn output(session: TestSession) -> (String, String) {
        let (_, out, err) = session.into_surface().into_parts();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ShellCommand::parse("  ").unwrap(), ShellCommand::Empty);
        assert_eq!(ShellCommand::parse("ADD").unwrap(), ShellCommand::Add);
        assert_eq!(ShellCommand::parse("delete 42").unwrap(), ShellCommand::Delete(42));
        assert_eq!(
            ShellCommand::parse("sql SELECT * FROM notes;").unwrap(),
            ShellCommand::Sql("SELECT * FROM notes;".to_string())
        );
        assert_eq!(ShellCommand::parse("exit").unwrap(), ShellCommand::Quit);

        assert!(ShellCommand::parse("delete abc").is_err());
        assert!(ShellCommand::parse("sql").is_err());
        assert!(ShellCommand::parse("frobnicate").is_err());
    }

    #[tokio::test]
    async fn test_shell_add_and_quit() {
        let (mut session, transport) = setup("add\nGroceries\nMilk, eggs\nquit\n");
        transport
            .reply(json!({"error": "Table already exists"}))
            .reply(json!({"rows": []}))
            .reply(json!({"message": "Query executed successfully"}))
            .reply_rows(&[(1, "Groceries", "Milk, eggs")]);

        session.run_shell().await.unwrap();

        assert_eq!(
            transport.sent()[2],
            "INSERT INTO notes VALUES (1, 'Groceries', 'Milk, eggs');"
        );
        let (out, err) = output(session);
        assert!(out.contains(PLACEHOLDER));
        assert!(out.contains("[1] Groceries"));
        assert!(err.is_empty());
    }

    #[tokio::test]
    async fn test_shell_failed_add_keeps_values() {
        let (mut session, transport) =
            setup("add\nGroceries\nMilk\nadd\n\n\n");
        transport
            .reply(json!({"message": "Query executed successfully"}))
            .reply(json!({"rows": []}))
            .reply(json!({"error_message": "duplicate key"}))
            .reply(json!({"message": "Query executed successfully"}))
            .reply(json!({"rows": []}));

        session.run_shell().await.unwrap();

        let sent = transport.sent();
        assert_eq!(sent[2], sent[3]);
        let (out, err) = output(session);
        assert!(out.contains("Title [Groceries]: "));
        assert_eq!(err, "Error: duplicate key\n");
    }

    #[tokio::test]
    async fn test_shell_delete_prompts() {
        let (mut session, transport) = setup("delete 7\nn\nbogus\n");

        session.run_shell().await.unwrap();

        // create + select at start, nothing for the declined delete
        assert_eq!(transport.sent().len(), 2);
        let (out, _) = output(session);
        assert!(out.contains("Are you sure you want to delete this from the database? [y/N] "));
        assert!(out.contains("unknown command 'bogus'"));
    }
}
