// Terminal surface. Notes and the status line go to the output stream,
// alerts go to the error stream, confirmations are read from input.

use crate::db::{Connectivity, QueryResult};
use crate::error::Result;
use crate::ui::{NotesView, Surface, PLACEHOLDER};
use std::io::{self, BufRead, Stderr, StdinLock, Stdout, Write};

const RULE_WIDTH: usize = 60;

pub struct TerminalSurface<R, W, E> {
    input: R,
    out: W,
    err: E,
    assume_yes: bool,
}

impl TerminalSurface<StdinLock<'static>, Stdout, Stderr> {
    /// Surface on the process's standard streams
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> TerminalSurface<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self {
            input,
            out,
            err,
            assume_yes: false,
        }
    }

    /// Answer every confirmation with yes (`--yes`)
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    /// Print `label` and read one line
    ///
    /// Returns `None` at end of input. The trailing newline is stripped.
    pub fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(trimmed))
    }

    /// Print a free-form line
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    /// Print a raw query response as a table
    pub fn show_result(&mut self, result: &QueryResult) -> Result<()> {
        if let Some(message) = &result.error_message {
            writeln!(self.err, "Error: {}", message)?;
            return Ok(());
        }

        if let Some(rows) = &result.rows {
            let rule = "=".repeat(RULE_WIDTH);
            writeln!(self.out, "{}", rule)?;
            if let Some(columns) = &result.columns {
                writeln!(self.out, "{}", columns.join(" | "))?;
                writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))?;
            }
            for row in rows {
                let cells: Vec<String> = row
                    .iter()
                    .map(|cell| match cell {
                        serde_json::Value::String(s) => s.clone(),
                        serde_json::Value::Null => "NULL".to_string(),
                        other => other.to_string(),
                    })
                    .collect();
                writeln!(self.out, "{}", cells.join(" | "))?;
            }
            writeln!(self.out, "{}", rule)?;
            let count = result.row_count.unwrap_or(rows.len() as u64);
            writeln!(self.out, "({} row{})", count, if count == 1 { "" } else { "s" })?;
        } else if let Some(message) = &result.message {
            writeln!(self.out, "{}", message)?;
        } else {
            writeln!(self.out, "OK")?;
        }

        Ok(())
    }

    /// Hand back the streams, mostly for tests
    pub fn into_parts(self) -> (R, W, E) {
        (self.input, self.out, self.err)
    }
}

impl<R: BufRead, W: Write, E: Write> Surface for TerminalSurface<R, W, E> {
    fn set_status(&mut self, status: Connectivity) -> Result<()> {
        writeln!(self.out, "Status: {}", status)?;
        Ok(())
    }

    fn show_notes(&mut self, view: &NotesView) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out, "{}", rule)?;

        match view {
            NotesView::Placeholder => writeln!(self.out, "{}", PLACEHOLDER)?,
            NotesView::Cards(notes) => {
                for (i, note) in notes.iter().enumerate() {
                    if i > 0 {
                        writeln!(self.out)?;
                    }
                    writeln!(self.out, "[{}] {}", note.id, note.title)?;
                    for line in note.content.lines() {
                        writeln!(self.out, "    {}", line)?;
                    }
                }
            }
        }

        writeln!(self.out, "{}", rule)?;
        self.out.flush()?;
        Ok(())
    }

    fn alert(&mut self, message: &str) -> Result<()> {
        writeln!(self.err, "{}", message)?;
        Ok(())
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }

        let answer = self.prompt(&format!("{} [y/N] ", prompt))?;
        Ok(matches!(
            answer.as_deref().map(|a| a.trim().to_lowercase()).as_deref(),
            Some("y") | Some("yes")
        ))
    }
}
