// Static HTML rendering of the notes page.
//
// `HtmlPage` collects what a session shows (status, grid, alerts) and
// `render` turns it into a complete document. All user text is escaped.

use std::fmt::Write as _;

use crate::db::Connectivity;
use crate::error::Result;
use crate::ui::{NoteForm, NotesView, Surface, DELETE_LABEL, PLACEHOLDER};

const STYLE: &str = "\
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; \
background: #f4f5fb; margin: 0; padding: 20px; color: #333; }
.container { max-width: 1000px; margin: 0 auto; }
#db-status { font-size: 0.9rem; color: #667eea; margin-bottom: 20px; }
#noteForm { display: flex; flex-direction: column; gap: 10px; margin-bottom: 30px; }
#noteForm input, #noteForm textarea { padding: 10px; border: 2px solid #e0e0e0; border-radius: 8px; }
.alert { background: #fed7d7; color: #742a2a; padding: 10px; border-radius: 8px; margin-bottom: 10px; }
#notesGrid { display: grid; grid-template-columns: repeat(auto-fill, minmax(250px, 1fr)); gap: 20px; }
.note-card { background: white; border-radius: 10px; padding: 20px; box-shadow: 0 5px 15px rgba(0,0,0,0.1); }
.delete-btn { background: #e53e3e; color: white; border: none; padding: 8px 16px; border-radius: 6px; }";

/// A page-shaped surface that records what it was told to show
///
/// A static page cannot ask the user anything, so confirmations are declined.
#[derive(Debug, Clone, Default)]
pub struct HtmlPage {
    status: Connectivity,
    view: Option<NotesView>,
    alerts: Vec<String>,
}

impl HtmlPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Connectivity {
        self.status
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Render the full document with `form` pre-filled
    pub fn render(&self, form: &NoteForm) -> String {
        let placeholder = NotesView::Placeholder;
        let view = self.view.as_ref().unwrap_or(&placeholder);
        render_page(self.status, form, view, &self.alerts)
    }
}

impl Surface for HtmlPage {
    fn set_status(&mut self, status: Connectivity) -> Result<()> {
        self.status = status;
        Ok(())
    }

    fn show_notes(&mut self, view: &NotesView) -> Result<()> {
        self.view = Some(view.clone());
        Ok(())
    }

    fn alert(&mut self, message: &str) -> Result<()> {
        self.alerts.push(message.to_string());
        Ok(())
    }

    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Ok(false)
    }
}

/// Build the whole notes page
pub fn render_page(
    status: Connectivity,
    form: &NoteForm,
    view: &NotesView,
    alerts: &[String],
) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str("<title>B-Tree Notes</title>\n");
    let _ = writeln!(html, "<style>\n{}\n</style>", STYLE);
    html.push_str("</head>\n<body>\n<div class=\"container\">\n");
    html.push_str("<h1>B-Tree Notes</h1>\n");
    let _ = writeln!(
        html,
        "<div id=\"db-status\">{}</div>",
        escape_html(status.status_text())
    );

    for alert in alerts {
        let _ = writeln!(html, "<div class=\"alert\">{}</div>", escape_html(alert));
    }

    html.push_str("<form id=\"noteForm\" method=\"post\">\n");
    let _ = writeln!(
        html,
        "<input id=\"noteTitle\" name=\"title\" placeholder=\"Title\" value=\"{}\">",
        escape_html(&form.title)
    );
    let _ = writeln!(
        html,
        "<textarea id=\"noteContent\" name=\"content\" placeholder=\"Content\">{}</textarea>",
        escape_html(&form.content)
    );
    html.push_str("<button type=\"submit\">Save Note</button>\n</form>\n");

    html.push_str("<div id=\"notesGrid\">\n");
    html.push_str(&render_grid(view));
    html.push_str("</div>\n</div>\n</body>\n</html>\n");

    html
}

/// Inner markup of the notes grid
pub fn render_grid(view: &NotesView) -> String {
    match view {
        NotesView::Placeholder => format!("<p>{}</p>\n", escape_html(PLACEHOLDER)),
        NotesView::Cards(notes) => {
            let mut out = String::new();
            for note in notes {
                let _ = write!(
                    out,
                    "<div class=\"note-card\">\n\
                     <h3>{}</h3>\n\
                     <p>{}</p>\n\
                     <div class=\"actions\">\n\
                     <button class=\"delete-btn\" data-note-id=\"{}\">{}</button>\n\
                     </div>\n\
                     </div>\n",
                    escape_html(&note.title),
                    escape_html(&note.content),
                    note.id,
                    DELETE_LABEL
                );
            }
            out
        }
    }
}

/// Escape text for element content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
