// Surface that records every call, for handler tests.

use crate::db::Connectivity;
use crate::error::Result;
use crate::ui::{NotesView, Surface};

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub statuses: Vec<Connectivity>,
    pub views: Vec<NotesView>,
    pub alerts: Vec<String>,
    pub prompts: Vec<String>,
    pub answer: bool,
}

impl RecordingSurface {
    /// Surface that answers every confirmation with `answer`
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            ..Self::default()
        }
    }

    pub fn last_status(&self) -> Option<Connectivity> {
        self.statuses.last().copied()
    }

    pub fn last_view(&self) -> Option<&NotesView> {
        self.views.last()
    }
}

impl Surface for RecordingSurface {
    fn set_status(&mut self, status: Connectivity) -> Result<()> {
        self.statuses.push(status);
        Ok(())
    }

    fn show_notes(&mut self, view: &NotesView) -> Result<()> {
        self.views.push(view.clone());
        Ok(())
    }

    fn alert(&mut self, message: &str) -> Result<()> {
        self.alerts.push(message.to_string());
        Ok(())
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self.prompts.push(prompt.to_string());
        Ok(self.answer)
    }
}
