//! Item Edit Toggle
//!
//! Viewing/editing state held by each item card.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing { buffer: String },
}

impl EditMode {
    /// Enter editing with the buffer seeded from current content
    pub fn begin(content: &str) -> Self {
        EditMode::Editing { buffer: content.to_string() }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditMode::Editing { .. })
    }

    pub fn buffer(&self) -> Option<&str> {
        match self {
            EditMode::Editing { buffer } => Some(buffer),
            EditMode::Viewing => None,
        }
    }

    /// Replace the buffer text; ignored while viewing
    pub fn set_buffer(&mut self, text: String) {
        if let EditMode::Editing { buffer } = self {
            *buffer = text;
        }
    }

    /// Leave editing, handing back the buffer to commit
    pub fn commit(&mut self) -> Option<String> {
        match std::mem::take(self) {
            EditMode::Editing { buffer } => Some(buffer),
            EditMode::Viewing => None,
        }
    }

    /// Leave editing, dropping the buffer
    pub fn cancel(&mut self) {
        *self = EditMode::Viewing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_seeds_buffer() {
        let mode = EditMode::begin("Buy milk");
        assert!(mode.is_editing());
        assert_eq!(mode.buffer(), Some("Buy milk"));
    }

    #[test]
    fn test_commit_returns_edited_buffer() {
        let mut mode = EditMode::begin("Buy milk");
        mode.set_buffer("Buy oat milk".to_string());

        assert_eq!(mode.commit(), Some("Buy oat milk".to_string()));
        assert_eq!(mode, EditMode::Viewing);
    }

    #[test]
    fn test_cancel_discards_buffer() {
        let mut mode = EditMode::begin("Buy milk");
        mode.set_buffer("changed".to_string());
        mode.cancel();

        assert_eq!(mode, EditMode::Viewing);
        assert_eq!(mode.commit(), None);
    }

    #[test]
    fn test_set_buffer_ignored_while_viewing() {
        let mut mode = EditMode::Viewing;
        mode.set_buffer("text".to_string());
        assert_eq!(mode.buffer(), None);
    }
}
