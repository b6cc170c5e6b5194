//! RecordingEditor — an [`Editor`] over a plain `String` buffer.

use crate::host::Editor;

/// Editor double with the cursor pinned at the end of the document.
///
/// Records every insertion and notice so tests can assert on order.
#[derive(Debug, Default, Clone)]
pub struct RecordingEditor {
    /// Current document text.
    pub text: String,
    /// Every `insert_at_cursor` argument, in call order.
    pub inserts: Vec<String>,
    /// Every notice shown, in call order.
    pub notices: Vec<String>,
}

impl RecordingEditor {
    /// Create an editor holding `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

impl Editor for RecordingEditor {
    fn document_text(&self) -> String {
        self.text.clone()
    }

    fn insert_at_cursor(&mut self, text: &str) {
        self.text.push_str(text);
        self.inserts.push(text.to_string());
    }

    fn notice(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
