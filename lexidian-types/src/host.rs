//! The editor host, as seen from the completion core.

use crate::stream::TextSink;

/// What the core needs from the editor it runs inside.
///
/// `insert_at_cursor` is called once per delta, in order. The implementation
/// must keep insertion position-stable between calls (each delta lands where
/// the previous one ended) even if the user edits concurrently.
pub trait Editor {
    /// Full text of the active document.
    fn document_text(&self) -> String;

    /// Insert (or replace the selection with) `text` at the cursor.
    fn insert_at_cursor(&mut self, text: &str);

    /// Show a short user-facing notice.
    fn notice(&mut self, message: &str);
}

/// Adapts an [`Editor`] into a [`TextSink`] that inserts at the cursor.
pub struct EditorSink<'a, E: ?Sized>(pub &'a mut E);

impl<E> TextSink for EditorSink<'_, E>
where
    E: Editor + ?Sized,
{
    fn insert(&mut self, text: &str) {
        self.0.insert_at_cursor(text);
    }
}
