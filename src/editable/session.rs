//! EditSession - text, selection and validator of one input field between edits.

use crate::validation::{TextValidator, ValidationResult};

use super::selection::Selection;

/// The state an edit transaction operates on.
///
/// Invariant: both ends of `selection` are within `text` (in chars).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    text: String,
    selection: Selection,
    validator: TextValidator,
}

impl EditSession {
    /// Create a session with the caret at the end of `text`
    pub fn new(text: impl Into<String>, validator: TextValidator) -> Self {
        let text = text.into();
        let end = text.chars().count();
        Self {
            text,
            selection: Selection::collapsed(end),
            validator,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Caret offset (end of the selection)
    pub fn caret(&self) -> usize {
        self.selection.end()
    }

    pub fn validator(&self) -> &TextValidator {
        &self.validator
    }

    pub fn set_validator(&mut self, validator: TextValidator) {
        self.validator = validator;
    }

    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of char offset `pos`
    fn byte_offset(&self, pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(pos)
            .map_or(self.text.len(), |(i, _)| i)
    }

    /// Get the selected text (empty string if no selection)
    pub fn selected_text(&self) -> &str {
        let start = self.byte_offset(self.selection.start());
        let end = self.byte_offset(self.selection.end());
        &self.text[start..end]
    }

    /// Validate `input` against the current state and commit the result.
    ///
    /// The selection, if any, is replaced and the caret collapses after the
    /// last accepted character.
    pub fn insert(&mut self, input: &str) -> ValidationResult {
        let result = self.validator.validate(
            &self.text,
            input,
            self.selection.end(),
            self.selection.start(),
        );

        self.text.clone_from(&result.text);
        self.selection = Selection::collapsed(result.caret_position);
        result
    }

    /// Delete the selection, or the char before the caret (Backspace)
    pub fn delete_backward(&mut self) -> bool {
        if !self.selection.is_empty() {
            return self.delete_selection();
        }

        let caret = self.caret();
        if caret == 0 {
            return false;
        }
        self.remove(caret - 1, caret);
        true
    }

    /// Delete the selection, or the char after the caret (Delete key)
    pub fn delete_forward(&mut self) -> bool {
        if !self.selection.is_empty() {
            return self.delete_selection();
        }

        let caret = self.caret();
        if caret >= self.len_chars() {
            return false;
        }
        self.remove(caret, caret + 1);
        true
    }

    fn delete_selection(&mut self) -> bool {
        let (start, end) = (self.selection.start(), self.selection.end());
        if start == end {
            return false;
        }
        self.remove(start, end);
        true
    }

    /// Remove chars `[start, end)` and leave the caret at `start`
    fn remove(&mut self, start: usize, end: usize) {
        let start_byte = self.byte_offset(start);
        let end_byte = self.byte_offset(end);
        self.text.replace_range(start_byte..end_byte, "");
        self.selection = Selection::collapsed(start);
    }

    /// Select `[anchor, head]`, clamped to the text
    pub fn select(&mut self, anchor: usize, head: usize) {
        self.selection = Selection::new(anchor, head).clamp(self.len_chars());
    }

    pub fn select_all(&mut self) {
        self.selection = Selection::new(0, self.len_chars());
    }

    /// Move the caret, dropping any selection
    pub fn set_caret(&mut self, pos: usize) {
        self.selection = Selection::collapsed(pos.min(self.len_chars()));
    }

    /// Replace the text without validation, keeping the selection within bounds
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.selection = self.selection.clamp(self.len_chars());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{CharacterValidation, LineType};

    fn plain(text: &str) -> EditSession {
        EditSession::new(
            text,
            TextValidator::new(CharacterValidation::None, LineType::MultiLineNewline),
        )
    }

    #[test]
    fn test_new_places_caret_at_end() {
        let session = plain("héllo");
        assert_eq!(session.caret(), 5);
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_insert_at_caret() {
        let mut session = plain("hllo");
        session.set_caret(1);

        let result = session.insert("e");
        assert_eq!(result.accepted, 1);
        assert_eq!(session.text(), "hello");
        assert_eq!(session.caret(), 2);
    }

    #[test]
    fn test_insert_replaces_selection() {
        let mut session = plain("hello world");
        session.select(5, 0);
        assert_eq!(session.selected_text(), "hello");

        session.insert("X");
        assert_eq!(session.text(), "X world");
        assert_eq!(session.selection(), Selection::collapsed(1));
    }

    #[test]
    fn test_insert_runs_validator() {
        let mut session = EditSession::new(
            "",
            TextValidator::new(CharacterValidation::Integer, LineType::SingleLine)
                .with_character_limit(3),
        );

        session.insert("1a2b3c4");
        assert_eq!(session.text(), "123");
        assert_eq!(session.caret(), 3);
    }

    #[test]
    fn test_delete_backward() {
        let mut session = plain("héllo");
        session.set_caret(2);

        assert!(session.delete_backward());
        assert_eq!(session.text(), "hllo");
        assert_eq!(session.caret(), 1);

        session.set_caret(0);
        assert!(!session.delete_backward());
    }

    #[test]
    fn test_delete_forward() {
        let mut session = plain("hello");
        session.set_caret(0);

        assert!(session.delete_forward());
        assert_eq!(session.text(), "ello");
        assert_eq!(session.caret(), 0);

        session.set_caret(4);
        assert!(!session.delete_forward());
    }

    #[test]
    fn test_delete_selection() {
        let mut session = plain("hello world");
        session.select(5, 11);

        assert!(session.delete_forward());
        assert_eq!(session.text(), "hello");
        assert_eq!(session.caret(), 5);
    }

    #[test]
    fn test_select_all_and_set_text() {
        let mut session = plain("hello");
        session.select_all();
        assert_eq!(session.selected_text(), "hello");

        session.set_text("hi");
        assert_eq!(session.selection(), Selection::new(0, 2));
    }
}
