//! Evaluation context for a single candidate character.

/// Everything a condition may look at besides the candidate itself.
///
/// The working buffer is split at the insertion point: `before` holds the text
/// up to the insertion point (including characters accepted earlier in the
/// same operation) and `after` holds the text that follows the replaced span.
#[derive(Debug, Clone, Copy)]
pub struct CharContext<'a> {
    /// Working buffer up to the insertion point
    pub before: &'a [char],
    /// Working buffer after the insertion point
    pub after: &'a [char],
    /// Index of the candidate within the inserted text
    pub index_in_operation: usize,
    /// Caret position of the edit request
    pub caret_position: usize,
    /// Selection start of the edit request
    pub selection_start: usize,
}

impl<'a> CharContext<'a> {
    pub fn new(before: &'a [char], after: &'a [char], index_in_operation: usize) -> Self {
        let caret = before.len();
        Self {
            before,
            after,
            index_in_operation,
            caret_position: caret,
            selection_start: caret,
        }
    }

    /// Context for validating a character against a plain text, as if typed at its end
    pub fn at_end_of(text: &'a [char]) -> Self {
        Self::new(text, &[], 0)
    }

    /// Total length of the working buffer
    pub fn buffer_len(&self) -> usize {
        self.before.len() + self.after.len()
    }

    /// Position the candidate would take in the buffer
    pub fn position(&self) -> usize {
        self.before.len()
    }

    /// Character immediately before the insertion point
    pub fn previous(&self) -> Option<char> {
        self.before.last().copied()
    }

    /// Character immediately after the insertion point
    pub fn next(&self) -> Option<char> {
        self.after.first().copied()
    }

    /// First character of the whole working buffer
    pub fn first(&self) -> Option<char> {
        self.before.first().or(self.after.first()).copied()
    }

    /// Number of occurrences of `ch` in the whole working buffer
    pub fn count(&self, ch: char) -> usize {
        self.chars().filter(|&c| c == ch).count()
    }

    /// Check if the whole working buffer contains `ch`
    pub fn contains(&self, ch: char) -> bool {
        self.chars().any(|c| c == ch)
    }

    fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.before.iter().chain(self.after.iter()).copied()
    }
}
