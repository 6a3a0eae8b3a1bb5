//! Selection over a single text field, in char offsets.

/// A text selection with anchor (start point) and head (caret side).
/// The anchor stays fixed while the head moves during selection extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Where the selection started (fixed point)
    pub anchor: usize,
    /// Where the caret is (moving point)
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed selection (caret with no selection)
    pub fn collapsed(pos: usize) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    /// Check if selection is empty (anchor == head)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Get the start offset (minimum of anchor and head)
    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    /// Get the end offset (maximum of anchor and head)
    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    /// Number of selected chars
    pub fn len(&self) -> usize {
        self.end() - self.start()
    }

    /// Check if selection is reversed (head before anchor)
    pub fn is_reversed(&self) -> bool {
        self.head < self.anchor
    }

    /// Extend selection to new head offset
    pub fn extend_to(&mut self, pos: usize) {
        self.head = pos;
    }

    /// Collapse selection to start offset
    pub fn collapse_to_start(&mut self) {
        *self = Self::collapsed(self.start());
    }

    /// Collapse selection to end offset
    pub fn collapse_to_end(&mut self) {
        *self = Self::collapsed(self.end());
    }

    /// Keep both ends within a text of `len` chars
    pub fn clamp(self, len: usize) -> Self {
        Self {
            anchor: self.anchor.min(len),
            head: self.head.min(len),
        }
    }

    /// Check if an offset is within this selection
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start() && pos < self.end()
    }
}
