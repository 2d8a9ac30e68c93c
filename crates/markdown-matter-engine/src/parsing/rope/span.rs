/// A byte range `[start, end)` into the source buffer.
///
/// Front-matter results and line maps store spans rather than copied text,
/// so slicing the source with any span reproduces the exact input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices `src` with this span, or returns `""` when the span is empty
    /// or out of bounds.
    #[must_use]
    pub fn slice(self, src: &str) -> &str {
        if self.is_empty() {
            return "";
        }
        src.get(self.start..self.end).unwrap_or("")
    }
}
