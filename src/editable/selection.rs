//! Caret range type for the caret editing engine.

/// A caret range `[start, end)` in character offsets.
/// `start == end` is a collapsed caret with no selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CaretRange {
    pub start: usize,
    pub end: usize,
}

impl CaretRange {
    /// Create a range; the two ends are ordered so `start <= end`
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Create a collapsed caret (no selection)
    pub const fn collapsed(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Check if the range is empty (no selection)
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Number of selected characters
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.is_collapsed()
    }

    /// Clamp both ends into `0..=len`
    pub fn clamped(self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }

    /// Check if a position is within this range (end exclusive)
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }
}

impl From<(usize, usize)> for CaretRange {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}
