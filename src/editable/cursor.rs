//! Sticky column memory for vertical caret movement.

/// Remembers the caret's column across a run of consecutive up/down moves.
///
/// When moving up/down through lines of varying length, this preserves the
/// "intended" column even after a shorter line clamped the caret. Any other
/// caret operation ends the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMemory {
    column: Option<usize>,
}

impl ColumnMemory {
    pub const fn new() -> Self {
        Self { column: None }
    }

    /// Whether a run of vertical moves is in progress
    pub fn is_active(&self) -> bool {
        self.column.is_some()
    }

    /// Remembered column, if a vertical run is in progress
    pub fn column(&self) -> Option<usize> {
        self.column
    }

    /// Remember `column` for the rest of the vertical run
    pub fn capture(&mut self, column: usize) {
        self.column = Some(column);
    }

    /// End the vertical run (call after any non-vertical operation)
    pub fn clear(&mut self) {
        self.column = None;
    }

    /// Column to aim for: the remembered one, or `fallback` outside a run
    pub fn effective_column(&self, fallback: usize) -> usize {
        self.column.unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_memory_capture_and_clear() {
        let mut memory = ColumnMemory::new();
        assert!(!memory.is_active());
        assert_eq!(memory.effective_column(4), 4);

        memory.capture(10);
        assert!(memory.is_active());
        assert_eq!(memory.effective_column(4), 10); // Still wants column 10

        memory.clear();
        assert_eq!(memory.column(), None);
        assert_eq!(memory.effective_column(4), 4);
    }
}
