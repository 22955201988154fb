//! Message types for the caret editing engine.

/// Target for caret movement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    /// Move one character left
    Left,
    /// Move one character right
    Right,
    /// Move one line up
    Up,
    /// Move one line down
    Down,
}

impl MoveTarget {
    /// Up/down moves keep the sticky column alive
    pub fn is_vertical(self) -> bool {
        matches!(self, MoveTarget::Up | MoveTarget::Down)
    }
}

/// A single editing operation applied by [`super::CaretController::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaretOp {
    /// Replace the selection with text
    Insert(String),
    /// Move the caret
    Move(MoveTarget),
    /// Delete the selection, or the character before the caret
    Backspace,
    /// Indent (or insert an indentation character)
    Tab,
    /// Unindent
    LeftTab,
}

impl CaretOp {
    /// Check if this operation modifies the content
    pub fn is_editing(&self) -> bool {
        !matches!(self, CaretOp::Move(_))
    }

    /// Check if this operation keeps the sticky column
    pub fn is_vertical(&self) -> bool {
        matches!(self, CaretOp::Move(target) if target.is_vertical())
    }
}
