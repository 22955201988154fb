//! CaretController - line-aware caret movement, insertion, deletion and
//! indentation on top of a [`TextSurface`].
//!
//! The controller keeps no copy of the text or caret between calls. Every
//! operation re-reads the surface, so edits made by other input methods in
//! between keyboard events are picked up. Only the sticky column survives
//! from one call to the next.

use ropey::Rope;

use super::cursor::ColumnMemory;
use super::messages::{CaretOp, MoveTarget};
use super::selection::CaretRange;
use super::surface::TextSurface;

/// Indentation character used when none is configured
pub const DEFAULT_INDENT: char = '\t';

/// Caret editing engine operating on a borrowed [`TextSurface`].
#[derive(Debug, Clone)]
pub struct CaretController {
    /// Sticky column for runs of up/down moves
    memory: ColumnMemory,
    /// Character inserted/removed by tab and left-tab
    indent: char,
}

impl Default for CaretController {
    fn default() -> Self {
        Self::new()
    }
}

/// Fresh read of the surface taken at the start of every operation
struct Snapshot {
    text: Rope,
    range: CaretRange,
    scroll_top: f64,
}

impl Snapshot {
    fn read<S: TextSurface + ?Sized>(surface: &S) -> Self {
        let text = surface.content();
        let range = surface.selection().clamped(text.len_chars());
        Self {
            text,
            range,
            scroll_top: surface.scroll_top(),
        }
    }

    fn len(&self) -> usize {
        self.text.len_chars()
    }

    fn char_at(&self, pos: usize) -> Option<char> {
        (pos < self.len()).then(|| self.text.char(pos))
    }

    /// Start of the line containing `pos` (just past the last `\n` before it)
    fn line_start(&self, pos: usize) -> usize {
        let pos = pos.min(self.len());
        let mut chars = self.text.chars_at(pos);
        let mut at = pos;
        while let Some(c) = chars.prev() {
            if c == '\n' {
                break;
            }
            at -= 1;
        }
        at
    }

    /// First `\n` at or after `pos`
    fn next_newline(&self, pos: usize) -> Option<usize> {
        if pos > self.len() {
            return None;
        }
        self.text
            .chars_at(pos)
            .position(|c| c == '\n')
            .map(|i| pos + i)
    }

    /// Positions of every `\n` in `range`
    fn newlines(&self, range: std::ops::Range<usize>) -> impl Iterator<Item = usize> + '_ {
        let start = range.start.min(self.len());
        let count = range.end.min(self.len()).saturating_sub(start);
        self.text
            .chars_at(start)
            .take(count)
            .enumerate()
            .filter(|&(_, c)| c == '\n')
            .map(move |(i, _)| start + i)
    }
}

/// Write the caret back and restore the viewport
fn finish<S: TextSurface + ?Sized>(surface: &mut S, start: usize, end: usize, scroll_top: f64) {
    surface.set_selection(start, end);
    surface.set_scroll_top(scroll_top);
}

impl CaretController {
    pub fn new() -> Self {
        Self::with_indent(DEFAULT_INDENT)
    }

    /// Create a controller that indents with `indent` instead of a tab
    pub fn with_indent(indent: char) -> Self {
        Self {
            memory: ColumnMemory::new(),
            indent,
        }
    }

    pub fn indent(&self) -> char {
        self.indent
    }

    /// Current sticky column state
    pub fn column_memory(&self) -> ColumnMemory {
        self.memory
    }

    /// Forget the sticky column
    pub fn reset(&mut self) {
        self.memory.clear();
    }

    /// Apply a single editing operation
    pub fn apply<S: TextSurface + ?Sized>(&mut self, surface: &mut S, op: &CaretOp) {
        tracing::trace!(?op, "caret op");
        match op {
            CaretOp::Insert(text) => self.insert_at_caret(surface, text),
            CaretOp::Move(MoveTarget::Left) => self.move_left(surface),
            CaretOp::Move(MoveTarget::Right) => self.move_right(surface),
            CaretOp::Move(MoveTarget::Up) => self.move_up(surface),
            CaretOp::Move(MoveTarget::Down) => self.move_down(surface),
            CaretOp::Backspace => self.backspace(surface),
            CaretOp::Tab => self.tab(surface),
            CaretOp::LeftTab => self.left_tab(surface),
        }
    }
}

// =============================================================================
// Insertion and deletion
// =============================================================================

impl CaretController {
    /// Replace the selection with `text`; the caret lands after it
    pub fn insert_at_caret<S: TextSurface + ?Sized>(&mut self, surface: &mut S, text: &str) {
        let snap = Snapshot::read(surface);
        let CaretRange { start, end } = snap.range;

        surface.replace(start..end, text);
        let caret = start + text.chars().count();
        self.memory.clear();
        finish(surface, caret, caret, snap.scroll_top);
    }

    /// Delete the selection, or the character before a collapsed caret
    pub fn backspace<S: TextSurface + ?Sized>(&mut self, surface: &mut S) {
        let snap = Snapshot::read(surface);
        let CaretRange { start, end } = snap.range;

        let caret = if start != end {
            surface.replace(start..end, "");
            start
        } else if start > 0 {
            surface.replace(start - 1..start, "");
            start - 1
        } else {
            0
        };
        self.memory.clear();
        finish(surface, caret, caret, snap.scroll_top);
    }
}

// =============================================================================
// Movement
// =============================================================================

impl CaretController {
    /// Collapse to one position left of the selection start
    pub fn move_left<S: TextSurface + ?Sized>(&mut self, surface: &mut S) {
        let snap = Snapshot::read(surface);
        let caret = snap.range.start.saturating_sub(1);
        self.memory.clear();
        finish(surface, caret, caret, snap.scroll_top);
    }

    /// Collapse to one position right of the selection end
    pub fn move_right<S: TextSurface + ?Sized>(&mut self, surface: &mut S) {
        let snap = Snapshot::read(surface);
        let caret = (snap.range.end + 1).min(snap.len());
        self.memory.clear();
        finish(surface, caret, caret, snap.scroll_top);
    }

    /// Move to the previous line, keeping the sticky column.
    ///
    /// Works from the selection start. A caret resting right before a line
    /// break during a vertical run keeps the remembered column instead of
    /// capturing its own, so short and empty lines don't shrink it.
    pub fn move_up<S: TextSurface + ?Sized>(&mut self, surface: &mut S) {
        let snap = Snapshot::read(surface);
        let start = snap.range.start;
        let line_start = snap.line_start(start);
        if line_start == 0 {
            return;
        }

        let column = start - line_start;
        if !self.memory.is_active() || snap.char_at(start) != Some('\n') {
            self.memory.capture(column);
        }

        let prev_end = line_start - 1;
        let prev_start = snap.line_start(prev_end);
        let caret = (prev_start + self.memory.effective_column(column)).min(prev_end);
        finish(surface, caret, caret, snap.scroll_top);
    }

    /// Move to the next line, keeping the sticky column.
    ///
    /// Works from the selection end. Unlike `move_up`, the column is captured
    /// even when there is no line below to move to.
    pub fn move_down<S: TextSurface + ?Sized>(&mut self, surface: &mut S) {
        let snap = Snapshot::read(surface);
        let end = snap.range.end;
        let column = end - snap.line_start(end);
        if !self.memory.is_active() || snap.char_at(end) != Some('\n') {
            self.memory.capture(column);
        }

        let Some(newline) = snap.next_newline(end) else {
            return;
        };
        let next_start = newline + 1;
        let next_end = snap.next_newline(next_start).unwrap_or(snap.len());
        let caret = (next_start + self.memory.effective_column(column)).min(next_end);
        finish(surface, caret, caret, snap.scroll_top);
    }
}

// =============================================================================
// Indentation
// =============================================================================

impl CaretController {
    /// Insert an indentation character, or indent every selected line
    pub fn tab<S: TextSurface + ?Sized>(&mut self, surface: &mut S) {
        let snap = Snapshot::read(surface);
        let CaretRange { start, end } = snap.range;
        if start == end {
            let mut buf = [0u8; 4];
            self.insert_at_caret(surface, self.indent.encode_utf8(&mut buf));
            return;
        }

        let first_line = snap.line_start(start);
        // A selection beginning right at a line break holds none of that line
        let indent_first = snap.char_at(start) != Some('\n');

        let mut inserts = Vec::new();
        if indent_first {
            inserts.push(first_line);
        }
        inserts.extend(snap.newlines(start..end).map(|i| i + 1));

        let mut buf = [0u8; 4];
        let indent = self.indent.encode_utf8(&mut buf);
        for &pos in inserts.iter().rev() {
            surface.replace(pos..pos, indent);
        }

        let new_start = if indent_first && first_line < start {
            start + 1
        } else {
            start
        };
        tracing::debug!(lines = inserts.len(), "indented selection");
        self.memory.clear();
        finish(surface, new_start, end + inserts.len(), snap.scroll_top);
    }

    /// Remove one leading indentation character from the current line, or
    /// from every selected line that has one
    pub fn left_tab<S: TextSurface + ?Sized>(&mut self, surface: &mut S) {
        let snap = Snapshot::read(surface);
        let CaretRange { start, end } = snap.range;
        let first_line = snap.line_start(start);
        let first_indented = snap.char_at(first_line) == Some(self.indent);

        if start == end {
            let caret = if first_indented && first_line < start {
                surface.replace(first_line..first_line + 1, "");
                start - 1
            } else {
                start
            };
            self.memory.clear();
            finish(surface, caret, caret, snap.scroll_top);
            return;
        }

        let mut removals = Vec::new();
        if first_indented {
            removals.push(first_line);
        }
        removals.extend(
            snap.newlines(start..end.saturating_sub(1))
                .filter(|&i| snap.char_at(i + 1) == Some(self.indent))
                .map(|i| i + 1),
        );

        for &pos in removals.iter().rev() {
            surface.replace(pos..pos + 1, "");
        }

        let new_start = if first_indented && first_line < start {
            start - 1
        } else {
            start
        };
        tracing::debug!(lines = removals.len(), "unindented selection");
        self.memory.clear();
        finish(surface, new_start, end - removals.len(), snap.scroll_top);
    }
}
