//! Text surface trait and implementations for the caret editing engine.
//!
//! A `TextSurface` is whatever editable control the keyboard types into. The
//! caret controller only ever sees it through this trait: content, selection
//! offsets and scroll position. Offsets are character indices, never bytes.

use ropey::Rope;
use std::ops::Range;

use super::selection::CaretRange;

/// An editable text control driven by the on-screen keyboard.
///
/// Only `value`, `set_value`, `selection` and `set_selection` are required.
/// Implementations backed by a structure with cheap range edits should
/// override `replace`, `len_chars` and `content`.
pub trait TextSurface {
    /// Full content of the control
    fn value(&self) -> String;

    /// Replace the full content. The selection is clamped to the new length.
    fn set_value(&mut self, value: &str);

    /// Current selection, always clamped to the content
    fn selection(&self) -> CaretRange;

    /// Set the selection; out-of-range offsets are clamped
    fn set_selection(&mut self, start: usize, end: usize);

    /// Vertical scroll offset of the viewport
    fn scroll_top(&self) -> f64 {
        0.0
    }

    /// Restore the vertical scroll offset
    fn set_scroll_top(&mut self, _top: f64) {}

    /// Give keyboard focus back to the control
    fn focus(&mut self) {}

    /// Content length in characters
    fn len_chars(&self) -> usize {
        self.value().chars().count()
    }

    /// Content as a rope, read once at the start of every caret operation.
    /// Surfaces that already hold a `Rope` return a clone of it, which shares
    /// the tree instead of copying the text.
    fn content(&self) -> Rope {
        Rope::from_str(&self.value())
    }

    /// Replace a character range with `text`
    fn replace(&mut self, range: Range<usize>, text: &str) {
        let value = self.value();
        let start = char_to_byte(&value, range.start);
        let end = char_to_byte(&value, range.end.max(range.start));
        let mut next = String::with_capacity(value.len() + text.len());
        next.push_str(&value[..start]);
        next.push_str(text);
        next.push_str(&value[end..]);
        self.set_value(&next);
    }
}

/// Convert char offset to byte offset, clamping past the end
fn char_to_byte(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

// =============================================================================
// StringSurface - plain text control (textarea-like)
// =============================================================================

/// TextSurface backed by a `String`.
#[derive(Debug, Clone, Default)]
pub struct StringSurface {
    text: String,
    selection: CaretRange,
    scroll_top: f64,
    focused: bool,
}

impl StringSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface holding `s` with the caret at the end
    pub fn from_text(s: &str) -> Self {
        let len = s.chars().count();
        Self {
            text: s.to_string(),
            selection: CaretRange::collapsed(len),
            ..Self::default()
        }
    }

    /// Builder: set the selection
    pub fn with_selection(mut self, start: usize, end: usize) -> Self {
        self.set_selection(start, end);
        self
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether `focus()` has been called since creation
    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

impl TextSurface for StringSurface {
    fn value(&self) -> String {
        self.text.clone()
    }

    fn content(&self) -> Rope {
        Rope::from_str(&self.text)
    }

    fn set_value(&mut self, value: &str) {
        self.text = value.to_string();
        let len = self.len_chars();
        self.selection = self.selection.clamped(len);
    }

    fn selection(&self) -> CaretRange {
        self.selection
    }

    fn set_selection(&mut self, start: usize, end: usize) {
        self.selection = CaretRange::new(start, end).clamped(self.len_chars());
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn set_scroll_top(&mut self, top: f64) {
        self.scroll_top = top;
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}

// =============================================================================
// RopeSurface - large multi-line documents
// =============================================================================

/// TextSurface backed by `ropey::Rope`, with in-place range replacement.
#[derive(Debug, Clone, Default)]
pub struct RopeSurface {
    rope: Rope,
    selection: CaretRange,
    scroll_top: f64,
}

impl RopeSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface holding `s` with the caret at the end
    pub fn from_text(s: &str) -> Self {
        let rope = Rope::from_str(s);
        let len = rope.len_chars();
        Self {
            rope,
            selection: CaretRange::collapsed(len),
            scroll_top: 0.0,
        }
    }

    /// Builder: set the selection
    pub fn with_selection(mut self, start: usize, end: usize) -> Self {
        self.set_selection(start, end);
        self
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }
}

impl TextSurface for RopeSurface {
    fn value(&self) -> String {
        self.rope.to_string()
    }

    fn set_value(&mut self, value: &str) {
        self.rope = Rope::from_str(value);
        self.selection = self.selection.clamped(self.rope.len_chars());
    }

    fn selection(&self) -> CaretRange {
        self.selection
    }

    fn set_selection(&mut self, start: usize, end: usize) {
        self.selection = CaretRange::new(start, end).clamped(self.rope.len_chars());
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn set_scroll_top(&mut self, top: f64) {
        self.scroll_top = top;
    }

    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn content(&self) -> Rope {
        self.rope.clone()
    }

    fn replace(&mut self, range: Range<usize>, text: &str) {
        let len = self.rope.len_chars();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        if start < end {
            self.rope.remove(start..end);
        }
        if !text.is_empty() {
            self.rope.insert(start, text);
        }
        self.selection = self.selection.clamped(self.rope.len_chars());
    }
}
