//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use softkeys::editable::{CaretRange, StringSurface, TextSurface};
use softkeys::layout::{KeyId, Layout, DEFAULT_HOVER_SCALE};
use softkeys::widget::Keyboard;

/// The sample layout shipped in `samples/keyboard.svg`
pub const SAMPLE_SVG: &str = include_str!("../../samples/keyboard.svg");

pub fn sample_layout() -> Layout {
    Layout::parse(SAMPLE_SVG, DEFAULT_HOVER_SCALE).unwrap()
}

pub fn sample_keyboard() -> Keyboard {
    Keyboard::with_layout(sample_layout())
}

/// Create a surface holding `text` with the selection `[start, end)`
pub fn surface(text: &str, start: usize, end: usize) -> StringSurface {
    StringSurface::from_text(text).with_selection(start, end)
}

/// Look up a key of the keyboard by element id
pub fn key(keyboard: &Keyboard, name: &str) -> KeyId {
    keyboard
        .layout()
        .find(name)
        .unwrap_or_else(|| panic!("no key '{}' in layout", name))
}

/// Tap a sequence of keys by element id
pub fn tap_all(keyboard: &mut Keyboard, input: &mut StringSurface, names: &[&str]) {
    for name in names {
        let id = key(keyboard, name);
        keyboard.tap(input, id);
    }
}

/// Selection as a `(start, end)` pair
pub fn selection(input: &impl TextSurface) -> (usize, usize) {
    let CaretRange { start, end } = input.selection();
    (start, end)
}
