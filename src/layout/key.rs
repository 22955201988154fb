//! Key definitions parsed from a layout document

use crate::keymap::{ControlAction, ModifierClass, ModifierMask};

use super::geometry::{Point, Rect};
use super::hover::HoverPlacement;

/// Index of a key within its [`super::Layout`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyId(pub usize);

/// What a symbol variant produces when its key is released
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolContent {
    /// Literal text label
    Text(String),
    /// Reserved editing action
    Action(ControlAction),
    /// Glyph reference (e.g. an SVG `<use>`) with no text to type
    Glyph,
}

/// One of the symbols a key can show, active under exactly one modifier mask
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolVariant {
    pub mask: ModifierMask,
    pub content: SymbolContent,
}

impl SymbolVariant {
    pub fn text(mask: ModifierMask, text: impl Into<String>) -> Self {
        Self {
            mask,
            content: SymbolContent::Text(text.into()),
        }
    }

    pub fn action(mask: ModifierMask, action: ControlAction) -> Self {
        Self {
            mask,
            content: SymbolContent::Action(action),
        }
    }

    /// The character typed by this symbol, if its label is exactly one char
    pub fn literal_char(&self) -> Option<char> {
        match &self.content {
            SymbolContent::Text(text) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    pub fn action_tag(&self) -> Option<ControlAction> {
        match self.content {
            SymbolContent::Action(action) => Some(action),
            _ => None,
        }
    }
}

/// Modifier carried by a modifier key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifierBinding {
    pub mask: ModifierMask,
    pub class: ModifierClass,
}

/// Kind of key, used to pick pointer handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// Types text or performs an editing action
    Symbol,
    /// Changes modifier state
    Modifier,
}

/// A key of the on-screen keyboard. Immutable once the layout is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyDefinition {
    /// Element id in the layout document
    pub name: String,
    /// Geometry relative to the key's group origin
    pub bounds: Rect,
    /// Translation of the group holding the key
    pub origin: Point,
    pub symbols: Vec<SymbolVariant>,
    pub modifier: Option<ModifierBinding>,
    pub hover: HoverPlacement,
}

impl KeyDefinition {
    pub fn kind(&self) -> KeyKind {
        if self.modifier.is_some() {
            KeyKind::Modifier
        } else {
            KeyKind::Symbol
        }
    }

    /// Bounds in keyboard coordinates
    pub fn absolute_bounds(&self) -> Rect {
        self.bounds.translated(self.origin)
    }

    /// Index of the symbol active under `mask`. The first variant wins when a
    /// document lists several for the same mask.
    pub fn variant_for(&self, mask: ModifierMask) -> Option<usize> {
        self.symbols.iter().position(|s| s.mask == mask)
    }
}
