//! Keyboard layouts: key geometry, symbol variants and hover placement
//!
//! A layout is read once from an SVG document and is immutable afterwards.
//!
//! # Loading Layouts
//!
//! ```ignore
//! // From a file (fatal to widget construction on failure)
//! let layout = Layout::load("keyboard.svg".as_ref(), DEFAULT_HOVER_SCALE)?;
//!
//! // Or from an SVG string
//! let layout = Layout::parse(svg, DEFAULT_HOVER_SCALE)?;
//! ```

mod geometry;
mod hover;
mod key;
mod reader;

use std::path::Path;

pub use geometry::{Point, Rect};
pub use hover::{HoverPlacement, DEFAULT_HOVER_SCALE};
pub use key::{KeyDefinition, KeyId, KeyKind, ModifierBinding, SymbolContent, SymbolVariant};
pub use reader::{load_layout_file, parse_layout_svg, LayoutError};

/// A parsed keyboard layout
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    width: f64,
    height: f64,
    keys: Vec<KeyDefinition>,
}

impl Layout {
    pub fn new(width: f64, height: f64, keys: Vec<KeyDefinition>) -> Self {
        Self {
            width,
            height,
            keys,
        }
    }

    /// Read and parse a layout document
    pub fn load(path: &Path, hover_scale: f64) -> Result<Self, LayoutError> {
        load_layout_file(path, hover_scale)
    }

    /// Parse a layout document held in memory
    pub fn parse(svg: &str, hover_scale: f64) -> Result<Self, LayoutError> {
        parse_layout_svg(svg, hover_scale)
    }

    /// Keyboard size `(width, height)`
    pub fn extent(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn keys(&self) -> &[KeyDefinition] {
        &self.keys
    }

    pub fn key(&self, id: KeyId) -> Option<&KeyDefinition> {
        self.keys.get(id.0)
    }

    /// Look a key up by its element id
    pub fn find(&self, name: &str) -> Option<KeyId> {
        self.keys.iter().position(|k| k.name == name).map(KeyId)
    }

    /// Key under a point in keyboard coordinates. Keys later in the document
    /// are painted on top, so they win on overlap.
    pub fn key_at(&self, point: Point) -> Option<KeyId> {
        self.keys
            .iter()
            .rposition(|k| k.absolute_bounds().contains(point))
            .map(KeyId)
    }

    /// Modifier bindings of every modifier key, in document order
    pub fn modifiers(&self) -> impl Iterator<Item = ModifierBinding> + '_ {
        self.keys.iter().filter_map(|k| k.modifier)
    }
}
