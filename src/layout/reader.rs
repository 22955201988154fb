//! SVG layout document reader
//!
//! Parses an SVG keyboard into [`KeyDefinition`]s. Class strings are resolved
//! here, once, into typed masks, modifier classes and control actions.
//!
//! Expected shape:
//!
//! ```text
//! <svg width="600" height="200">
//!   <g transform="translate(10,20)">
//!     <g id="k50" class="key mod1" x="0" y="0" width="30" height="30">
//!       <rect class="shape"/>
//!       <use class="symbol mod0 Shift_L" href="#shift"/>
//!     </g>
//!     <g id="k38" class="key" x="30" y="0" width="30" height="30">
//!       <text class="symbol mod0">a</text>
//!       <text class="symbol mod1">A</text>
//!     </g>
//!   </g>
//! </svg>
//! ```

use std::path::Path;

use roxmltree::{Document, Node};

use crate::keymap::{ControlAction, ModifierClass, ModifierMask};

use super::geometry::{Point, Rect};
use super::hover::HoverPlacement;
use super::key::{KeyDefinition, ModifierBinding, SymbolContent, SymbolVariant};
use super::Layout;

/// Errors that can occur when loading a layout document
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    IoError(String),
    XmlError(String),
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },
    InvalidNumber {
        element: String,
        attribute: &'static str,
        value: String,
    },
    NoKeys,
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::IoError(e) => write!(f, "IO error: {}", e),
            LayoutError::XmlError(e) => write!(f, "XML error: {}", e),
            LayoutError::MissingAttribute { element, attribute } => {
                write!(f, "Missing attribute '{}' on {}", attribute, element)
            }
            LayoutError::InvalidNumber {
                element,
                attribute,
                value,
            } => write!(
                f,
                "Invalid number '{}' in attribute '{}' on {}",
                value, attribute, element
            ),
            LayoutError::NoKeys => write!(f, "Layout contains no keys"),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Load a layout document from disk
pub fn load_layout_file(path: &Path, hover_scale: f64) -> Result<Layout, LayoutError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| LayoutError::IoError(format!("{}: {}", path.display(), e)))?;

    parse_layout_svg(&content, hover_scale)
}

/// Parse a layout document from an SVG string
pub fn parse_layout_svg(svg: &str, hover_scale: f64) -> Result<Layout, LayoutError> {
    let doc = Document::parse(svg).map_err(|e| LayoutError::XmlError(e.to_string()))?;
    let root = doc.root_element();

    let width = number_attr(root, "width")?;
    let height = number_attr(root, "height")?;

    let mut keys = Vec::new();
    for node in root.descendants().filter(|n| has_class(*n, "key")) {
        keys.push(parse_key(node, (width, height), hover_scale)?);
    }

    if keys.is_empty() {
        return Err(LayoutError::NoKeys);
    }
    tracing::debug!(keys = keys.len(), width, height, "parsed layout");
    Ok(Layout::new(width, height, keys))
}

fn parse_key(node: Node<'_, '_>, extent: (f64, f64), hover_scale: f64) -> Result<KeyDefinition, LayoutError> {
    let bounds = Rect::new(
        number_attr(node, "x")?,
        number_attr(node, "y")?,
        number_attr(node, "width")?,
        number_attr(node, "height")?,
    );
    let origin = node.parent_element().map(group_origin).unwrap_or_default();

    let modifier = match mask_token(node) {
        Some(Ok(mask)) if !mask.is_empty() => Some(ModifierBinding {
            mask,
            class: if has_class(node, "locker") {
                ModifierClass::Locker
            } else {
                ModifierClass::Momentary
            },
        }),
        Some(Err(token)) => {
            tracing::warn!(
                key = %describe(node),
                class = token,
                "modifier class out of range, treating as plain key"
            );
            None
        }
        _ => None,
    };

    let symbols = node
        .descendants()
        .filter(|n| has_class(*n, "symbol"))
        .filter_map(parse_symbol)
        .collect();

    Ok(KeyDefinition {
        name: describe(node),
        bounds,
        origin,
        symbols,
        modifier,
        hover: HoverPlacement::compute(bounds, origin, extent, hover_scale),
    })
}

/// `None` for a variant whose mask can never be active
fn parse_symbol(node: Node<'_, '_>) -> Option<SymbolVariant> {
    let mask = match mask_token(node) {
        Some(Ok(mask)) => mask,
        Some(Err(token)) => {
            tracing::warn!(
                symbol = %describe(node),
                class = token,
                "modifier class out of range, dropping symbol"
            );
            return None;
        }
        None => ModifierMask::NONE,
    };

    let action = classes(node).find_map(|token| token.parse::<ControlAction>().ok());
    let content = match action {
        Some(action) => SymbolContent::Action(action),
        None if node.tag_name().name() == "text" => SymbolContent::Text(
            node.descendants()
                .filter(|n| n.is_text())
                .filter_map(|n| n.text())
                .collect(),
        ),
        None => SymbolContent::Glyph,
    };
    Some(SymbolVariant { mask, content })
}

/// Translation of a key's group, from `translate(ox, oy)` or `translate(ox oy)`
fn group_origin(node: Node<'_, '_>) -> Point {
    let Some(transform) = node.attribute("transform") else {
        return Point::default();
    };
    let parsed = transform
        .trim()
        .strip_prefix("translate(")
        .and_then(|rest| rest.strip_suffix(')'))
        .map(|args| {
            args.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|s| !s.is_empty())
                .map(str::parse::<f64>)
                .collect::<Result<Vec<_>, _>>()
        });

    match parsed {
        Some(Ok(args)) if args.len() == 1 => Point::new(args[0], 0.0),
        Some(Ok(args)) if args.len() == 2 => Point::new(args[0], args[1]),
        _ => {
            tracing::warn!(transform, "unsupported group transform, assuming no offset");
            Point::default()
        }
    }
}

fn classes<'a>(node: Node<'a, '_>) -> impl Iterator<Item = &'a str> {
    node.attribute("class").unwrap_or("").split_whitespace()
}

fn has_class(node: Node<'_, '_>, class: &str) -> bool {
    node.is_element() && classes(node).any(|c| c == class)
}

/// The `modN` class token, if any. Tokens such as `modifier` are not mask
/// tokens; a `modN` whose value does not fit a mask comes back as `Err`.
fn mask_token<'a>(node: Node<'a, '_>) -> Option<Result<ModifierMask, &'a str>> {
    let token = classes(node).find(|c| {
        c.strip_prefix("mod")
            .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
    })?;
    Some(token[3..].parse::<u8>().map(ModifierMask::new).map_err(|_| token))
}

fn number_attr(node: Node<'_, '_>, attribute: &'static str) -> Result<f64, LayoutError> {
    let value = node
        .attribute(attribute)
        .ok_or_else(|| LayoutError::MissingAttribute {
            element: describe(node),
            attribute,
        })?;
    let trimmed = value.trim();
    trimmed
        .strip_suffix("px")
        .unwrap_or(trimmed)
        .parse::<f64>()
        .map_err(|_| LayoutError::InvalidNumber {
            element: describe(node),
            attribute,
            value: value.to_string(),
        })
}

/// Element id, or tag name when it has none
fn describe(node: Node<'_, '_>) -> String {
    match node.attribute("id") {
        Some(id) => id.to_string(),
        None => format!("<{}>", node.tag_name().name()),
    }
}
