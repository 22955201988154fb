//! softkeys - on-screen keyboard engine
//!
//! This crate provides the core types and logic for a pointer-driven virtual
//! keyboard: layouts read from SVG documents, latching/locking modifiers,
//! and a caret engine that edits any text input through the `TextSurface`
//! trait.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod keymap;
pub mod layout;
pub mod tracing;
pub mod widget;

// Re-export commonly used types
pub use config::WidgetConfig;
pub use editable::{CaretController, StringSurface, TextSurface};
pub use layout::{KeyId, Layout, LayoutError};
pub use widget::Keyboard;
