//! Caret editing engine for the on-screen keyboard.
//!
//! The keyboard never owns the text it types into. It drives an external
//! control through the [`TextSurface`] trait and reproduces line-aware
//! editing from nothing more than the content and raw selection offsets.
//!
//! # Architecture
//!
//! The core components are:
//!
//! - [`TextSurface`]: Trait over the editable control (value, selection, scroll)
//! - [`StringSurface`]: Surface backed by `String`
//! - [`RopeSurface`]: Surface backed by `ropey::Rope` for large documents
//! - [`CaretController`]: Movement, insertion, deletion and indentation
//! - [`ColumnMemory`]: Sticky column for runs of vertical moves
//! - [`CaretOp`]: Message type for all editing operations
//!
//! # Example
//!
//! ```
//! use softkeys::editable::{CaretController, StringSurface, TextSurface};
//!
//! let mut surface = StringSurface::from_text("ab\ncd");
//! let mut caret = CaretController::new();
//!
//! caret.move_up(&mut surface);
//! caret.insert_at_caret(&mut surface, "!");
//!
//! assert_eq!(surface.value(), "ab!\ncd");
//! ```

mod caret;
mod cursor;
mod messages;
mod selection;
mod surface;

pub use caret::{CaretController, DEFAULT_INDENT};
pub use cursor::ColumnMemory;
pub use messages::{CaretOp, MoveTarget};
pub use selection::CaretRange;
pub use surface::{RopeSurface, StringSurface, TextSurface};
