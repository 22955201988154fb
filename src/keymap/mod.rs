//! Modifier handling for the on-screen keyboard
//!
//! This module provides:
//! - Typed modifier masks, classes and states resolved from layout classes
//! - The latch/lock state machine driven by key releases
//! - Selection of the active symbol on every key for the global mask
//!
//! # Architecture
//!
//! ```text
//! key release → ModifierStateMachine → Transition → SymbolVisibility::refresh()
//! ```

mod modifiers;
mod types;
mod visibility;

pub use modifiers::{ModifierKey, ModifierStateMachine, Transition};
pub use types::{ControlAction, ModifierClass, ModifierMask, ModifierState};
pub use visibility::SymbolVisibility;

#[cfg(test)]
mod tests;
