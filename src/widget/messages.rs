//! Pointer events delivered to the keyboard and their results

use crate::keymap::{ControlAction, Transition};
use crate::layout::KeyId;

/// Kind of pointer event, the second half of the dispatch key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Down,
    Up,
    Enter,
    Leave,
}

/// A pointer event over a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Button/touch pressed over the key
    Down(KeyId),
    /// Button/touch released over the key
    Up(KeyId),
    /// Pointer entered the key
    Enter(KeyId),
    /// Pointer left the key
    Leave(KeyId),
}

impl PointerEvent {
    pub fn kind(&self) -> PointerEventKind {
        match self {
            PointerEvent::Down(_) => PointerEventKind::Down,
            PointerEvent::Up(_) => PointerEventKind::Up,
            PointerEvent::Enter(_) => PointerEventKind::Enter,
            PointerEvent::Leave(_) => PointerEventKind::Leave,
        }
    }

    pub fn key(&self) -> KeyId {
        match *self {
            PointerEvent::Down(key)
            | PointerEvent::Up(key)
            | PointerEvent::Enter(key)
            | PointerEvent::Leave(key) => key,
        }
    }
}

/// What a key release did. At most one effect happens per release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// A character was typed
    Inserted(char),
    /// An editing action ran
    Action(ControlAction),
    /// A modifier changed state
    Modifier(Transition),
    /// The key shows no usable symbol under the current modifiers
    Nothing,
}

/// Result of dispatching a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Key marked pressed
    Pressed,
    /// Key released
    Released(ReleaseOutcome),
    /// Hover overlay now shows this key (or nothing)
    Hover(Option<KeyId>),
    /// Event did not apply (unknown key, stale leave)
    Ignored,
}

impl EventResult {
    /// The release outcome, if this was a release
    pub fn outcome(&self) -> Option<ReleaseOutcome> {
        match self {
            EventResult::Released(outcome) => Some(*outcome),
            _ => None,
        }
    }
}
