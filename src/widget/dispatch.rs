//! Pointer event dispatch table
//!
//! Handlers are looked up by `(KeyKind, PointerEventKind)`:
//! 1. `Keyboard::handle()` resolves the key's kind from the layout
//! 2. `lookup()` finds the handler for that kind and event
//! 3. The handler returns an `EventResult` describing what happened
//!
//! Handlers can be invoked directly in tests without synthesizing pointer
//! events.

use crate::editable::TextSurface;
use crate::layout::{KeyId, KeyKind, SymbolContent};
use crate::tracing::CaretSnapshot;

use super::messages::{EventResult, PointerEventKind, ReleaseOutcome};
use super::{HoverOverlay, Keyboard};

/// Signature shared by every pointer handler
pub type Handler = fn(&mut Keyboard, &mut dyn TextSurface, KeyId) -> EventResult;

/// The dispatch table
pub const DISPATCH: &[(KeyKind, PointerEventKind, Handler)] = &[
    (KeyKind::Symbol, PointerEventKind::Down, press_key),
    (KeyKind::Modifier, PointerEventKind::Down, press_key),
    (KeyKind::Symbol, PointerEventKind::Up, release_symbol_key),
    (KeyKind::Modifier, PointerEventKind::Up, release_modifier_key),
    (KeyKind::Symbol, PointerEventKind::Enter, show_hover),
    (KeyKind::Modifier, PointerEventKind::Enter, show_hover),
    (KeyKind::Symbol, PointerEventKind::Leave, hide_hover),
    (KeyKind::Modifier, PointerEventKind::Leave, hide_hover),
];

/// Find the handler for a key kind and event kind
pub fn lookup(kind: KeyKind, event: PointerEventKind) -> Option<Handler> {
    DISPATCH
        .iter()
        .find(|(k, e, _)| *k == kind && *e == event)
        .map(|(_, _, handler)| *handler)
}

/// What the active symbol of a released key asks for
enum Produce {
    Char(char),
    Caret(crate::keymap::ControlAction),
    Nothing,
}

/// Mark the key pressed. Visual only; no state changes until release.
pub fn press_key(kb: &mut Keyboard, _surface: &mut dyn TextSurface, key: KeyId) -> EventResult {
    kb.pressed = Some(key);
    if let Some(overlay) = kb.hover.as_mut().filter(|o| o.key == key) {
        overlay.pressed = true;
    }
    EventResult::Pressed
}

/// Release of a key that types or edits. Latched modifiers are consumed by
/// every such release, even one that produced nothing.
pub fn release_symbol_key(kb: &mut Keyboard, surface: &mut dyn TextSurface, key: KeyId) -> EventResult {
    kb.clear_pressed();

    let produce = match kb.active_symbol(key) {
        Some(symbol) => match (&symbol.content, symbol.literal_char()) {
            (SymbolContent::Action(action), _) => Produce::Caret(*action),
            (SymbolContent::Text(_), Some(c)) => Produce::Char(c),
            _ => Produce::Nothing,
        },
        None => Produce::Nothing,
    };

    let before = tracing::enabled!(tracing::Level::TRACE)
        .then(|| CaretSnapshot::capture(&*surface, &kb.caret));

    let outcome = match produce {
        Produce::Char(c) => {
            let mut buf = [0u8; 4];
            kb.caret.insert_at_caret(surface, c.encode_utf8(&mut buf));
            ReleaseOutcome::Inserted(c)
        }
        Produce::Caret(action) => {
            kb.caret.apply(surface, &action.caret_op());
            ReleaseOutcome::Action(action)
        }
        Produce::Nothing => {
            tracing::debug!(?key, mask = %kb.modifiers.global(), "released key has no active symbol");
            ReleaseOutcome::Nothing
        }
    };

    if let Some(before) = before {
        let after = CaretSnapshot::capture(&*surface, &kb.caret);
        if let Some(diff) = before.diff(&after) {
            tracing::trace!(?key, "caret: {}", diff);
        }
    }

    let transition = kb.modifiers.release_other();
    kb.apply_transition(transition);
    surface.focus();
    EventResult::Released(outcome)
}

/// Release of a modifier key: a state transition, never text
pub fn release_modifier_key(kb: &mut Keyboard, surface: &mut dyn TextSurface, key: KeyId) -> EventResult {
    kb.clear_pressed();

    let Some(binding) = kb.layout.key(key).and_then(|k| k.modifier) else {
        return EventResult::Ignored;
    };
    let transition = kb.modifiers.release_modifier(binding.mask);
    kb.apply_transition(transition);
    surface.focus();
    EventResult::Released(ReleaseOutcome::Modifier(transition))
}

/// Show the hover overlay for `key`, replacing any other one
pub fn show_hover(kb: &mut Keyboard, _surface: &mut dyn TextSurface, key: KeyId) -> EventResult {
    if kb.hover.as_ref().is_some_and(|o| o.key == key) {
        return EventResult::Hover(Some(key));
    }
    let Some(definition) = kb.layout.key(key) else {
        return EventResult::Ignored;
    };
    kb.hover = Some(HoverOverlay {
        key,
        placement: definition.hover,
        pressed: kb.pressed == Some(key),
    });
    EventResult::Hover(Some(key))
}

/// Hide the hover overlay if it belongs to `key`
pub fn hide_hover(kb: &mut Keyboard, _surface: &mut dyn TextSurface, key: KeyId) -> EventResult {
    if kb.hover.as_ref().is_some_and(|o| o.key == key) {
        kb.hover = None;
        EventResult::Hover(None)
    } else {
        EventResult::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_and_event_has_a_handler() {
        for kind in [KeyKind::Symbol, KeyKind::Modifier] {
            for event in [
                PointerEventKind::Down,
                PointerEventKind::Up,
                PointerEventKind::Enter,
                PointerEventKind::Leave,
            ] {
                assert!(lookup(kind, event).is_some(), "{:?}/{:?}", kind, event);
            }
        }
    }

    #[test]
    fn test_release_handlers_differ_by_kind() {
        let symbol = lookup(KeyKind::Symbol, PointerEventKind::Up).unwrap();
        let modifier = lookup(KeyKind::Modifier, PointerEventKind::Up).unwrap();
        assert!(symbol as usize != modifier as usize);
    }
}
