//! Latching/locking modifier state machine

use super::types::{ModifierClass, ModifierMask, ModifierState};

/// A modifier known to the state machine.
///
/// Identified by its bit value: every physical key carrying the same bit
/// (left and right shift, say) shares this one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifierKey {
    pub mask: ModifierMask,
    pub class: ModifierClass,
    pub state: ModifierState,
}

/// Global mask before and after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub before: ModifierMask,
    pub after: ModifierMask,
}

impl Transition {
    /// Whether the global mask changed (symbol visibility must be refreshed)
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}

/// Tracks every modifier's state and the global modifier mask.
///
/// The global mask is recomputed after every transition, so it always equals
/// the OR of the bits of all latched or locked modifiers.
#[derive(Debug, Clone, Default)]
pub struct ModifierStateMachine {
    modifiers: Vec<ModifierKey>,
    global: ModifierMask,
}

impl ModifierStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state machine with the given modifiers registered
    pub fn with_modifiers(modifiers: impl IntoIterator<Item = (ModifierMask, ModifierClass)>) -> Self {
        let mut machine = Self::new();
        for (mask, class) in modifiers {
            machine.register(mask, class);
        }
        machine
    }

    /// Register a modifier. Registering a bit twice keeps one entry; if any
    /// registration says `Locker`, the modifier is a locker.
    pub fn register(&mut self, mask: ModifierMask, class: ModifierClass) {
        if mask.is_empty() {
            tracing::warn!("ignoring modifier with empty mask");
            return;
        }
        match self.modifiers.iter_mut().find(|m| m.mask == mask) {
            Some(existing) => {
                if class == ModifierClass::Locker {
                    existing.class = ModifierClass::Locker;
                }
            }
            None => self.modifiers.push(ModifierKey {
                mask,
                class,
                state: ModifierState::Idle,
            }),
        }
    }

    /// Current global modifier mask
    pub fn global(&self) -> ModifierMask {
        self.global
    }

    /// All registered modifiers
    pub fn modifiers(&self) -> &[ModifierKey] {
        &self.modifiers
    }

    /// State of the modifier with bit value `mask`, if registered
    pub fn state(&self, mask: ModifierMask) -> Option<ModifierState> {
        self.modifiers
            .iter()
            .find(|m| m.mask == mask)
            .map(|m| m.state)
    }

    /// Class of the modifier with bit value `mask`, if registered
    pub fn class(&self, mask: ModifierMask) -> Option<ModifierClass> {
        self.modifiers
            .iter()
            .find(|m| m.mask == mask)
            .map(|m| m.class)
    }

    /// Put every registered modifier contained in `mask` into the locked
    /// state, e.g. to mirror a caps lock that is already engaged
    pub fn lock(&mut self, mask: ModifierMask) -> Transition {
        for modifier in &mut self.modifiers {
            if mask.contains(modifier.mask) {
                modifier.state = ModifierState::Locked;
            }
        }
        self.recompute()
    }

    /// Route the release of a modifier key.
    ///
    /// Both classes cycle `Idle → Latched → Locked → Idle` on their own
    /// releases. Unknown modifiers leave every state untouched.
    pub fn release_modifier(&mut self, mask: ModifierMask) -> Transition {
        let Some(modifier) = self.modifiers.iter_mut().find(|m| m.mask == mask) else {
            tracing::warn!(%mask, "release of unknown modifier ignored");
            return self.unchanged();
        };

        let from = modifier.state;
        modifier.state = match from {
            ModifierState::Idle => ModifierState::Latched,
            ModifierState::Latched => ModifierState::Locked,
            ModifierState::Locked => ModifierState::Idle,
        };
        tracing::debug!(%mask, %from, to = %modifier.state, "modifier transition");
        self.recompute()
    }

    /// Route the release of a non-modifier key: latched momentary modifiers
    /// fall back to idle. Locked modifiers and lockers are unaffected.
    pub fn release_other(&mut self) -> Transition {
        for modifier in &mut self.modifiers {
            if modifier.class == ModifierClass::Momentary
                && modifier.state == ModifierState::Latched
            {
                tracing::debug!(mask = %modifier.mask, "modifier unlatched");
                modifier.state = ModifierState::Idle;
            }
        }
        self.recompute()
    }

    /// Return every modifier to idle
    pub fn reset(&mut self) -> Transition {
        for modifier in &mut self.modifiers {
            modifier.state = ModifierState::Idle;
        }
        self.recompute()
    }

    fn unchanged(&self) -> Transition {
        Transition {
            before: self.global,
            after: self.global,
        }
    }

    fn recompute(&mut self) -> Transition {
        let before = self.global;
        self.global = self
            .modifiers
            .iter()
            .filter(|m| m.state.is_active())
            .fold(ModifierMask::NONE, |acc, m| acc | m.mask);
        Transition {
            before,
            after: self.global,
        }
    }
}
