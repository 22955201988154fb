//! Core types for the modifier system: ModifierMask, ModifierClass,
//! ModifierState, ControlAction

use std::fmt;
use std::str::FromStr;

use crate::editable::{CaretOp, MoveTarget};

/// Modifier bits as a bitfield for efficient storage and comparison.
///
/// Bit values come from the layout document (`modN` classes), so no bit has a
/// fixed meaning here; shift is conventionally 1, caps lock 2.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModifierMask(u8);

impl ModifierMask {
    pub const NONE: ModifierMask = ModifierMask(0);

    pub const fn new(bits: u8) -> Self {
        ModifierMask(bits)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check if no modifier bit is set
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two masks
    #[inline]
    pub const fn union(self, other: ModifierMask) -> ModifierMask {
        ModifierMask(self.0 | other.0)
    }

    /// Remove the bits of `other`
    #[inline]
    pub const fn difference(self, other: ModifierMask) -> ModifierMask {
        ModifierMask(self.0 & !other.0)
    }

    /// Check if this contains all bits in other
    #[inline]
    pub const fn contains(self, other: ModifierMask) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl std::ops::BitOr for ModifierMask {
    type Output = ModifierMask;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl std::ops::BitOrAssign for ModifierMask {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl From<u8> for ModifierMask {
    fn from(bits: u8) -> Self {
        ModifierMask(bits)
    }
}

impl fmt::Display for ModifierMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mod{}", self.0)
    }
}

/// How a modifier key reacts to releases
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModifierClass {
    /// Shift-like: latches for one keypress, locks on a second self-press
    Momentary,
    /// Caps-lock-like: cycles through its states on self-presses only
    Locker,
}

/// Current state of a modifier
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModifierState {
    #[default]
    Idle,
    /// Active for the next non-modifier key
    Latched,
    /// Active until the modifier is pressed again
    Locked,
}

impl ModifierState {
    /// Whether the modifier's bit counts towards the global mask
    pub fn is_active(self) -> bool {
        !matches!(self, ModifierState::Idle)
    }
}

impl fmt::Display for ModifierState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModifierState::Idle => write!(f, "idle"),
            ModifierState::Latched => write!(f, "latched"),
            ModifierState::Locked => write!(f, "locked"),
        }
    }
}

/// Reserved symbol tags that perform an editing action instead of typing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlAction {
    BackSpace,
    Return,
    Tab,
    IsoLeftTab,
    Left,
    Right,
    Up,
    Down,
}

impl ControlAction {
    pub const ALL: [ControlAction; 8] = [
        ControlAction::BackSpace,
        ControlAction::Return,
        ControlAction::Tab,
        ControlAction::IsoLeftTab,
        ControlAction::Left,
        ControlAction::Right,
        ControlAction::Up,
        ControlAction::Down,
    ];

    /// Tag as it appears in the layout document
    pub fn tag(self) -> &'static str {
        match self {
            ControlAction::BackSpace => "BackSpace",
            ControlAction::Return => "Return",
            ControlAction::Tab => "Tab",
            ControlAction::IsoLeftTab => "ISO_Left_Tab",
            ControlAction::Left => "Left",
            ControlAction::Right => "Right",
            ControlAction::Up => "Up",
            ControlAction::Down => "Down",
        }
    }

    /// Caret operation performed when a key showing this action is released
    pub fn caret_op(self) -> CaretOp {
        match self {
            ControlAction::BackSpace => CaretOp::Backspace,
            ControlAction::Return => CaretOp::Insert("\n".to_string()),
            ControlAction::Tab => CaretOp::Tab,
            ControlAction::IsoLeftTab => CaretOp::LeftTab,
            ControlAction::Left => CaretOp::Move(MoveTarget::Left),
            ControlAction::Right => CaretOp::Move(MoveTarget::Right),
            ControlAction::Up => CaretOp::Move(MoveTarget::Up),
            ControlAction::Down => CaretOp::Move(MoveTarget::Down),
        }
    }
}

impl FromStr for ControlAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ControlAction::ALL
            .into_iter()
            .find(|action| action.tag() == s)
            .ok_or(())
    }
}

impl fmt::Display for ControlAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_empty() {
        assert!(ModifierMask::NONE.is_empty());
        assert!(!ModifierMask::new(1).is_empty());
    }

    #[test]
    fn test_mask_combined() {
        let mask = ModifierMask::new(1) | ModifierMask::new(4);
        assert_eq!(mask.bits(), 5);
        assert!(mask.contains(ModifierMask::new(4)));
        assert!(!mask.contains(ModifierMask::new(2)));
        assert_eq!(mask.difference(ModifierMask::new(1)).bits(), 4);
    }

    #[test]
    fn test_mask_display() {
        assert_eq!(ModifierMask::new(3).to_string(), "mod3");
    }

    #[test]
    fn test_state_activity() {
        assert!(!ModifierState::Idle.is_active());
        assert!(ModifierState::Latched.is_active());
        assert!(ModifierState::Locked.is_active());
    }

    #[test]
    fn test_control_action_tags_round_trip() {
        for action in ControlAction::ALL {
            assert_eq!(action.tag().parse::<ControlAction>(), Ok(action));
        }
        assert!("Home".parse::<ControlAction>().is_err());
    }

    #[test]
    fn test_return_inserts_newline() {
        assert_eq!(
            ControlAction::Return.caret_op(),
            CaretOp::Insert("\n".to_string())
        );
        assert_eq!(ControlAction::IsoLeftTab.caret_op(), CaretOp::LeftTab);
    }
}
