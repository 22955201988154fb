//! Integration tests for the modifier system

use super::*;

const SHIFT: ModifierMask = ModifierMask::new(1);
const CAPS: ModifierMask = ModifierMask::new(2);
const ALTGR: ModifierMask = ModifierMask::new(128);

fn machine() -> ModifierStateMachine {
    ModifierStateMachine::with_modifiers([
        (SHIFT, ModifierClass::Momentary),
        (CAPS, ModifierClass::Locker),
        (ALTGR, ModifierClass::Momentary),
    ])
}

/// The global mask must equal the OR of all latched/locked modifier bits
fn assert_mask_invariant(m: &ModifierStateMachine) {
    let expected = m
        .modifiers()
        .iter()
        .filter(|k| k.state.is_active())
        .fold(ModifierMask::NONE, |acc, k| acc | k.mask);
    assert_eq!(m.global(), expected);
}

#[test]
fn test_momentary_latches_then_auto_releases() {
    let mut m = machine();
    m.release_modifier(SHIFT);
    assert_eq!(m.state(SHIFT), Some(ModifierState::Latched));
    assert_eq!(m.global(), SHIFT);

    let t = m.release_other();
    assert!(t.changed());
    assert_eq!(m.state(SHIFT), Some(ModifierState::Idle));
    assert_eq!(m.global(), ModifierMask::NONE);
}

#[test]
fn test_momentary_full_cycle_on_self() {
    let mut m = machine();
    m.release_modifier(SHIFT);
    m.release_modifier(SHIFT);
    assert_eq!(m.state(SHIFT), Some(ModifierState::Locked));

    // Locked survives other keys
    m.release_other();
    m.release_other();
    assert_eq!(m.state(SHIFT), Some(ModifierState::Locked));

    m.release_modifier(SHIFT);
    assert_eq!(m.state(SHIFT), Some(ModifierState::Idle));
}

#[test]
fn test_locker_cycles_independently_of_other_keys() {
    let mut m = machine();
    m.release_modifier(CAPS);
    assert_eq!(m.state(CAPS), Some(ModifierState::Latched));

    m.release_other();
    assert_eq!(m.state(CAPS), Some(ModifierState::Latched));

    m.release_modifier(CAPS);
    assert_eq!(m.state(CAPS), Some(ModifierState::Locked));

    m.release_modifier(CAPS);
    assert_eq!(m.state(CAPS), Some(ModifierState::Idle));
}

#[test]
fn test_combined_modifiers_or_together() {
    let mut m = machine();
    m.release_modifier(SHIFT);
    m.release_modifier(ALTGR);
    m.release_modifier(CAPS);
    assert_eq!(m.global().bits(), 1 | 2 | 128);

    // Other key clears only the latched momentary ones
    m.release_other();
    assert_eq!(m.global(), CAPS);
}

#[test]
fn test_mask_invariant_over_event_sequences() {
    let mut m = machine();
    let events = [SHIFT, CAPS, ALTGR, ModifierMask::new(8), ModifierMask::NONE];

    // Deterministic pseudo-random walk over releases
    let mut seed: u32 = 0x2545_f491;
    for _ in 0..500 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let pick = (seed >> 16) as usize % (events.len() + 1);
        if pick == events.len() {
            m.release_other();
        } else {
            m.release_modifier(events[pick]);
        }
        assert_mask_invariant(&m);
    }
}

#[test]
fn test_transition_before_after() {
    let mut m = machine();
    let t = m.release_modifier(SHIFT);
    assert_eq!(
        t,
        Transition {
            before: ModifierMask::NONE,
            after: SHIFT
        }
    );
    let t = m.release_other();
    assert_eq!(t.before, SHIFT);
    assert_eq!(t.after, ModifierMask::NONE);
}
