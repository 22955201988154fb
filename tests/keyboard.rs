//! Keyboard widget tests - typing, modifiers, hover and pointer dispatch

mod common;

use common::{key, sample_keyboard, selection, surface, tap_all};
use softkeys::editable::{StringSurface, TextSurface};
use softkeys::keymap::{ControlAction, ModifierMask, ModifierState};
use softkeys::layout::{Point, Rect};
use softkeys::widget::{EventResult, ReleaseOutcome};

const SHIFT: ModifierMask = ModifierMask::new(1);
const CAPS: ModifierMask = ModifierMask::new(2);
const ALTGR: ModifierMask = ModifierMask::new(128);

// ========================================================================
// Typing
// ========================================================================

#[test]
fn test_plain_typing() {
    let mut kb = sample_keyboard();
    let mut input = StringSurface::new();
    tap_all(&mut kb, &mut input, &["a", "b", "e", "one", "space"]);

    assert_eq!(input.value(), "abe1 ");
    assert_eq!(selection(&input), (5, 5));
    assert!(input.is_focused());
}

#[test]
fn test_typing_replaces_selection() {
    let mut kb = sample_keyboard();
    let mut input = surface("hello", 1, 4);
    tap_all(&mut kb, &mut input, &["a"]);

    assert_eq!(input.value(), "hao");
    assert_eq!(selection(&input), (2, 2));
}

#[test]
fn test_modifier_key_never_types() {
    let mut kb = sample_keyboard();
    let mut input = StringSurface::new();
    let caps = key(&kb, "caps");

    let outcome = kb.tap(&mut input, caps).outcome();
    assert!(matches!(outcome, Some(ReleaseOutcome::Modifier(_))));
    assert_eq!(input.value(), "");
}

#[test]
fn test_every_release_has_exactly_one_outcome() {
    let mut kb = sample_keyboard();
    let mut input = surface("ab\ncd", 5, 5);
    let names = ["a", "shift", "b", "bksp", "return", "up", "caps", "one", "tab", "altgr", "e"];

    for name in names {
        let id = key(&kb, name);
        kb.pointer_down(&mut input, id);
        let result = kb.pointer_up(&mut input, id);
        assert!(result.outcome().is_some(), "no outcome for {}", name);
    }
}

// ========================================================================
// Momentary modifiers
// ========================================================================

#[test]
fn test_shift_latches_for_one_key() {
    let mut kb = sample_keyboard();
    let mut input = StringSurface::new();
    tap_all(&mut kb, &mut input, &["shift", "a", "b"]);

    assert_eq!(input.value(), "Ab");
    assert_eq!(kb.mask(), ModifierMask::NONE);
}

#[test]
fn test_shift_double_tap_locks_then_third_releases() {
    let mut kb = sample_keyboard();
    let mut input = StringSurface::new();
    tap_all(&mut kb, &mut input, &["shift", "shift", "a", "b"]);
    assert_eq!(input.value(), "AB");
    assert_eq!(kb.modifiers().state(SHIFT), Some(ModifierState::Locked));

    tap_all(&mut kb, &mut input, &["shift", "e"]);
    assert_eq!(input.value(), "ABe");
    assert_eq!(kb.modifiers().state(SHIFT), Some(ModifierState::Idle));
}

#[test]
fn test_shifted_digit_and_action() {
    let mut kb = sample_keyboard();
    let mut input = StringSurface::new();
    tap_all(&mut kb, &mut input, &["shift", "one", "shift", "two", "shift", "bksp"]);

    assert_eq!(input.value(), "!");
}

#[test]
fn test_key_without_variant_still_consumes_latch() {
    let mut kb = sample_keyboard();
    let mut input = StringSurface::new();
    let a = key(&kb, "a");

    tap_all(&mut kb, &mut input, &["altgr"]);
    assert_eq!(kb.mask(), ALTGR);
    assert!(kb.active_symbol(a).is_none());

    assert_eq!(kb.tap(&mut input, a).outcome(), Some(ReleaseOutcome::Nothing));
    assert_eq!(input.value(), "");
    assert_eq!(kb.mask(), ModifierMask::NONE);
}

#[test]
fn test_altgr_symbol() {
    let mut kb = sample_keyboard();
    let mut input = StringSurface::new();
    tap_all(&mut kb, &mut input, &["altgr", "e", "e"]);

    assert_eq!(input.value(), "€e");
}

// ========================================================================
// Lockers
// ========================================================================

#[test]
fn test_caps_persists_across_keys() {
    let mut kb = sample_keyboard();
    let mut input = StringSurface::new();
    tap_all(&mut kb, &mut input, &["caps", "a", "b", "e"]);

    assert_eq!(input.value(), "ABE");
    assert_eq!(kb.modifiers().state(CAPS), Some(ModifierState::Latched));
}

#[test]
fn test_caps_cycles_on_own_releases() {
    let mut kb = sample_keyboard();
    let mut input = StringSurface::new();

    tap_all(&mut kb, &mut input, &["caps"]);
    assert_eq!(kb.modifiers().state(CAPS), Some(ModifierState::Latched));
    tap_all(&mut kb, &mut input, &["caps"]);
    assert_eq!(kb.modifiers().state(CAPS), Some(ModifierState::Locked));
    tap_all(&mut kb, &mut input, &["caps", "a"]);
    assert_eq!(kb.modifiers().state(CAPS), Some(ModifierState::Idle));
    assert_eq!(input.value(), "a");
}

#[test]
fn test_shift_with_caps_combines_masks() {
    let mut kb = sample_keyboard();
    let mut input = StringSurface::new();

    tap_all(&mut kb, &mut input, &["caps", "shift"]);
    assert_eq!(kb.mask(), SHIFT | CAPS);

    tap_all(&mut kb, &mut input, &["a", "a"]);
    assert_eq!(input.value(), "aA");
    assert_eq!(kb.mask(), CAPS);
}

#[test]
fn test_caps_blanks_keys_without_variant() {
    let mut kb = sample_keyboard();
    let mut input = StringSurface::new();
    let one = key(&kb, "one");

    tap_all(&mut kb, &mut input, &["caps"]);
    let views = kb.key_views();
    assert!(views[one.0].symbol.is_none());
    let caps_view = &views[key(&kb, "caps").0];
    assert_eq!(caps_view.modifier_state, Some(ModifierState::Latched));

    assert_eq!(kb.tap(&mut input, one).outcome(), Some(ReleaseOutcome::Nothing));
    assert_eq!(kb.mask(), CAPS);
}

#[test]
fn test_mask_invariant_over_random_taps() {
    let mut kb = sample_keyboard();
    let mut input = StringSurface::new();
    let names = ["shift", "caps", "altgr", "a", "one", "bksp", "left"];

    let mut seed: u32 = 7;
    for _ in 0..300 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let name = names[(seed >> 16) as usize % names.len()];
        let id = key(&kb, name);
        kb.tap(&mut input, id);

        let expected = kb
            .modifiers()
            .modifiers()
            .iter()
            .filter(|m| m.state.is_active())
            .fold(ModifierMask::NONE, |acc, m| acc | m.mask);
        assert_eq!(kb.mask(), expected);
        for view in kb.key_views() {
            let shown = view.symbol.map(|s| s.mask);
            assert!(shown.is_none() || shown == Some(kb.mask()));
        }
    }
}

// ========================================================================
// Editing actions
// ========================================================================

#[test]
fn test_return_and_arrows() {
    let mut kb = sample_keyboard();
    let mut input = surface("ab", 2, 2);

    tap_all(&mut kb, &mut input, &["return", "a"]);
    assert_eq!(input.value(), "ab\na");

    tap_all(&mut kb, &mut input, &["up"]);
    assert_eq!(selection(&input), (1, 1));
    tap_all(&mut kb, &mut input, &["down"]);
    assert_eq!(selection(&input), (4, 4));
    tap_all(&mut kb, &mut input, &["left", "left"]);
    assert_eq!(selection(&input), (2, 2));
    tap_all(&mut kb, &mut input, &["right"]);
    assert_eq!(selection(&input), (3, 3));
}

#[test]
fn test_tab_and_shift_tab() {
    let mut kb = sample_keyboard();
    let mut input = surface("a\nb", 0, 3);

    tap_all(&mut kb, &mut input, &["tab"]);
    assert_eq!(input.value(), "\ta\n\tb");

    let tab = key(&kb, "tab");
    tap_all(&mut kb, &mut input, &["shift"]);
    assert_eq!(
        kb.tap(&mut input, tab).outcome(),
        Some(ReleaseOutcome::Action(ControlAction::IsoLeftTab))
    );
    assert_eq!(input.value(), "a\nb");
    assert_eq!(selection(&input), (0, 3));
}

#[test]
fn test_backspace_key() {
    let mut kb = sample_keyboard();
    let mut input = surface("abc", 3, 3);
    tap_all(&mut kb, &mut input, &["bksp", "bksp"]);
    assert_eq!(input.value(), "a");
}

// ========================================================================
// Pointer handling and hover
// ========================================================================

#[test]
fn test_release_outside_key_produces_nothing() {
    let mut kb = sample_keyboard();
    let mut input = StringSurface::new();
    let a = key(&kb, "a");

    kb.pointer_down(&mut input, a);
    assert_eq!(kb.pressed(), Some(a));
    kb.pointer_up_outside();

    assert_eq!(kb.pressed(), None);
    assert_eq!(input.value(), "");
}

#[test]
fn test_hover_enter_and_leave() {
    let mut kb = sample_keyboard();
    let mut input = StringSurface::new();
    let bksp = key(&kb, "bksp");
    let a = key(&kb, "a");

    assert_eq!(kb.pointer_enter(&mut input, bksp), EventResult::Hover(Some(bksp)));
    let overlay = kb.hover().copied().unwrap();
    // Top-right corner key is nudged back inside the keyboard
    assert_eq!(overlay.placement.bounds, Rect::new(210.0, 0.0, 90.0, 45.0));

    // A stale leave for another key does not hide the overlay
    assert_eq!(kb.pointer_leave(&mut input, a), EventResult::Ignored);
    assert!(kb.hover().is_some());

    assert_eq!(kb.pointer_leave(&mut input, bksp), EventResult::Hover(None));
    assert!(kb.hover().is_none());
}

#[test]
fn test_hover_shows_pressed_state() {
    let mut kb = sample_keyboard();
    let mut input = StringSurface::new();
    let e = key(&kb, "e");

    kb.pointer_enter(&mut input, e);
    kb.pointer_down(&mut input, e);
    assert!(kb.hover().unwrap().pressed);

    kb.pointer_up(&mut input, e);
    assert!(!kb.hover().unwrap().pressed);
    assert_eq!(input.value(), "e");
}

#[test]
fn test_pointer_moved_hit_tests_keys() {
    let mut kb = sample_keyboard();
    let mut input = StringSurface::new();

    let a = key(&kb, "a");
    assert_eq!(kb.pointer_moved(&mut input, Point::new(60.0, 45.0)), EventResult::Hover(Some(a)));

    let space = key(&kb, "space");
    assert_eq!(
        kb.pointer_moved(&mut input, Point::new(100.0, 100.0)),
        EventResult::Hover(Some(space))
    );

    // Gap between keys
    assert_eq!(kb.pointer_moved(&mut input, Point::new(200.0, 10.0)), EventResult::Hover(None));
    assert!(kb.hover().is_none());
}

#[test]
fn test_hover_of_every_key_stays_inside_keyboard() {
    let kb = sample_keyboard();
    let (width, height) = kb.layout().extent();
    for definition in kb.layout().keys() {
        let bounds = definition.hover.bounds;
        assert!(bounds.x >= 0.0 && bounds.y >= 0.0, "{}", definition.name);
        assert!(bounds.right() <= width && bounds.bottom() <= height, "{}", definition.name);
    }
}

#[test]
fn test_reset_clears_state() {
    let mut kb = sample_keyboard();
    let mut input = StringSurface::new();
    let e = key(&kb, "e");

    tap_all(&mut kb, &mut input, &["caps", "shift"]);
    kb.pointer_enter(&mut input, e);
    kb.reset();

    assert_eq!(kb.mask(), ModifierMask::NONE);
    assert!(kb.hover().is_none());
    assert_eq!(kb.active_symbol(e).and_then(|s| s.literal_char()), Some('e'));
}
