//! The on-screen keyboard widget
//!
//! Ties together a [`Layout`], the modifier state machine, symbol visibility
//! and the caret controller. Pointer events come in through
//! [`Keyboard::handle`] and are routed through the [`dispatch`] table; the
//! text surface receiving the edits is passed to every call, so one keyboard
//! can serve whichever input currently has focus.
//!
//! ```
//! use softkeys::editable::{StringSurface, TextSurface};
//! use softkeys::layout::{Layout, DEFAULT_HOVER_SCALE};
//! use softkeys::widget::Keyboard;
//!
//! let svg = r#"<svg width="40" height="20"><g transform="translate(0,0)">
//!   <g id="a" class="key" x="0" y="0" width="20" height="20">
//!     <text class="symbol mod0">a</text>
//!   </g>
//! </g></svg>"#;
//! let layout = Layout::parse(svg, DEFAULT_HOVER_SCALE).unwrap();
//! let mut keyboard = Keyboard::with_layout(layout);
//! let mut input = StringSurface::new();
//!
//! let key = keyboard.layout().find("a").unwrap();
//! keyboard.tap(&mut input, key);
//! assert_eq!(input.value(), "a");
//! ```

pub mod dispatch;
mod messages;

use std::path::Path;

use crate::config::WidgetConfig;
use crate::editable::{CaretController, TextSurface};
use crate::keymap::{ModifierMask, ModifierState, ModifierStateMachine, SymbolVisibility, Transition};
use crate::layout::{HoverPlacement, KeyDefinition, KeyId, Layout, LayoutError, Point, SymbolVariant};

pub use messages::{EventResult, PointerEvent, PointerEventKind, ReleaseOutcome};

/// The enlarged copy of a key shown while the pointer is over it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverOverlay {
    pub key: KeyId,
    pub placement: HoverPlacement,
    /// Drawn in the pressed style
    pub pressed: bool,
}

/// Render-ready state of one key
#[derive(Debug, Clone, PartialEq)]
pub struct KeyView<'a> {
    pub id: KeyId,
    pub key: &'a KeyDefinition,
    /// Symbol currently shown, `None` when the key is blank
    pub symbol: Option<&'a SymbolVariant>,
    /// State of the modifier a modifier key carries
    pub modifier_state: Option<ModifierState>,
    pub pressed: bool,
    pub hovered: bool,
}

/// On-screen keyboard
#[derive(Debug, Clone)]
pub struct Keyboard {
    layout: Layout,
    modifiers: ModifierStateMachine,
    visibility: SymbolVisibility,
    caret: CaretController,
    hover: Option<HoverOverlay>,
    pressed: Option<KeyId>,
}

impl Keyboard {
    /// Build a keyboard over `layout`, registering every modifier key it holds
    pub fn new(layout: Layout, caret: CaretController) -> Self {
        let modifiers =
            ModifierStateMachine::with_modifiers(layout.modifiers().map(|b| (b.mask, b.class)));
        let visibility = SymbolVisibility::new(layout.keys(), modifiers.global());
        tracing::info!(
            keys = layout.keys().len(),
            modifiers = modifiers.modifiers().len(),
            "keyboard ready"
        );
        Self {
            layout,
            modifiers,
            visibility,
            caret,
            hover: None,
            pressed: None,
        }
    }

    /// Build a keyboard with the default caret controller
    pub fn with_layout(layout: Layout) -> Self {
        Self::new(layout, CaretController::new())
    }

    /// Load the layout document at `path` and apply `config`. A layout that
    /// cannot be read or parsed is fatal.
    pub fn open(path: &Path, config: &WidgetConfig) -> Result<Self, LayoutError> {
        let layout = Layout::load(path, config.hover_scale)?;
        let keyboard = Self::new(layout, CaretController::with_indent(config.indent));
        Ok(keyboard.with_locked(ModifierMask::new(config.locked_modifiers)))
    }

    /// Start with the modifiers in `mask` locked
    pub fn with_locked(mut self, mask: ModifierMask) -> Self {
        if !mask.is_empty() {
            let transition = self.modifiers.lock(mask);
            self.apply_transition(transition);
        }
        self
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn modifiers(&self) -> &ModifierStateMachine {
        &self.modifiers
    }

    /// Current global modifier mask
    pub fn mask(&self) -> ModifierMask {
        self.modifiers.global()
    }

    pub fn caret(&self) -> &CaretController {
        &self.caret
    }

    pub fn hover(&self) -> Option<&HoverOverlay> {
        self.hover.as_ref()
    }

    pub fn pressed(&self) -> Option<KeyId> {
        self.pressed
    }

    /// Symbol `key` currently shows
    pub fn active_symbol(&self, key: KeyId) -> Option<&SymbolVariant> {
        self.visibility.active_symbol(self.layout.keys(), key)
    }

    /// Route a pointer event to its handler
    pub fn handle(&mut self, surface: &mut dyn TextSurface, event: PointerEvent) -> EventResult {
        let key = event.key();
        let Some(definition) = self.layout.key(key) else {
            tracing::warn!(?key, ?event, "pointer event for unknown key");
            return EventResult::Ignored;
        };
        let kind = definition.kind();
        match dispatch::lookup(kind, event.kind()) {
            Some(handler) => handler(self, surface, key),
            None => EventResult::Ignored,
        }
    }

    pub fn pointer_down(&mut self, surface: &mut dyn TextSurface, key: KeyId) -> EventResult {
        self.handle(surface, PointerEvent::Down(key))
    }

    pub fn pointer_up(&mut self, surface: &mut dyn TextSurface, key: KeyId) -> EventResult {
        self.handle(surface, PointerEvent::Up(key))
    }

    pub fn pointer_enter(&mut self, surface: &mut dyn TextSurface, key: KeyId) -> EventResult {
        self.handle(surface, PointerEvent::Enter(key))
    }

    pub fn pointer_leave(&mut self, surface: &mut dyn TextSurface, key: KeyId) -> EventResult {
        self.handle(surface, PointerEvent::Leave(key))
    }

    /// Pointer released away from any key: the press is cancelled and
    /// nothing is produced
    pub fn pointer_up_outside(&mut self) -> EventResult {
        if self.pressed.is_none() {
            return EventResult::Ignored;
        }
        tracing::debug!(key = ?self.pressed, "press cancelled");
        self.clear_pressed();
        EventResult::Ignored
    }

    /// Pointer moved to `point` in keyboard coordinates. Synthesizes leave and
    /// enter events when the key under the pointer changes.
    pub fn pointer_moved(&mut self, surface: &mut dyn TextSurface, point: Point) -> EventResult {
        let target = self.layout.key_at(point);
        let current = self.hover.as_ref().map(|o| o.key);
        if target == current {
            return EventResult::Hover(current);
        }

        let mut result = EventResult::Hover(None);
        if let Some(previous) = current {
            result = self.pointer_leave(surface, previous);
        }
        if let Some(next) = target {
            result = self.pointer_enter(surface, next);
        }
        result
    }

    /// Press and release `key`
    pub fn tap(&mut self, surface: &mut dyn TextSurface, key: KeyId) -> EventResult {
        self.pointer_down(surface, key);
        self.pointer_up(surface, key)
    }

    /// Render-ready state of every key, in layout order
    pub fn key_views(&self) -> Vec<KeyView<'_>> {
        let hovered = self.hover.as_ref().map(|o| o.key);
        self.layout
            .keys()
            .iter()
            .enumerate()
            .map(|(i, key)| {
                let id = KeyId(i);
                KeyView {
                    id,
                    key,
                    symbol: self.visibility.active_symbol(self.layout.keys(), id),
                    modifier_state: key.modifier.and_then(|b| self.modifiers.state(b.mask)),
                    pressed: self.pressed == Some(id),
                    hovered: hovered == Some(id),
                }
            })
            .collect()
    }

    /// Return modifiers to idle and drop transient pointer state
    pub fn reset(&mut self) {
        let transition = self.modifiers.reset();
        self.apply_transition(transition);
        self.caret.reset();
        self.hover = None;
        self.pressed = None;
    }

    fn clear_pressed(&mut self) {
        self.pressed = None;
        if let Some(overlay) = self.hover.as_mut() {
            overlay.pressed = false;
        }
    }

    fn apply_transition(&mut self, transition: Transition) {
        if transition.changed() {
            self.visibility.refresh(self.layout.keys(), transition.after);
        }
    }
}
