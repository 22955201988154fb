//! Benchmarks for caret operations and key dispatch
//!
//! Run with: cargo bench caret_operations

use softkeys::editable::{CaretController, RopeSurface, StringSurface};
use softkeys::layout::{Layout, DEFAULT_HOVER_SCALE};
use softkeys::widget::Keyboard;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

const SAMPLE_SVG: &str = include_str!("../samples/keyboard.svg");

fn main() {
    divan::main();
}

fn text(lines: usize) -> String {
    "foo bar baz\n".repeat(lines)
}

// ============================================================================
// Insertion
// ============================================================================

#[divan::bench(args = [100, 1_000, 10_000])]
fn insert_middle_string(bencher: divan::Bencher, lines: usize) {
    let content = text(lines);
    let middle = content.len() / 2;
    bencher
        .with_inputs(|| StringSurface::from_text(&content).with_selection(middle, middle))
        .bench_local_values(|mut surface| {
            CaretController::new().insert_at_caret(&mut surface, divan::black_box("x"));
            surface
        });
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn insert_middle_rope(bencher: divan::Bencher, lines: usize) {
    let content = text(lines);
    let middle = content.len() / 2;
    bencher
        .with_inputs(|| RopeSurface::from_text(&content).with_selection(middle, middle))
        .bench_local_values(|mut surface| {
            CaretController::new().insert_at_caret(&mut surface, divan::black_box("x"));
            surface
        });
}

// ============================================================================
// Movement
// ============================================================================

#[divan::bench(args = [100, 1_000])]
fn move_down_whole_text(bencher: divan::Bencher, lines: usize) {
    let content = text(lines);
    bencher
        .with_inputs(|| StringSurface::from_text(&content).with_selection(4, 4))
        .bench_local_values(|mut surface| {
            let mut caret = CaretController::new();
            for _ in 0..lines {
                caret.move_down(&mut surface);
            }
            surface
        });
}

// ============================================================================
// Indentation
// ============================================================================

#[divan::bench(args = [100, 1_000])]
fn tab_then_left_tab_selection(bencher: divan::Bencher, lines: usize) {
    let content = text(lines);
    let len = content.chars().count();
    bencher
        .with_inputs(|| StringSurface::from_text(&content).with_selection(0, len))
        .bench_local_values(|mut surface| {
            let mut caret = CaretController::new();
            caret.tab(&mut surface);
            caret.left_tab(&mut surface);
            surface
        });
}

// ============================================================================
// Key dispatch
// ============================================================================

#[divan::bench]
fn parse_sample_layout() -> Layout {
    Layout::parse(divan::black_box(SAMPLE_SVG), DEFAULT_HOVER_SCALE).unwrap()
}

#[divan::bench]
fn tap_shifted_letter(bencher: divan::Bencher) {
    let layout = Layout::parse(SAMPLE_SVG, DEFAULT_HOVER_SCALE).unwrap();
    let shift = layout.find("shift").unwrap();
    let a = layout.find("a").unwrap();
    bencher
        .with_inputs(|| (Keyboard::with_layout(layout.clone()), StringSurface::new()))
        .bench_local_values(|(mut keyboard, mut input)| {
            keyboard.tap(&mut input, shift);
            keyboard.tap(&mut input, a);
            (keyboard, input)
        });
}
