//! softkeys - drive an on-screen keyboard layout from the command line
//!
//! Usage:
//!   softkeys --layout samples/keyboard.svg --list
//!   softkeys --layout samples/keyboard.svg --text "ab" shift a Return
//!   softkeys --layout samples/keyboard.svg --text "one\ntwo" --caret 0:7 tab

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use softkeys::cli::{CliArgs, Command, StartupConfig};
use softkeys::config::WidgetConfig;
use softkeys::editable::{StringSurface, TextSurface};
use softkeys::layout::{KeyKind, SymbolContent};
use softkeys::widget::{Keyboard, ReleaseOutcome};

/// Printed after tapping keys
#[derive(Debug, Serialize)]
struct Summary {
    text: String,
    selection: [usize; 2],
    mask: u8,
    outcomes: Vec<TapOutcome>,
}

#[derive(Debug, Serialize)]
struct TapOutcome {
    key: String,
    result: String,
}

/// One row of `--list`
#[derive(Debug, Serialize)]
struct KeyRow {
    id: String,
    kind: &'static str,
    modifier: Option<String>,
    symbols: Vec<String>,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    softkeys::tracing::init();

    let widget = match &args.config {
        Some(path) => WidgetConfig::load_from(path),
        None => WidgetConfig::load(),
    };
    let startup = args.into_config(widget).map_err(anyhow::Error::msg)?;

    let mut keyboard = Keyboard::open(&startup.layout, &startup.widget)
        .with_context(|| format!("loading layout {}", startup.layout.display()))?;

    let output = match &startup.command {
        Command::List => serde_json::to_string_pretty(&key_table(&keyboard))?,
        Command::Tap(keys) => {
            let summary = tap_keys(&mut keyboard, &startup, keys)?;
            serde_json::to_string_pretty(&summary)?
        }
    };
    println!("{}", output);
    Ok(())
}

fn tap_keys(keyboard: &mut Keyboard, startup: &StartupConfig, keys: &[String]) -> Result<Summary> {
    let mut input = StringSurface::from_text(&startup.text);
    if let Some((start, end)) = startup.selection {
        input.set_selection(start, end);
    }

    let mut outcomes = Vec::with_capacity(keys.len());
    for name in keys {
        let key = keyboard
            .layout()
            .find(name)
            .with_context(|| format!("no key with id '{}' in layout", name))?;
        let result = keyboard
            .tap(&mut input, key)
            .outcome()
            .map(describe)
            .unwrap_or_else(|| "ignored".to_string());
        outcomes.push(TapOutcome {
            key: name.clone(),
            result,
        });
    }

    let selection = input.selection();
    Ok(Summary {
        text: input.value(),
        selection: [selection.start, selection.end],
        mask: keyboard.mask().bits(),
        outcomes,
    })
}

fn describe(outcome: ReleaseOutcome) -> String {
    match outcome {
        ReleaseOutcome::Inserted(c) => format!("inserted {:?}", c),
        ReleaseOutcome::Action(action) => format!("action {}", action),
        ReleaseOutcome::Modifier(t) => format!("modifiers {} -> {}", t.before, t.after),
        ReleaseOutcome::Nothing => "nothing".to_string(),
    }
}

fn key_table(keyboard: &Keyboard) -> Vec<KeyRow> {
    keyboard
        .layout()
        .keys()
        .iter()
        .map(|key| KeyRow {
            id: key.name.clone(),
            kind: match key.kind() {
                KeyKind::Symbol => "symbol",
                KeyKind::Modifier => "modifier",
            },
            modifier: key
                .modifier
                .map(|b| format!("{} {:?}", b.mask, b.class).to_lowercase()),
            symbols: key
                .symbols
                .iter()
                .map(|s| match &s.content {
                    SymbolContent::Text(text) => format!("{}: {}", s.mask, text),
                    SymbolContent::Action(action) => format!("{}: <{}>", s.mask, action),
                    SymbolContent::Glyph => format!("{}: <glyph>", s.mask),
                })
                .collect(),
        })
        .collect()
}
