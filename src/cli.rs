//! Command-line argument parsing for the keyboard driver
//!
//! Supports:
//! - Choosing the layout document and config file
//! - Seeding the input text and caret
//! - Tapping a sequence of keys by id
//! - Listing the key table

use clap::Parser;
use std::path::PathBuf;

use crate::config::WidgetConfig;

/// Drive an on-screen keyboard layout from the command line
#[derive(Parser, Debug)]
#[command(name = "softkeys", version, about = "Drive an on-screen keyboard layout")]
pub struct CliArgs {
    /// Key ids to tap, in order
    #[arg(value_name = "KEYS")]
    pub keys: Vec<String>,

    /// Layout document (SVG); defaults to `layout` from the config file
    #[arg(short, long, value_name = "FILE")]
    pub layout: Option<PathBuf>,

    /// Config file to use instead of ~/.config/softkeys/config.yaml
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Initial content of the input; `\n`, `\t` and `\\` are unescaped
    #[arg(short, long, default_value = "")]
    pub text: String,

    /// Initial selection as START or START:END in characters (default: end of text)
    #[arg(long, value_name = "START[:END]")]
    pub caret: Option<String>,

    /// Print the key table and exit
    #[arg(long)]
    pub list: bool,
}

/// What the binary does once the keyboard is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print every key with its symbols
    List,
    /// Tap the keys with these ids
    Tap(Vec<String>),
}

/// Configuration derived from CLI arguments and the config file
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub layout: PathBuf,
    pub widget: WidgetConfig,
    pub text: String,
    /// Initial selection, `None` for a caret at the end of the text
    pub selection: Option<(usize, usize)>,
    pub command: Command,
}

impl CliArgs {
    /// Combine parsed CLI args with the loaded widget config
    pub fn into_config(self, widget: WidgetConfig) -> Result<StartupConfig, String> {
        let layout = self
            .layout
            .or_else(|| widget.layout.clone())
            .ok_or_else(|| "No layout given: pass --layout or set `layout` in the config file".to_string())?;

        let selection = self.caret.as_deref().map(parse_caret).transpose()?;

        let command = if self.list {
            Command::List
        } else {
            Command::Tap(self.keys)
        };

        Ok(StartupConfig {
            layout,
            widget,
            text: unescape(&self.text),
            selection,
            command,
        })
    }
}

/// Expand `\n`, `\t` and `\\`; any other backslash is kept as written
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Parse `START` or `START:END`
fn parse_caret(value: &str) -> Result<(usize, usize), String> {
    let parse = |s: &str| {
        s.trim()
            .parse::<usize>()
            .map_err(|_| format!("Invalid caret position '{}'", value))
    };
    match value.split_once(':') {
        Some((start, end)) => Ok((parse(start)?, parse(end)?)),
        None => {
            let at = parse(value)?;
            Ok((at, at))
        }
    }
}
