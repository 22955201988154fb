//! Where the keyboard keeps its per-user files
//!
//! The widget config (`config.yaml`) and the rotating log files share one
//! directory: `$XDG_CONFIG_HOME/softkeys` or `~/.config/softkeys` on Unix,
//! `%APPDATA%\softkeys` on Windows. Layout documents live wherever the config
//! points; nothing here looks for them.

use std::{env, fs, io, path::PathBuf};

const APP_DIR: &str = "softkeys";

/// Per-user directory holding `config.yaml` and `logs/`, `None` when neither
/// the platform variable nor a home directory is available
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var_os("APPDATA").map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .map(|base| base.join(APP_DIR))
    }
}

/// Widget config read by [`crate::config::WidgetConfig::load`]
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// Directory the daily `softkeys.log.*` files rotate in
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> io::Result<PathBuf> {
    let logs = logs_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no per-user config directory"))?;
    fs::create_dir_all(&logs)?;
    Ok(logs)
}
