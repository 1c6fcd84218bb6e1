//! Where the simulator looks for its panel config and writes its logs
//!
//! The default `panels.yaml` is only consulted when `--config` is not given.
//! Rolling log files from [`crate::tracing::init`] share the same root.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "panel-manager";

/// Root holding `panels.yaml` and `logs/`
///
/// `$XDG_CONFIG_HOME/panel-manager`, falling back to `~/.config`; on
/// Windows `%APPDATA%\panel-manager`.
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// Panel layout used by `ManagerConfig::load_or_default`
pub fn panels_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("panels.yaml"))
}

/// Daily `panel-manager.log` files land here
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory if needed
///
/// The error is a message for stderr; a headless run carries on with
/// console logging only.
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "no home or config directory to log into".to_string())?;
    create(&logs)?;
    Ok(logs)
}

fn create(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("cannot create log directory {}: {}", path.display(), e))
}
