//! Path utilities.

use std::path::PathBuf;

use anyhow::Result;

/// Name of the application data directory.
const APP_DIR: &str = "EventPulse";

/// Environment variable that points the app at another data directory.
pub const HOME_OVERRIDE_VAR: &str = "EVENT_PULSE_HOME";

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE: &str = "config.json";

/// Get the application data directory (`EventPulse`).
#[inline]
pub fn get_data_dir() -> Result<PathBuf> {
    resolve_data_dir(std::env::var_os(HOME_OVERRIDE_VAR).map(PathBuf::from))
}

/// Resolve the data directory, preferring an explicit override.
pub fn resolve_data_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir.filter(|dir| !dir.as_os_str().is_empty()) {
        return Ok(dir);
    }

    let base_dir = match std::env::consts::OS {
        "windows" => std::env::var("APPDATA")
            .ok()
            .map(PathBuf::from)
            .ok_or_else(|| anyhow::anyhow!("Could not determine AppData directory"))?,
        "macos" => std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Application Support"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
        _ => std::env::var("HOME")
            .ok()
            .map(PathBuf::from)
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
    };
    Ok(base_dir.join(APP_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins() {
        let dir = resolve_data_dir(Some(PathBuf::from("/tmp/pulse"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/pulse"));
    }

    #[test]
    fn empty_override_is_ignored() {
        if let Ok(dir) = resolve_data_dir(Some(PathBuf::new())) {
            assert!(dir.ends_with(APP_DIR));
        }
    }
}
