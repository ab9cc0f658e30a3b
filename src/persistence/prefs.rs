use crate::domain::Theme;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// User preferences stored in prefs.json. Tasks themselves are never
/// persisted; the theme flag is the only state that survives a restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prefs {
    #[serde(default)]
    pub theme: Theme,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
        }
    }
}

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("could not read preferences: {0}")]
    Io(#[from] std::io::Error),
    #[error("preferences file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Load preferences from a prefs.json file. A missing file yields the
/// defaults (light theme).
pub fn load_prefs<P: AsRef<Path>>(path: P) -> Result<Prefs, PrefsError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Prefs::default());
    }

    let content = std::fs::read_to_string(path)?;
    let prefs: Prefs = serde_json::from_str(&content)?;
    Ok(prefs)
}

/// Save preferences to a prefs.json file
pub fn save_prefs<P: AsRef<Path>>(path: P, prefs: &Prefs) -> Result<()> {
    let json = serde_json::to_string_pretty(prefs)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}

/// Read the persisted theme, falling back to the default on any failure.
/// Called once at startup.
pub fn load_theme() -> Theme {
    crate::persistence::prefs_file()
        .ok()
        .and_then(|path| load_prefs(path).ok())
        .map(|prefs| prefs.theme)
        .unwrap_or_default()
}

/// Persist the theme. Callers treat this as fire-and-forget: a failed
/// write only means reverting to the default theme on next cold start.
pub fn save_theme(theme: Theme) -> Result<()> {
    let path = crate::persistence::prefs_file()?;
    save_prefs(path, &Prefs { theme })
}
