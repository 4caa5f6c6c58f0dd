use crate::i18n::{Language, Theme};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Choices the user made in the window, restored on the next start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub theme: Theme,
}

/// JSON file holding [`Preferences`]
pub struct PreferencesStore {
    path: PathBuf,
}

impl PreferencesStore {
    /// Uses `path`, or `<config dir>/nexutha/preferences.json`
    pub fn new(path: Option<PathBuf>) -> Self {
        let path = path.unwrap_or_else(|| {
            let base = dirs::config_dir()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from("."));
            base.join("nexutha").join("preferences.json")
        });
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `None` when nothing has been saved yet
    pub fn load(&self) -> Result<Option<Preferences>> {
        if !self.path.exists() {
            log::info!("📄 No preferences at {}", self.path.display());
            return Ok(None);
        }

        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let prefs: Preferences = serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", self.path.display()))?;

        log::info!("📄 Preferences loaded: {} / {:?}", prefs.language, prefs.theme);
        Ok(Some(prefs))
    }

    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(prefs)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("writing {}", self.path.display()))?;

        log::debug!("💾 Preferences saved to {}", self.path.display());
        Ok(())
    }
}
