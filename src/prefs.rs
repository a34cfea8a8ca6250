use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::PrefsError;
use crate::i18n::Locale;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Values persisted under the fixed keys `locale`, `theme` and `notifications`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub theme: Theme,
    /// `"on"` once notification permission was granted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<String>,
}

impl Preferences {
    pub fn notifications_on(&self) -> bool {
        self.notifications.as_deref() == Some("on")
    }
}

/// Key-value preference file. Without a path the store is memory-only.
#[derive(Debug)]
pub struct PreferenceStore {
    path: Option<PathBuf>,
    values: Preferences,
}

impl PreferenceStore {
    /// Read preferences at startup. A missing or malformed file yields defaults.
    pub fn load(path: Option<PathBuf>) -> Self {
        let values = path.as_deref().map(read_preferences).unwrap_or_default();
        Self { path, values }
    }

    pub fn in_memory(values: Preferences) -> Self {
        Self { path: None, values }
    }

    pub fn get(&self) -> &Preferences {
        &self.values
    }

    /// Flip the locale. The new value is kept in memory even when saving fails.
    pub fn toggle_locale(&mut self) -> Result<Locale, PrefsError> {
        self.values.locale = self.values.locale.toggled();
        self.save()?;
        Ok(self.values.locale)
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, PrefsError> {
        self.values.theme = self.values.theme.toggled();
        self.save()?;
        Ok(self.values.theme)
    }

    pub fn set_notifications_on(&mut self) -> Result<(), PrefsError> {
        self.values.notifications = Some("on".to_string());
        self.save()
    }

    fn save(&self) -> Result<(), PrefsError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_vec_pretty(&self.values)?)?;
        info!(path = %path.display(), "Saved preferences");
        Ok(())
    }
}

fn read_preferences(path: &Path) -> Preferences {
    match fs::read_to_string(path) {
        Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Malformed preference file; using defaults");
            Preferences::default()
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Preferences::default(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read preference file; using defaults");
            Preferences::default()
        }
    }
}
