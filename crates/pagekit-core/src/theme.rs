//! Light/dark theme preference.
//!
//! The applied theme is the explicit choice stored under the configured key
//! when there is one, and the system color scheme otherwise. Only explicit
//! choices are ever written to storage.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    config::ThemeConfig,
    error::{Result, UiError},
    storage::PreferenceStorage,
    surface::Surface,
};

/// The two-valued theme domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Theme matching a `prefers-color-scheme: dark` signal.
    pub fn from_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UiError::InvalidPreference(other.to_string())),
        }
    }
}

/// Applies and persists the theme preference.
pub struct ThemeManager<S, E> {
    storage: S,
    root: E,
    storage_key: String,
    attribute: String,
    system: Theme,
    current: Theme,
}

impl<S: PreferenceStorage, E: Surface> ThemeManager<S, E> {
    /// Create the manager and apply the initial theme to `root`.
    ///
    /// The initial theme is applied without being persisted.
    pub fn new(storage: S, root: E, system_prefers_dark: bool, config: &ThemeConfig) -> Self {
        let system = Theme::from_dark(system_prefers_dark);
        let mut manager = Self {
            storage,
            root,
            storage_key: config.storage_key.clone(),
            attribute: config.attribute.clone(),
            system,
            current: system,
        };
        manager.apply(manager.get());
        manager
    }

    /// The explicit preference, if one is stored and valid.
    pub fn explicit(&self) -> Option<Theme> {
        let stored = self.storage.get(&self.storage_key)?;
        match stored.parse() {
            Ok(theme) => Some(theme),
            Err(err) => {
                tracing::debug!(%err, "ignoring stored theme");
                None
            }
        }
    }

    /// Explicit preference, falling back to the system default.
    pub fn get(&self) -> Theme {
        self.explicit().unwrap_or(self.system)
    }

    /// Theme currently applied to the document.
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Persist `theme` as the explicit preference and apply it.
    pub fn set(&mut self, theme: Theme) {
        if let Err(err) = self.storage.set(&self.storage_key, theme.as_str()) {
            tracing::warn!(%err, "theme preference not persisted");
        }
        self.apply(theme);
    }

    /// Switch to the complementary theme and return it.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set(next);
        next
    }

    /// Forget the explicit preference and follow the system again.
    pub fn clear(&mut self) {
        self.storage.remove(&self.storage_key);
        self.apply(self.system);
    }

    /// React to a system color-scheme change.
    ///
    /// Returns whether the applied theme followed the change; an explicit
    /// preference always wins.
    pub fn on_system_change(&mut self, prefers_dark: bool) -> bool {
        self.system = Theme::from_dark(prefers_dark);
        if self.explicit().is_some() {
            return false;
        }
        self.apply(self.system);
        true
    }

    fn apply(&mut self, theme: Theme) {
        self.current = theme;
        self.root.set_attribute(&self.attribute, theme.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{storage::MemoryStorage, surface::MemorySurface};

    fn manager(
        storage: &MemoryStorage,
        root: &MemorySurface,
        prefers_dark: bool,
    ) -> ThemeManager<MemoryStorage, MemorySurface> {
        ThemeManager::new(
            storage.clone(),
            root.clone(),
            prefers_dark,
            &ThemeConfig::default(),
        )
    }

    #[test]
    fn test_initial_theme_follows_system_without_persisting() {
        let storage = MemoryStorage::new();
        let root = MemorySurface::new();
        let themes = manager(&storage, &root, true);

        assert_eq!(themes.current(), Theme::Dark);
        assert_eq!(root.attribute("data-theme").as_deref(), Some("dark"));
        assert_eq!(storage.get("theme"), None);
    }

    #[test]
    fn test_stored_preference_wins_over_system() {
        let storage = MemoryStorage::new();
        storage.set("theme", "light").unwrap();
        let root = MemorySurface::new();
        let themes = manager(&storage, &root, true);

        assert_eq!(themes.get(), Theme::Light);
        assert_eq!(root.attribute("data-theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_invalid_stored_value_is_ignored() {
        let storage = MemoryStorage::new();
        storage.set("theme", "sepia").unwrap();
        let root = MemorySurface::new();
        let themes = manager(&storage, &root, false);

        assert_eq!(themes.explicit(), None);
        assert_eq!(themes.current(), Theme::Light);
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let storage = MemoryStorage::new();
        let root = MemorySurface::new();
        let mut themes = manager(&storage, &root, false);

        assert_eq!(themes.toggle(), Theme::Dark);
        assert_eq!(storage.get("theme").as_deref(), Some("dark"));
        assert_eq!(themes.toggle(), Theme::Light);
        assert_eq!(root.attribute("data-theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_system_change_applies_without_explicit_preference() {
        let storage = MemoryStorage::new();
        let root = MemorySurface::new();
        let mut themes = manager(&storage, &root, false);

        assert!(themes.on_system_change(true));
        assert_eq!(themes.current(), Theme::Dark);
        assert_eq!(storage.get("theme"), None);
    }

    #[test]
    fn test_system_change_ignored_after_explicit_set() {
        let storage = MemoryStorage::new();
        let root = MemorySurface::new();
        let mut themes = manager(&storage, &root, false);

        themes.set(Theme::Light);
        assert!(!themes.on_system_change(true));
        assert_eq!(themes.current(), Theme::Light);
        assert_eq!(root.attribute("data-theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_clear_resumes_following_system() {
        let storage = MemoryStorage::new();
        let root = MemorySurface::new();
        let mut themes = manager(&storage, &root, true);

        themes.set(Theme::Light);
        themes.clear();
        assert_eq!(themes.current(), Theme::Dark);

        assert!(themes.on_system_change(false));
        assert_eq!(themes.current(), Theme::Light);
    }

    #[test]
    fn test_theme_parsing() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("Dark".parse::<Theme>().is_err());
        assert_eq!(Theme::Light.to_string(), "light");
    }
}
