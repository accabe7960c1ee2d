use std::fmt;
use std::sync::Arc;

use super::store::{PreferenceError, PreferenceStore};

/// Preference key holding the theme.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Stored value. Once published, do not rename.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Unknown values return `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explicit handle to the theme preference.
///
/// Reads the store once on construction; every toggle writes straight back.
/// Owned by the side-effect coordinator and passed down, never global.
pub struct ThemeHandle {
    current: ThemePreference,
    store: Arc<dyn PreferenceStore>,
}

impl ThemeHandle {
    /// Initialise from the store. Absent, unrecognised or unreadable values
    /// fall back to light.
    pub fn load(store: Arc<dyn PreferenceStore>) -> Self {
        let current = match store.get(THEME_KEY) {
            Ok(Some(value)) => ThemePreference::parse(&value).unwrap_or_else(|| {
                tracing::warn!(value = %value, "Unrecognised theme preference, using light");
                ThemePreference::Light
            }),
            Ok(None) => ThemePreference::Light,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read theme preference, using light");
                ThemePreference::Light
            }
        };
        tracing::debug!(theme = %current, "Theme preference loaded");
        Self { current, store }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    /// Flip the theme and persist it.
    ///
    /// The in-memory value flips even if the write fails; the error is
    /// returned so the caller can tell the user.
    pub fn toggle(&mut self) -> Result<ThemePreference, PreferenceError> {
        self.current = self.current.toggled();
        self.store.set(THEME_KEY, self.current.as_str())?;
        tracing::info!(theme = %self.current, "Theme preference saved");
        Ok(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::MemoryPreferenceStore;

    #[test]
    fn parse_accepts_only_known_values() {
        assert_eq!(ThemePreference::parse("dark"), Some(ThemePreference::Dark));
        assert_eq!(ThemePreference::parse("light"), Some(ThemePreference::Light));
        assert_eq!(ThemePreference::parse("Dark"), None);
        assert_eq!(ThemePreference::parse(""), None);
    }

    #[test]
    fn absent_key_defaults_to_light() {
        let handle = ThemeHandle::load(Arc::new(MemoryPreferenceStore::new()));
        assert_eq!(handle.current(), ThemePreference::Light);
    }

    #[test]
    fn unrecognised_value_defaults_to_light() {
        let store = MemoryPreferenceStore::with_value(THEME_KEY, "solarized");
        let handle = ThemeHandle::load(Arc::new(store));
        assert_eq!(handle.current(), ThemePreference::Light);
    }

    #[test]
    fn toggle_persists_immediately() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut handle = ThemeHandle::load(store.clone());

        assert_eq!(handle.toggle().unwrap(), ThemePreference::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

        assert_eq!(handle.toggle().unwrap(), ThemePreference::Light);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }
}
