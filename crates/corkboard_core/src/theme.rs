//! Day/night theme preference.

use crate::error::{CoreError, CoreResult};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Visual theme for the board shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Light theme.
    #[default]
    Day,
    /// Dark theme.
    Night,
}

impl Theme {
    /// Returns the stored literal for this theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
        }
    }

    /// Returns the other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Day => Theme::Night,
            Theme::Night => Theme::Day,
        }
    }
}

impl FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Theme::Day),
            "night" => Ok(Theme::Night),
            other => Err(CoreError::InvalidTheme {
                value: other.to_string(),
            }),
        }
    }
}

/// Storage for the theme preference.
///
/// A single literal string, read at startup and written on toggle. Nothing
/// beyond the round trip matters here.
pub trait PreferenceStore {
    /// Loads the stored theme, if one has been written.
    fn load_theme(&self) -> CoreResult<Option<Theme>>;

    /// Stores the theme literal.
    fn store_theme(&self, theme: Theme) -> CoreResult<()>;
}

/// File-backed preference store holding the literal theme string.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load_theme(&self) -> CoreResult<Option<Theme>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(Some(raw.trim().parse()?))
    }

    fn store_theme(&self, theme: Theme) -> CoreResult<()> {
        fs::write(&self.path, theme.as_str())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_literal_round_trip() {
        assert_eq!("day".parse::<Theme>().unwrap(), Theme::Day);
        assert_eq!("night".parse::<Theme>().unwrap(), Theme::Night);
        assert_eq!(Theme::Day.as_str(), "day");
        assert_eq!(Theme::Night.as_str(), "night");
    }

    #[test]
    fn unknown_literal_is_rejected() {
        let err = "dusk".parse::<Theme>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidTheme { .. }));
    }

    #[test]
    fn toggle_flips_theme() {
        assert_eq!(Theme::Day.toggled(), Theme::Night);
        assert_eq!(Theme::Night.toggled(), Theme::Day);
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("theme"));

        assert_eq!(store.load_theme().unwrap(), None);

        store.store_theme(Theme::Night).unwrap();
        assert_eq!(store.load_theme().unwrap(), Some(Theme::Night));

        store.store_theme(Theme::Day).unwrap();
        assert_eq!(store.load_theme().unwrap(), Some(Theme::Day));
    }

    #[test]
    fn file_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme");
        std::fs::write(&path, "lava-lamp").unwrap();

        let store = FilePreferenceStore::new(&path);
        assert!(store.load_theme().is_err());
    }
}
