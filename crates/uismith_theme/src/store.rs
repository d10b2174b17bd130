//! Theme persistence
//!
//! The contrast tooling never touches storage; callers load a [`Theme`],
//! work on it, and hand it back to a [`ThemeStore`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Deserialize;
use uismith_color::Color;

use crate::error::ThemeError;
use crate::palette::{FooterBackground, Theme};

/// Somewhere a theme can be loaded from and saved to.
pub trait ThemeStore {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Theme>, ThemeError>;

    fn save(&self, theme: &Theme) -> Result<(), ThemeError>;
}

/// Load the saved theme, falling back to [`Theme::default`] on absence or error.
///
/// Errors are logged rather than returned; a broken save file should not
/// prevent the editor from starting.
pub fn load_or_default(store: &dyn ThemeStore) -> Theme {
    match store.load() {
        Ok(Some(theme)) => theme,
        Ok(None) => Theme::default(),
        Err(err) => {
            tracing::warn!(%err, "failed to load saved theme, using default");
            Theme::default()
        }
    }
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<Theme>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            slot: Mutex::new(Some(theme)),
        }
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self) -> Result<Option<Theme>, ThemeError> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| ThemeError::Store("memory store lock poisoned".into()))?;
        Ok(*slot)
    }

    fn save(&self, theme: &Theme) -> Result<(), ThemeError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| ThemeError::Store("memory store lock poisoned".into()))?;
        *slot = Some(*theme);
        Ok(())
    }
}

/// JSON file store.
///
/// A file may hold only some of the theme fields; missing ones are filled
/// from [`Theme::default`]. Unknown keys and malformed colors are errors.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> ThemeError {
        ThemeError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ThemeStore for FileStore {
    fn load(&self) -> Result<Option<Theme>, ThemeError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.io_error(err)),
        };

        let saved: PartialTheme = serde_json::from_str(&raw)?;
        tracing::debug!(path = %self.path.display(), "loaded saved theme");
        Ok(Some(saved.merge_over(Theme::default())))
    }

    fn save(&self, theme: &Theme) -> Result<(), ThemeError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }

        let mut json = serde_json::to_string_pretty(theme)?;
        json.push('\n');
        fs::write(&self.path, json).map_err(|err| self.io_error(err))?;
        tracing::debug!(path = %self.path.display(), "saved theme");
        Ok(())
    }
}

/// A theme as found on disk, where any field may be absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct PartialTheme {
    #[serde(alias = "bg")]
    background: Option<Color>,
    #[serde(alias = "fg")]
    foreground: Option<Color>,
    #[serde(alias = "titleFg")]
    title_foreground: Option<Color>,
    #[serde(alias = "bodyFg")]
    body_foreground: Option<Color>,
    accent: Option<Color>,
    border: Option<Color>,
    #[serde(alias = "footerBg")]
    footer_background: Option<FooterBackground>,
}

impl PartialTheme {
    fn merge_over(self, base: Theme) -> Theme {
        Theme {
            background: self.background.unwrap_or(base.background),
            foreground: self.foreground.unwrap_or(base.foreground),
            title_foreground: self.title_foreground.unwrap_or(base.title_foreground),
            body_foreground: self.body_foreground.unwrap_or(base.body_foreground),
            accent: self.accent.unwrap_or(base.accent),
            border: self.border.unwrap_or(base.border),
            footer_background: self.footer_background.unwrap_or(base.footer_background),
        }
    }
}
