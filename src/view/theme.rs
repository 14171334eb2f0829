//! Light/dark theme and its persistence.
//!
//! [`Theme::toggled`] is the pure transition. [`ThemeController`] layers the
//! two side effects on top of it: applying the theme to the document and
//! writing it to the [`PreferenceStore`].

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::storage::PreferenceStore;

/// Storage key holding the persisted theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Binary visual mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark palette, the default.
    #[default]
    Dark,
    /// Light palette.
    Light,
}

impl Theme {
    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Persisted/attribute form: `"dark"` or `"light"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse the exact persisted form. Anything else is `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Whether this is the dark theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something the theme can be applied to, normally the document root.
pub trait ThemeTarget {
    /// Apply `theme` for styling purposes.
    fn apply_theme(&mut self, theme: Theme);
}

/// Headless document: remembers the last applied `data-theme` value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentTheme {
    attribute: Option<Theme>,
}

impl DocumentTheme {
    /// Create a document with no theme applied yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current `data-theme` attribute, if one has been applied.
    #[must_use]
    pub fn attribute(&self) -> Option<Theme> {
        self.attribute
    }
}

impl ThemeTarget for DocumentTheme {
    fn apply_theme(&mut self, theme: Theme) {
        self.attribute = Some(theme);
    }
}

/// Owns the current theme and the store it is persisted to.
#[derive(Debug)]
pub struct ThemeController<S> {
    theme: Theme,
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Read the persisted theme from `store`.
    ///
    /// A missing, empty or unreadable value yields [`Theme::Dark`]. Any other
    /// value is dark only when it is exactly `"dark"`, light otherwise.
    pub fn load(store: S) -> Self {
        let theme = match store.get(THEME_STORAGE_KEY) {
            Ok(Some(value)) if value.is_empty() => Theme::default(),
            Ok(Some(value)) => Theme::parse(&value).unwrap_or_else(|| {
                debug!(value = %value, "Unrecognised persisted theme, using light");
                Theme::Light
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!(
                    name: "theme.storage.read_failed",
                    error = %e,
                    "Theme storage unreadable, using default"
                );
                Theme::default()
            }
        };

        Self { theme, store }
    }

    /// Current theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Whether the current theme is dark.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Apply the current theme to `target` without changing it.
    pub fn apply(&self, target: &mut impl ThemeTarget) {
        target.apply_theme(self.theme);
    }

    /// Start from an already known theme, e.g. the one held by a session.
    ///
    /// Nothing is read from `store`; it only receives writes.
    pub fn with_theme(theme: Theme, store: S) -> Self {
        Self { theme, store }
    }

    /// Flip the theme, apply it to `target` and persist it.
    ///
    /// A failed write is logged and otherwise ignored: the in-memory theme
    /// stays authoritative for the rest of the session.
    pub fn toggle(&mut self, target: &mut impl ThemeTarget) -> Theme {
        self.theme = self.theme.toggled();
        target.apply_theme(self.theme);

        if let Err(e) = self.store.set(THEME_STORAGE_KEY, self.theme.as_str()) {
            warn!(
                name: "theme.storage.write_failed",
                theme = %self.theme,
                error = %e,
                "Theme not persisted, keeping in-memory value"
            );
        }

        self.theme
    }

    /// Give back the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }
}
