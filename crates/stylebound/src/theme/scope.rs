//! The ambient theme scope: current theme resolution, mode switching, and
//! mode persistence.
//!
//! Styled components read the theme from process-wide state rather than
//! taking it as an argument. A host installs a scope once with
//! [`provide_themes`] (or [`provide_themes_with_store`] to persist the
//! user's choice), and every render after that resolves against the
//! scope's current mode. Rendering without a scope is an error, not a
//! fallback: see [`StyleError::NoThemeScope`].
//!
//! The initial mode comes from the store when one is present and has a
//! saved choice, otherwise from OS detection via the `dark-light` crate.
//! Detection can be overridden with [`set_mode_detector`] for testing.

use std::path::PathBuf;
use std::sync::Mutex;

use dark_light::{detect as detect_os_mode, Mode as OsMode};
use once_cell::sync::Lazy;

use crate::error::{Result, StyleError};
use super::tokens::{ThemeSet, ThemeTokens};

/// The active color mode of a theme scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light mode (light surfaces, dark text).
    Light,
    /// Dark mode (dark surfaces, light text).
    Dark,
}

impl ThemeMode {
    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// The mode's persisted name, `"light"` or `"dark"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parses a persisted name back into a mode.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

type ModeDetector = fn() -> ThemeMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used to pick the initial mode when no stored
/// choice exists.
///
/// This is useful for testing or for hosts that manage mode themselves.
///
/// # Example
///
/// ```rust
/// use stylebound::{set_mode_detector, ThemeMode};
///
/// // Force dark mode for testing
/// set_mode_detector(|| ThemeMode::Dark);
/// ```
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Detects the user's preferred mode.
///
/// Uses the configured detector (default: query the OS via `dark-light`).
/// Unknown or undetectable preferences resolve to [`ThemeMode::Dark`].
pub fn detect_theme_mode() -> ThemeMode {
    let detector = MODE_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_mode_detector() -> ThemeMode {
    match detect_os_mode() {
        Ok(OsMode::Light) => ThemeMode::Light,
        _ => ThemeMode::Dark,
    }
}

/// Persistence for the user's chosen mode.
///
/// A store remembers the last mode across runs so the user's toggle
/// outlives the process. Saving is best-effort: a store that cannot write
/// should swallow the failure rather than break rendering.
pub trait ThemeStore: Send {
    /// Returns the previously saved mode, if a valid one exists.
    fn load(&self) -> Option<ThemeMode>;

    /// Persists the chosen mode.
    fn save(&self, mode: ThemeMode);
}

/// A [`ThemeStore`] keeping the chosen mode in a plain text file.
///
/// The file holds the mode name (`light` or `dark`) and nothing else.
/// A missing or unreadable file means no saved choice.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    /// Creates a store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Option<ThemeMode> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        ThemeMode::from_name(content.trim())
    }

    fn save(&self, mode: ThemeMode) {
        // Best-effort per the trait contract.
        let _ = std::fs::write(&self.path, mode.as_str());
    }
}

struct ScopeState {
    themes: ThemeSet,
    mode: ThemeMode,
    store: Option<Box<dyn ThemeStore>>,
}

static THEME_SCOPE: Lazy<Mutex<Option<ScopeState>>> = Lazy::new(|| Mutex::new(None));

/// Installs a theme scope for the process.
///
/// The initial mode comes from [`detect_theme_mode`]. Replaces any
/// previously installed scope.
///
/// # Example
///
/// ```rust
/// use stylebound::{provide_themes, current_theme, ThemeSet};
///
/// provide_themes(ThemeSet::default());
/// let theme = current_theme().unwrap();
/// assert!(theme.background.starts_with('#'));
/// ```
pub fn provide_themes(themes: ThemeSet) {
    install(themes, None);
}

/// Installs a theme scope whose mode persists through `store`.
///
/// A saved mode in the store wins over OS detection; either way the
/// resolved initial mode is written back, so the store is populated from
/// the first run on.
pub fn provide_themes_with_store(themes: ThemeSet, store: impl ThemeStore + 'static) {
    install(themes, Some(Box::new(store)));
}

fn install(themes: ThemeSet, store: Option<Box<dyn ThemeStore>>) {
    let saved = store.as_ref().and_then(|s| s.load());
    let mode = saved.unwrap_or_else(detect_theme_mode);
    if let Some(store) = &store {
        store.save(mode);
    }
    *THEME_SCOPE.lock().unwrap() = Some(ScopeState {
        themes,
        mode,
        store,
    });
}

/// Removes the installed scope, if any.
///
/// Intended for tests; after this, rendering fails with
/// [`StyleError::NoThemeScope`] until a scope is installed again.
pub fn reset_theme_scope() {
    *THEME_SCOPE.lock().unwrap() = None;
}

/// Returns the tokens for the scope's current mode.
///
/// # Errors
///
/// Returns [`StyleError::NoThemeScope`] when no scope is installed.
pub fn current_theme() -> Result<ThemeTokens> {
    let scope = THEME_SCOPE.lock().unwrap();
    match scope.as_ref() {
        Some(state) => Ok(state.themes.tokens_for(state.mode).clone()),
        None => Err(StyleError::NoThemeScope),
    }
}

/// Returns the scope's current mode.
///
/// # Errors
///
/// Returns [`StyleError::NoThemeScope`] when no scope is installed.
pub fn current_mode() -> Result<ThemeMode> {
    let scope = THEME_SCOPE.lock().unwrap();
    match scope.as_ref() {
        Some(state) => Ok(state.mode),
        None => Err(StyleError::NoThemeScope),
    }
}

/// Sets the scope's mode and persists it through the scope's store.
///
/// # Errors
///
/// Returns [`StyleError::NoThemeScope`] when no scope is installed.
pub fn set_theme_mode(mode: ThemeMode) -> Result<()> {
    let mut scope = THEME_SCOPE.lock().unwrap();
    match scope.as_mut() {
        Some(state) => {
            state.mode = mode;
            if let Some(store) = &state.store {
                store.save(mode);
            }
            Ok(())
        }
        None => Err(StyleError::NoThemeScope),
    }
}

/// Flips the scope's mode, persists it, and returns the new mode.
///
/// # Errors
///
/// Returns [`StyleError::NoThemeScope`] when no scope is installed.
pub fn toggle_theme() -> Result<ThemeMode> {
    let mut scope = THEME_SCOPE.lock().unwrap();
    match scope.as_mut() {
        Some(state) => {
            state.mode = state.mode.toggled();
            if let Some(store) = &state.store {
                store.save(state.mode);
            }
            Ok(state.mode)
        }
        None => Err(StyleError::NoThemeScope),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_mode_names_and_toggle() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);

        assert_eq!(ThemeMode::from_name("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_name("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_name("solarized"), None);
    }

    #[test]
    #[serial]
    fn test_detector_override() {
        set_mode_detector(|| ThemeMode::Light);
        assert_eq!(detect_theme_mode(), ThemeMode::Light);

        set_mode_detector(|| ThemeMode::Dark);
        assert_eq!(detect_theme_mode(), ThemeMode::Dark);
    }

    #[test]
    #[serial]
    fn test_scope_resolves_by_detected_mode() {
        set_mode_detector(|| ThemeMode::Light);
        provide_themes(ThemeSet::default());

        assert_eq!(current_mode().unwrap(), ThemeMode::Light);
        assert_eq!(current_theme().unwrap(), ThemeTokens::light());

        set_mode_detector(|| ThemeMode::Dark);
        provide_themes(ThemeSet::default());
        assert_eq!(current_theme().unwrap(), ThemeTokens::dark());

        reset_theme_scope();
    }

    #[test]
    #[serial]
    fn test_missing_scope_errors() {
        reset_theme_scope();

        assert_eq!(current_theme().unwrap_err(), StyleError::NoThemeScope);
        assert_eq!(current_mode().unwrap_err(), StyleError::NoThemeScope);
        assert_eq!(
            set_theme_mode(ThemeMode::Light).unwrap_err(),
            StyleError::NoThemeScope
        );
        assert_eq!(toggle_theme().unwrap_err(), StyleError::NoThemeScope);
    }

    #[test]
    #[serial]
    fn test_toggle_and_set_mode() {
        set_mode_detector(|| ThemeMode::Dark);
        provide_themes(ThemeSet::default());

        assert_eq!(toggle_theme().unwrap(), ThemeMode::Light);
        assert_eq!(current_mode().unwrap(), ThemeMode::Light);

        set_theme_mode(ThemeMode::Dark).unwrap();
        assert_eq!(current_mode().unwrap(), ThemeMode::Dark);

        reset_theme_scope();
    }

    #[test]
    #[serial]
    fn test_stored_mode_wins_over_detection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme");
        std::fs::write(&path, "light").unwrap();

        set_mode_detector(|| ThemeMode::Dark);
        provide_themes_with_store(ThemeSet::default(), FileThemeStore::new(&path));

        assert_eq!(current_mode().unwrap(), ThemeMode::Light);

        reset_theme_scope();
    }

    #[test]
    #[serial]
    fn test_store_persists_initial_and_toggled_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme");

        set_mode_detector(|| ThemeMode::Dark);
        provide_themes_with_store(ThemeSet::default(), FileThemeStore::new(&path));

        // No saved choice: detection decided, and the result was written.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "dark");

        toggle_theme().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "light");

        reset_theme_scope();
    }

    #[test]
    #[serial]
    fn test_corrupt_store_falls_back_to_detection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme");
        std::fs::write(&path, "mauve").unwrap();

        set_mode_detector(|| ThemeMode::Light);
        provide_themes_with_store(ThemeSet::default(), FileThemeStore::new(&path));

        assert_eq!(current_mode().unwrap(), ThemeMode::Light);
        // The store was repaired with the resolved mode.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "light");

        reset_theme_scope();
    }
}
