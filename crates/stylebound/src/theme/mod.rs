//! Adaptive light/dark themes for styled components.
//!
//! A theme is a flat record of color tokens ([`ThemeTokens`]); a
//! [`ThemeSet`] pairs a light and a dark palette. One scope per process
//! holds the active set and mode, and style functions read the resolved
//! tokens at render time.
//!
//! ## Mode Resolution
//!
//! When a scope is installed, its initial mode resolves in order:
//!
//! 1. A saved choice in the scope's [`ThemeStore`], when one is attached
//! 2. OS preference via [`detect_theme_mode`]
//! 3. Dark, when neither yields an answer
//!
//! [`toggle_theme`] and [`set_theme_mode`] change the mode afterward and
//! write it back to the store, so the choice survives restarts.
//!
//! ## Customization
//!
//! Palettes start from the built-ins and can be recolored token by token
//! from YAML or JSON files; see [`ThemeSet::from_file`]. Overrides are
//! additive: present tokens replace, missing tokens preserve.

mod file;
mod scope;
mod tokens;

pub use file::{TokenOverrides, THEME_EXTENSIONS};
pub use scope::{
    current_mode, current_theme, detect_theme_mode, provide_themes, provide_themes_with_store,
    reset_theme_scope, set_mode_detector, set_theme_mode, toggle_theme, FileThemeStore, ThemeMode,
    ThemeStore,
};
pub use tokens::{ThemeSet, ThemeTokens};
