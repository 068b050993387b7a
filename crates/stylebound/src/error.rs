//! Error types for styling and theme operations.
//!
//! [`StyleError`] is the single error type of the crate. Style compilation,
//! identity hashing, and injection are total and never fail; errors come from
//! the theme layer, where a missing scope or a bad theme file must surface
//! instead of producing unthemed output.

use thiserror::Error;

/// Errors that can occur when resolving styles or loading themes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// A styled component rendered outside any theme scope.
    ///
    /// Style functions receive the current theme, so rendering without one
    /// has no meaningful fallback. Install a scope with
    /// [`provide_themes`](crate::theme::provide_themes) before rendering.
    #[error("no theme available: styled components must render inside a theme scope")]
    NoThemeScope,

    /// A theme file could not be read.
    #[error("failed to load theme: {message}")]
    ThemeLoad { message: String },

    /// Theme data was read but could not be parsed.
    #[error("failed to parse theme: {message}")]
    ThemeParse { message: String },

    /// A theme token was present but blank.
    #[error("theme token '{token}' is empty")]
    EmptyToken { token: String },
}

impl StyleError {
    /// Create a load error.
    pub fn load(message: impl Into<String>) -> Self {
        Self::ThemeLoad {
            message: message.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ThemeParse {
            message: message.into(),
        }
    }
}

/// Result type for styling operations.
pub type Result<T> = std::result::Result<T, StyleError>;
