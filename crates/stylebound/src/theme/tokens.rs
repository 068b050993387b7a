//! Theme token records and the built-in light/dark palettes.
//!
//! A theme is a flat record of named color tokens. Style functions read
//! whichever tokens they need; nothing in the compiler knows about themes,
//! so a theme change simply resolves different maps, which hash to
//! different classes.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StyleError};
use super::scope::ThemeMode;

/// The named color tokens one theme supplies to style functions.
///
/// Tokens are CSS color strings, used verbatim in declaration values. The
/// background and midground families are graded: higher numbers sit
/// further from the page surface (raised cards, hover states, wells).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeTokens {
    /// Primary accent color.
    pub primary_color: String,
    /// Page background.
    pub background: String,
    /// Raised background, one step off the page.
    pub background1: String,
    /// Raised background, two steps.
    pub background2: String,
    /// Raised background, three steps.
    pub background3: String,
    /// Raised background, four steps.
    pub background4: String,
    /// Base midground, for controls and wells.
    pub midground: String,
    /// Midground grade one.
    pub midground1: String,
    /// Midground grade two.
    pub midground2: String,
    /// Midground grade three.
    pub midground3: String,
    /// Midground grade four.
    pub midground4: String,
    /// Surface color for overlays and popups.
    pub foreground_color: String,
    /// Main text color.
    pub text_color: String,
    /// Secondary text color, for subtitles and captions.
    pub text_alt_color: String,
    /// Color for borders and dividers.
    pub border_color: String,
}

impl ThemeTokens {
    /// The built-in light palette: warm creme surfaces with charcoal text.
    pub fn light() -> Self {
        Self {
            primary_color: "#818CF8".to_string(),
            background: "#F5EFE6".to_string(),
            background1: "#F2EAE2".to_string(),
            background2: "#EDE3DA".to_string(),
            background3: "#E5DBD0".to_string(),
            background4: "#DDD3C8".to_string(),
            midground: "#bfbfbf".to_string(),
            midground1: "#F4EEE8".to_string(),
            midground2: "#F0E9E4".to_string(),
            midground3: "#EBE4DE".to_string(),
            midground4: "#E6DFD9".to_string(),
            foreground_color: "#FCF8F3".to_string(),
            text_color: "#141414".to_string(),
            text_alt_color: "#212121".to_string(),
            border_color: "#D9CFC6".to_string(),
        }
    }

    /// The built-in dark palette: true black with graded grays.
    pub fn dark() -> Self {
        Self {
            primary_color: "#818CF8".to_string(),
            background: "#000000".to_string(),
            background1: "#0a0a0a".to_string(),
            background2: "#121212".to_string(),
            background3: "#171717".to_string(),
            background4: "#1f1f1f".to_string(),
            midground: "#262626".to_string(),
            midground1: "#2e2e2e".to_string(),
            midground2: "#363636".to_string(),
            midground3: "#404040".to_string(),
            midground4: "#525252".to_string(),
            foreground_color: "#0a0a0a".to_string(),
            text_color: "#fafafa".to_string(),
            text_alt_color: "#d4d4d4".to_string(),
            border_color: "#262626".to_string(),
        }
    }

    /// Checks that every token has a value.
    ///
    /// Tokens flow into CSS text unchecked, where an empty value would
    /// produce declarations like `color: ;` that fail silently at the
    /// consumer. Validation runs when themes load from files.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::EmptyToken`] naming the first blank token.
    pub fn validate(&self) -> Result<()> {
        for (token, value) in self.entries() {
            if value.trim().is_empty() {
                return Err(StyleError::EmptyToken {
                    token: token.to_string(),
                });
            }
        }
        Ok(())
    }

    fn entries(&self) -> [(&'static str, &str); 15] {
        [
            ("primary_color", &self.primary_color),
            ("background", &self.background),
            ("background1", &self.background1),
            ("background2", &self.background2),
            ("background3", &self.background3),
            ("background4", &self.background4),
            ("midground", &self.midground),
            ("midground1", &self.midground1),
            ("midground2", &self.midground2),
            ("midground3", &self.midground3),
            ("midground4", &self.midground4),
            ("foreground_color", &self.foreground_color),
            ("text_color", &self.text_color),
            ("text_alt_color", &self.text_alt_color),
            ("border_color", &self.border_color),
        ]
    }
}

/// A light/dark pairing of theme tokens.
///
/// This is what a theme scope holds: the scope's mode picks which side
/// style functions see. [`ThemeSet::default`] carries the built-in
/// palettes; file loading (see [`from_file`](ThemeSet::from_file))
/// customizes them token by token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSet {
    pub light: ThemeTokens,
    pub dark: ThemeTokens,
}

impl ThemeSet {
    /// Creates a set from explicit palettes.
    pub fn new(light: ThemeTokens, dark: ThemeTokens) -> Self {
        Self { light, dark }
    }

    /// Returns the tokens for `mode`.
    pub fn tokens_for(&self, mode: ThemeMode) -> &ThemeTokens {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    /// Validates both palettes.
    ///
    /// # Errors
    ///
    /// Returns the first [`StyleError::EmptyToken`] found, light side first.
    pub fn validate(&self) -> Result<()> {
        self.light.validate()?;
        self.dark.validate()
    }
}

impl Default for ThemeSet {
    fn default() -> Self {
        Self {
            light: ThemeTokens::light(),
            dark: ThemeTokens::dark(),
        }
    }
}
