//! Theme files: user customization of the built-in palettes.
//!
//! A theme file carries partial overrides for the light and dark palettes.
//! Present tokens replace the built-in value, missing tokens keep it, so a
//! file that recolors one accent stays one line long:
//!
//! ```yaml
//! light:
//!   primary_color: "#D97706"
//! dark:
//!   primary_color: "#F59E0B"
//!   background: "#0c0a09"
//! ```
//!
//! Both sections are optional. Unknown token names are rejected rather than
//! ignored, so a typo fails the load instead of silently keeping the
//! default.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, StyleError};
use super::tokens::{ThemeSet, ThemeTokens};

/// File extensions recognized by [`ThemeSet::from_file`].
pub const THEME_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// Partial token overrides from one section of a theme file.
///
/// Every field is optional; [`apply`](TokenOverrides::apply) merges the
/// present ones over a base palette.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenOverrides {
    pub primary_color: Option<String>,
    pub background: Option<String>,
    pub background1: Option<String>,
    pub background2: Option<String>,
    pub background3: Option<String>,
    pub background4: Option<String>,
    pub midground: Option<String>,
    pub midground1: Option<String>,
    pub midground2: Option<String>,
    pub midground3: Option<String>,
    pub midground4: Option<String>,
    pub foreground_color: Option<String>,
    pub text_color: Option<String>,
    pub text_alt_color: Option<String>,
    pub border_color: Option<String>,
}

impl TokenOverrides {
    /// Merges these overrides over `base`: `Some` values replace, `None`
    /// values preserve the base token.
    pub fn apply(&self, base: &ThemeTokens) -> ThemeTokens {
        fn pick(over: &Option<String>, base: &str) -> String {
            over.clone().unwrap_or_else(|| base.to_string())
        }

        ThemeTokens {
            primary_color: pick(&self.primary_color, &base.primary_color),
            background: pick(&self.background, &base.background),
            background1: pick(&self.background1, &base.background1),
            background2: pick(&self.background2, &base.background2),
            background3: pick(&self.background3, &base.background3),
            background4: pick(&self.background4, &base.background4),
            midground: pick(&self.midground, &base.midground),
            midground1: pick(&self.midground1, &base.midground1),
            midground2: pick(&self.midground2, &base.midground2),
            midground3: pick(&self.midground3, &base.midground3),
            midground4: pick(&self.midground4, &base.midground4),
            foreground_color: pick(&self.foreground_color, &base.foreground_color),
            text_color: pick(&self.text_color, &base.text_color),
            text_alt_color: pick(&self.text_alt_color, &base.text_alt_color),
            border_color: pick(&self.border_color, &base.border_color),
        }
    }
}

/// Top-level shape of a theme file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFileSpec {
    light: Option<TokenOverrides>,
    dark: Option<TokenOverrides>,
}

impl ThemeSet {
    /// Creates a theme set from YAML content, merging any overrides over
    /// the built-in palettes.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::ThemeParse`] for malformed YAML or unknown
    /// token names, and [`StyleError::EmptyToken`] if an override is blank.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stylebound::ThemeSet;
    ///
    /// let themes = ThemeSet::from_yaml(r##"
    /// dark:
    ///   primary_color: "#F59E0B"
    /// "##).unwrap();
    ///
    /// assert_eq!(themes.dark.primary_color, "#F59E0B");
    /// assert_eq!(themes.dark.background, "#000000");
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let spec: ThemeFileSpec =
            serde_yaml::from_str(yaml).map_err(|e| StyleError::parse(e.to_string()))?;
        Self::from_spec(spec)
    }

    /// Creates a theme set from JSON content.
    ///
    /// Same semantics as [`from_yaml`](ThemeSet::from_yaml).
    pub fn from_json(json: &str) -> Result<Self> {
        let spec: ThemeFileSpec =
            serde_json::from_str(json).map_err(|e| StyleError::parse(e.to_string()))?;
        Self::from_spec(spec)
    }

    /// Loads a theme set from a file, dispatching on its extension.
    ///
    /// Recognized extensions are listed in [`THEME_EXTENSIONS`].
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::ThemeLoad`] if the file cannot be read or has
    /// an unrecognized extension, plus the parse errors of
    /// [`from_yaml`](ThemeSet::from_yaml).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            StyleError::load(format!("failed to read {}: {}", path.display(), e))
        })?;

        let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");
        match extension {
            "yaml" | "yml" => Self::from_yaml(&content),
            "json" => Self::from_json(&content),
            other => Err(StyleError::load(format!(
                "unrecognized theme extension '{}' for {} (expected one of: {})",
                other,
                path.display(),
                THEME_EXTENSIONS.join(", ")
            ))),
        }
    }

    fn from_spec(spec: ThemeFileSpec) -> Result<Self> {
        let set = Self {
            light: match spec.light {
                Some(overrides) => overrides.apply(&ThemeTokens::light()),
                None => ThemeTokens::light(),
            },
            dark: match spec.dark {
                Some(overrides) => overrides.apply(&ThemeTokens::dark()),
                None => ThemeTokens::dark(),
            },
        };
        set.validate()?;
        Ok(set)
    }
}
