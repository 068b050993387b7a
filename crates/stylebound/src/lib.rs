//! # Stylebound - Runtime Scoped CSS for Markup Components
//!
//! `stylebound` turns nested style maps into scoped CSS at render time:
//! deterministic class names from a structural hash, process-wide
//! idempotent injection, and a theme pipeline that resolves styles
//! against adaptive light/dark palettes.
//!
//! ## Core Concepts
//!
//! - [`StyleMap`]: Ordered, nested description of a component's styling
//! - [`class_for`]: Deterministic class identity; equal maps share a class
//! - [`compile`]: Pure compilation of a map into class-scoped CSS text
//! - [`styled`]: Wrap a render target with a static or theme-driven style
//! - [`ThemeSet`]: Light/dark palettes resolved through one ambient scope
//! - [`media`]: Breakpoint helpers that compose through [`StyleMap::merge`]
//!
//! ## Quick Start
//!
//! ```rust
//! use stylebound::prelude::*;
//!
//! // Install the built-in palettes for this process.
//! provide_themes(ThemeSet::default());
//!
//! let button = styled(
//!     "button",
//!     StyleMap::new()
//!         .set("padding", "8px 16px")
//!         .set("borderRadius", "6px")
//!         .set("&:hover", StyleMap::new().set("opacity", 0.9)),
//! );
//!
//! let element = button.render(Props::new().class_name("cta")).unwrap();
//! assert!(element.class_name().starts_with("sc-"));
//! assert!(element.class_name().ends_with(" cta"));
//! ```
//!
//! Rendering compiles and injects the CSS once per class; the element
//! carries the generated class merged with the incoming one.
//!
//! ## Theme-Driven Styles
//!
//! Dynamic styles receive the effective theme and the render props:
//!
//! ```rust
//! use stylebound::prelude::*;
//!
//! provide_themes(ThemeSet::default());
//!
//! let card = styled("div", StyleParam::dynamic(|theme, _props| {
//!     StyleMap::new()
//!         .set("background", theme.background1.as_str())
//!         .set("color", theme.text_color.as_str())
//!         .set("border", format!("1px solid {}", theme.border_color))
//! }));
//!
//! let element = card.render(Props::new()).unwrap();
//! assert!(element.class_name().starts_with("sc-"));
//! ```
//!
//! Toggling the mode (see [`toggle_theme`]) makes the next render resolve
//! different tokens, hash to a different class, and inject the other
//! palette's rules. Nothing is patched in place.
//!
//! ## Responsive Styles
//!
//! ```rust
//! use stylebound::{media, StyleMap};
//!
//! let style = StyleMap::new()
//!     .set("display", "flex")
//!     .merge(media::tablet(StyleMap::new().set("flexDirection", "column")))
//!     .merge(media::mobile(StyleMap::new().set("display", "none")));
//! # assert_eq!(style.len(), 3);
//! ```
//!
//! ## Custom Palettes
//!
//! Palettes load from YAML or JSON, overriding the built-ins token by
//! token:
//!
//! ```rust
//! use stylebound::ThemeSet;
//!
//! let themes = ThemeSet::from_yaml(r##"
//! dark:
//!   primary_color: "#F59E0B"
//! "##).unwrap();
//! assert_eq!(themes.dark.primary_color, "#F59E0B");
//! ```

// Internal modules
pub mod component;
pub mod document;
mod error;
pub mod prelude;
pub mod style;
pub mod theme;

// Error type
pub use error::{Result, StyleError};

// Style module exports
pub use style::{class_for, compile, media, ClassName, Literal, StyleMap, StyleValue};

// Component module exports
pub use component::{
    styled, styled_motion, Element, EventHandler, Node, PropValue, Props, RenderTarget,
    ResolvedProps, StyleFn, StyleParam, StyledComponent, INTERNAL_PROP_PREFIX, THEME_PROP,
};

// Theme module exports
pub use theme::{
    current_mode, current_theme, detect_theme_mode, provide_themes, provide_themes_with_store,
    reset_theme_scope, set_mode_detector, set_theme_mode, toggle_theme, FileThemeStore, ThemeMode,
    ThemeSet, ThemeStore, ThemeTokens, TokenOverrides, THEME_EXTENSIONS,
};

// Document injection exports
pub use document::{
    ensure_injected, injected_css, is_injected, reset_document, style_element_count,
    style_elements, StyleElement,
};
