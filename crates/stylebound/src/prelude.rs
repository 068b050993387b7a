//! Styling prelude for convenient imports.
//!
//! Re-exports the types and functions most renders touch, so one line
//! covers the common path:
//!
//! ```rust
//! use stylebound::prelude::*;
//!
//! provide_themes(ThemeSet::default());
//!
//! let label = styled("span", StyleMap::new().set("fontSize", "12px"));
//! let element = label.render(Props::new()).unwrap();
//! assert!(element.class_name().starts_with("sc-"));
//! ```

// Style model and compilation
pub use crate::style::{class_for, compile, media, ClassName, Literal, StyleMap, StyleValue};

// Components and props
pub use crate::component::{
    styled, styled_motion, Element, EventHandler, Node, PropValue, Props, RenderTarget,
    StyleParam, StyledComponent,
};

// Themes
pub use crate::theme::{
    current_mode, current_theme, provide_themes, provide_themes_with_store, set_theme_mode,
    toggle_theme, ThemeMode, ThemeSet, ThemeTokens,
};

// Document injection
pub use crate::document;

// Errors
pub use crate::error::{Result, StyleError};
