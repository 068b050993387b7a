//! Media-query helpers for responsive style maps.
//!
//! Each helper wraps a style map under a named breakpoint, producing a
//! single-entry map ready to [`merge`](crate::StyleMap::merge) into a larger
//! style:
//!
//! ```rust
//! use stylebound::{media, StyleMap};
//!
//! let style = StyleMap::new()
//!     .set("display", "flex")
//!     .merge(media::tablet(StyleMap::new().set("flexDirection", "column")))
//!     .merge(media::mobile(StyleMap::new().set("display", "none")));
//! ```
//!
//! The first three breakpoints are upper bounds (`max-width`), so they
//! overlap: a viewport under 480px matches `mobile`, `tablet`, and
//! `desktop` alike, and later rules in the stylesheet win. `large_desktop`
//! is a lower bound covering everything above the desktop cutoff.

use super::map::StyleMap;

/// Condition applied by [`mobile`].
pub const MOBILE_CONDITION: &str = "(max-width: 480px)";

/// Condition applied by [`tablet`].
pub const TABLET_CONDITION: &str = "(max-width: 768px)";

/// Condition applied by [`desktop`].
pub const DESKTOP_CONDITION: &str = "(max-width: 1200px)";

/// Condition applied by [`large_desktop`].
pub const LARGE_DESKTOP_CONDITION: &str = "(min-width: 1201px)";

/// Wraps `style` to apply on viewports up to the mobile cutoff.
pub fn mobile(style: StyleMap) -> StyleMap {
    custom(MOBILE_CONDITION, style)
}

/// Wraps `style` to apply on viewports up to the tablet cutoff.
pub fn tablet(style: StyleMap) -> StyleMap {
    custom(TABLET_CONDITION, style)
}

/// Wraps `style` to apply on viewports up to the desktop cutoff.
pub fn desktop(style: StyleMap) -> StyleMap {
    custom(DESKTOP_CONDITION, style)
}

/// Wraps `style` to apply on viewports above the desktop cutoff.
pub fn large_desktop(style: StyleMap) -> StyleMap {
    custom(LARGE_DESKTOP_CONDITION, style)
}

/// Wraps `style` under a caller-supplied media condition.
///
/// The condition is everything after `@media `, parentheses included:
///
/// ```rust
/// use stylebound::{media, StyleMap};
///
/// let print_only = media::custom("print", StyleMap::new().set("display", "none"));
/// assert!(print_only.get("@media print").is_some());
/// ```
pub fn custom(condition: &str, style: StyleMap) -> StyleMap {
    StyleMap::new().set(&format!("@media {}", condition), style)
}
