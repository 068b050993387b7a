//! The style model and its compilation pipeline.
//!
//! Styling flows through three pure steps:
//!
//! 1. **Describe**: build a [`StyleMap`] of declarations, selector entries,
//!    and media entries (see [`media`] for breakpoint helpers).
//! 2. **Identify**: derive the map's [`ClassName`] with [`class_for`]. The
//!    name is a deterministic hash of the map's canonical form, so equal
//!    maps share a class.
//! 3. **Compile**: turn the map into scoped CSS text with [`compile`],
//!    every rule anchored to the generated class.
//!
//! None of these steps touch the document; injection lives in
//! [`document`](crate::document), keyed by the class names produced here.

mod css;
mod hash;
mod map;
pub mod media;

pub use css::compile;
pub use hash::{class_for, ClassName};
pub use map::{Literal, StyleMap, StyleValue};
