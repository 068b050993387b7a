//! Deterministic class identities for style maps.
//!
//! Every style map hashes to a short class name like `sc-1x3k9f2`. The name
//! depends only on the map's canonical form, so structurally identical maps
//! collapse to one class (and one injected rule set) no matter how many
//! components produced them. Distinct maps are assumed to hash apart; the
//! 32-bit space makes collisions unlikely, and a collision costs visual
//! style sharing, not memory unsafety.

use std::fmt;

use super::map::StyleMap;

/// Prefix for generated class names. Hashes can start with a digit, which is
/// not a valid CSS class start, so every name carries this prefix.
const CLASS_PREFIX: &str = "sc-";

/// A generated class name identifying one resolved style map.
///
/// Class names are the cache key for injection and the scope for every
/// compiled selector. Obtain one with [`class_for`]; [`ClassName::new`]
/// exists for hosts and tests that need a fixed name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassName(String);

impl ClassName {
    /// Wraps a raw class token.
    pub fn new(raw: impl Into<String>) -> Self {
        ClassName(raw.into())
    }

    /// Returns the class name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ClassName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Derives the class name for a style map.
///
/// The derivation is pure: canonical form, a 32-bit rolling hash over its
/// UTF-16 code units, then the magnitude in base-36 behind the `sc-` prefix.
/// Equal maps always produce equal names, across components, renders, and
/// runs.
///
/// # Example
///
/// ```rust
/// use stylebound::{class_for, StyleMap};
///
/// let a = class_for(&StyleMap::new().set("color", "red"));
/// let b = class_for(&StyleMap::new().set("color", "red"));
/// assert_eq!(a, b);
/// assert!(a.as_str().starts_with("sc-"));
/// ```
pub fn class_for(style: &StyleMap) -> ClassName {
    let canonical = style.canonical_form();
    ClassName(format!(
        "{}{}",
        CLASS_PREFIX,
        to_base36(rolling_hash(&canonical))
    ))
}

/// 32-bit rolling hash: `h = h * 31 + unit` with wrapping arithmetic,
/// folded over the text's UTF-16 code units. Returns the magnitude.
fn rolling_hash(text: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in text.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}

/// Renders `value` in lowercase base-36.
fn to_base36(mut value: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = String::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize] as char);
        value /= 36;
    }
    out.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_for_is_deterministic() {
        let map = StyleMap::new().set("color", "red").set("padding", "4px");
        assert_eq!(class_for(&map), class_for(&map));
    }

    #[test]
    fn test_structurally_equal_maps_share_a_class() {
        let a = StyleMap::new()
            .set("color", "red")
            .set("&:hover", StyleMap::new().set("color", "blue"));
        let b = StyleMap::new()
            .set("color", "red")
            .set("&:hover", StyleMap::new().set("color", "blue"));

        assert_eq!(class_for(&a), class_for(&b));
    }

    #[test]
    fn test_different_maps_get_different_classes() {
        let red = class_for(&StyleMap::new().set("color", "red"));
        let blue = class_for(&StyleMap::new().set("color", "blue"));
        let empty = class_for(&StyleMap::new());

        assert_ne!(red, blue);
        assert_ne!(red, empty);
        assert_ne!(blue, empty);
    }

    #[test]
    fn test_entry_order_changes_the_class() {
        let a = class_for(&StyleMap::new().set("color", "red").set("margin", "0"));
        let b = class_for(&StyleMap::new().set("margin", "0").set("color", "red"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_class_name_shape() {
        let class = class_for(&StyleMap::new().set("display", "flex"));
        let name = class.as_str();
        assert!(name.starts_with("sc-"));
        assert!(name.len() > 3);
        assert!(name[3..]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_rolling_hash_handles_non_ascii() {
        // Multi-byte chars hash per UTF-16 unit, not per byte.
        let a = rolling_hash("日本");
        let b = rolling_hash("日本");
        assert_eq!(a, b);
        assert_ne!(rolling_hash("é"), rolling_hash("e"));
    }

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(36 * 36 + 1), "101");
    }

    #[test]
    fn test_class_name_display_and_as_ref() {
        let class = ClassName::new("sc-abc123");
        assert_eq!(class.to_string(), "sc-abc123");
        assert_eq!(class.as_ref(), "sc-abc123");
    }
}
