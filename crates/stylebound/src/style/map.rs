//! Style maps: the ordered, nested description of a component's styling.
//!
//! A [`StyleMap`] is the input to compilation. It holds declaration entries
//! (`"color" -> "red"`) and nested entries (`"&:hover" -> { ... }`), in the
//! order they were set. Insertion order is part of a map's identity: two maps
//! with the same entries in a different order are different maps, produce
//! different canonical forms, and therefore different class names.

use std::fmt;

/// A leaf declaration value: a string or a number.
///
/// Numbers keep their numeric form until CSS emission, where they print the
/// way they would appear in a stylesheet (`12`, `1.5`, `0.9`).
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    Int(i64),
    Float(f64),
}

impl Literal {
    /// Appends this value's canonical fragment to `out`.
    ///
    /// Strings are JSON-quoted, numbers print bare. The fragment feeds the
    /// identity hash, so it must be stable across runs.
    fn write_canonical(&self, out: &mut String) {
        match self {
            Literal::Str(s) => write_json_string(out, s),
            Literal::Int(n) => out.push_str(&n.to_string()),
            // Adding 0.0 collapses -0.0 to 0.0, so structurally equal maps
            // never canonicalize to different text.
            Literal::Float(n) => out.push_str(&(*n + 0.0).to_string()),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Str(s) => f.write_str(s),
            Literal::Int(n) => write!(f, "{}", n),
            Literal::Float(n) => write!(f, "{}", *n + 0.0),
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Str(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::Str(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Int(value as i64)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}

/// One entry value in a [`StyleMap`]: either a leaf declaration or a nested
/// map under a selector or media key.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// A literal declaration value.
    Literal(Literal),
    /// A nested map, keyed by a selector pattern or media query.
    Nested(StyleMap),
}

impl StyleValue {
    /// Returns the literal value, if this is a leaf entry.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            StyleValue::Literal(lit) => Some(lit),
            StyleValue::Nested(_) => None,
        }
    }

    /// Returns the nested map, if this is a nested entry.
    pub fn as_nested(&self) -> Option<&StyleMap> {
        match self {
            StyleValue::Literal(_) => None,
            StyleValue::Nested(map) => Some(map),
        }
    }

    fn write_canonical(&self, out: &mut String) {
        match self {
            StyleValue::Literal(lit) => lit.write_canonical(out),
            StyleValue::Nested(map) => map.write_canonical(out),
        }
    }
}

impl From<Literal> for StyleValue {
    fn from(value: Literal) -> Self {
        StyleValue::Literal(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Literal(value.into())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Literal(value.into())
    }
}

impl From<i64> for StyleValue {
    fn from(value: i64) -> Self {
        StyleValue::Literal(value.into())
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Literal(value.into())
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Literal(value.into())
    }
}

impl From<StyleMap> for StyleValue {
    fn from(value: StyleMap) -> Self {
        StyleValue::Nested(value)
    }
}

/// An ordered map of style entries.
///
/// Keys are either CSS property names in mixed case (`"fontSize"`), selector
/// patterns (`"&:hover"`, `":focus"`), or media queries (`"@media ..."`).
/// Values are literals for properties and nested maps for the rest.
///
/// # Example
///
/// ```rust
/// use stylebound::StyleMap;
///
/// let style = StyleMap::new()
///     .set("color", "red")
///     .set("fontSize", "12px")
///     .set("&:hover", StyleMap::new().set("color", "blue"));
///
/// assert_eq!(style.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    entries: Vec<(String, StyleValue)>,
}

impl StyleMap {
    /// Creates an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an entry, returning `self` for chaining.
    ///
    /// Setting a key that already exists replaces its value in place: the
    /// entry keeps its original position, so re-setting a key never changes
    /// the map's canonical form ordering.
    pub fn set(mut self, key: &str, value: impl Into<StyleValue>) -> Self {
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key.to_string(), value));
        }
        self
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merges `other` into this map, returning the result.
    ///
    /// Entries from `other` overwrite same-keyed entries in place; new keys
    /// append in `other`'s order. This is the composition primitive behind
    /// the media helpers:
    ///
    /// ```rust
    /// use stylebound::{media, StyleMap};
    ///
    /// let style = StyleMap::new()
    ///     .set("display", "flex")
    ///     .merge(media::tablet(StyleMap::new().set("flexDirection", "column")));
    ///
    /// assert_eq!(style.len(), 2);
    /// ```
    pub fn merge(mut self, other: StyleMap) -> Self {
        for (key, value) in other.entries {
            if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
                slot.1 = value;
            } else {
                self.entries.push((key, value));
            }
        }
        self
    }

    /// Returns the canonical serialized form of this map.
    ///
    /// The form is a compact JSON-shaped string: entries in insertion order,
    /// string values quoted and escaped, nested maps serialized recursively.
    /// It is the sole input to class-name derivation, so maps that serialize
    /// identically share a class.
    ///
    /// ```rust
    /// use stylebound::StyleMap;
    ///
    /// let style = StyleMap::new().set("color", "red").set("padding", 4);
    /// assert_eq!(style.canonical_form(), r#"{"color":"red","padding":4}"#);
    /// ```
    pub fn canonical_form(&self) -> String {
        let mut out = String::new();
        self.write_canonical(&mut out);
        out
    }

    fn write_canonical(&self, out: &mut String) {
        out.push('{');
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            write_json_string(out, key);
            out.push(':');
            value.write_canonical(out);
        }
        out.push('}');
    }
}

/// Appends `s` to `out` as a JSON string literal.
fn write_json_string(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_preserves_insertion_order() {
        let map = StyleMap::new()
            .set("color", "red")
            .set("padding", "4px")
            .set("margin", "0");

        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["color", "padding", "margin"]);
    }

    #[test]
    fn test_set_replaces_in_place() {
        let map = StyleMap::new()
            .set("color", "red")
            .set("padding", "4px")
            .set("color", "blue");

        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["color", "padding"]);
        assert_eq!(map.get("color"), Some(&StyleValue::from("blue")));
    }

    #[test]
    fn test_merge_overwrites_and_appends() {
        let base = StyleMap::new().set("color", "red").set("padding", "4px");
        let extra = StyleMap::new().set("color", "blue").set("margin", "8px");

        let merged = base.merge(extra);
        let keys: Vec<&str> = merged.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["color", "padding", "margin"]);
        assert_eq!(merged.get("color"), Some(&StyleValue::from("blue")));
    }

    #[test]
    fn test_canonical_form_flat() {
        let map = StyleMap::new().set("color", "red").set("fontSize", "12px");
        assert_eq!(
            map.canonical_form(),
            r#"{"color":"red","fontSize":"12px"}"#
        );
    }

    #[test]
    fn test_canonical_form_nested_and_numeric() {
        let map = StyleMap::new()
            .set("opacity", 0.5)
            .set("zIndex", 10)
            .set("&:hover", StyleMap::new().set("opacity", 1.0));

        assert_eq!(
            map.canonical_form(),
            r#"{"opacity":0.5,"zIndex":10,"&:hover":{"opacity":1}}"#
        );
    }

    #[test]
    fn test_canonical_form_escapes_strings() {
        let map = StyleMap::new().set("content", "\"a\\b\"");
        assert_eq!(map.canonical_form(), r#"{"content":"\"a\\b\""}"#);
    }

    #[test]
    fn test_canonical_form_empty() {
        assert_eq!(StyleMap::new().canonical_form(), "{}");
    }

    #[test]
    fn test_order_distinguishes_maps() {
        let a = StyleMap::new().set("color", "red").set("margin", "0");
        let b = StyleMap::new().set("margin", "0").set("color", "red");

        assert_ne!(a, b);
        assert_ne!(a.canonical_form(), b.canonical_form());
    }

    #[test]
    fn test_structural_equality() {
        let a = StyleMap::new()
            .set("color", "red")
            .set(":focus", StyleMap::new().set("outline", "none"));
        let b = StyleMap::new()
            .set("color", "red")
            .set(":focus", StyleMap::new().set("outline", "none"));

        assert_eq!(a, b);
        assert_eq!(a.canonical_form(), b.canonical_form());
    }

    #[test]
    fn test_value_accessors() {
        let map = StyleMap::new()
            .set("color", "red")
            .set(":hover", StyleMap::new().set("color", "blue"));

        assert!(map.get("color").and_then(StyleValue::as_literal).is_some());
        assert!(map.get(":hover").and_then(StyleValue::as_nested).is_some());
        assert!(map.get(":hover").and_then(StyleValue::as_literal).is_none());
        assert!(map.get("missing").is_none());
    }

    #[test]
    fn test_negative_zero_canonicalizes_as_zero() {
        let a = StyleMap::new().set("opacity", -0.0);
        let b = StyleMap::new().set("opacity", 0.0);

        assert_eq!(a, b);
        assert_eq!(a.canonical_form(), r#"{"opacity":0}"#);
        assert_eq!(a.canonical_form(), b.canonical_form());
    }

    #[test]
    fn test_literal_display() {
        assert_eq!(Literal::from("red").to_string(), "red");
        assert_eq!(Literal::from(12).to_string(), "12");
        assert_eq!(Literal::from(12.0).to_string(), "12");
        assert_eq!(Literal::from(0.9).to_string(), "0.9");
    }
}
