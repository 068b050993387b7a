//! Compilation of style maps into scoped CSS text.
//!
//! Compilation is a pure function from a class name and a style map to CSS
//! text. The generated class scopes every rule: flat declarations land in a
//! base rule for `.<class>`, selector entries become sibling rules with `&`
//! rewritten to `.<class>`, and media entries wrap their declarations in a
//! `@media` block around the base selector.
//!
//! One level of nesting is supported. Maps nested below that, or entries
//! whose shape does not match their key (a literal under a selector key, a
//! map under a property key), are dropped silently.

use super::hash::ClassName;
use super::map::{Literal, StyleMap, StyleValue};

/// What a style-map key means to the compiler.
enum KeyKind {
    /// A CSS property name, possibly mixed case.
    Declaration,
    /// A selector pattern containing `&` for the generated class.
    Combinator,
    /// A pseudo-class or pseudo-element suffix like `:hover` or `::before`.
    Pseudo,
    /// A media query wrapper like `@media (max-width: 768px)`.
    Media,
}

fn classify(key: &str) -> KeyKind {
    if key.starts_with('&') {
        KeyKind::Combinator
    } else if key.starts_with(':') {
        KeyKind::Pseudo
    } else if key.starts_with("@media") {
        KeyKind::Media
    } else {
        KeyKind::Declaration
    }
}

/// Compiles `style` into CSS text scoped under `class`.
///
/// The base rule is always emitted, even when empty, so every class name
/// present in markup has a matching rule in the document. Nested rules
/// follow in entry order, separated by single spaces.
///
/// # Example
///
/// ```rust
/// use stylebound::{compile, ClassName, StyleMap};
///
/// let class = ClassName::new("sc-demo");
/// let style = StyleMap::new()
///     .set("color", "red")
///     .set("&:hover", StyleMap::new().set("color", "blue"));
///
/// assert_eq!(
///     compile(&class, &style),
///     ".sc-demo { color: red; } .sc-demo:hover { color: blue; }"
/// );
/// ```
pub fn compile(class: &ClassName, style: &StyleMap) -> String {
    let mut base = String::new();
    let mut rules: Vec<String> = Vec::new();

    for (key, value) in style.iter() {
        match (classify(key), value) {
            (KeyKind::Declaration, StyleValue::Literal(lit)) => {
                if !base.is_empty() {
                    base.push(' ');
                }
                base.push_str(&declaration(key, lit));
            }
            (KeyKind::Combinator, StyleValue::Nested(map)) => {
                let selector = key.replacen('&', &format!(".{}", class), 1);
                rules.push(rule(&selector, &declarations(map)));
            }
            (KeyKind::Pseudo, StyleValue::Nested(map)) => {
                let selector = format!(".{}{}", class, key);
                rules.push(rule(&selector, &declarations(map)));
            }
            (KeyKind::Media, StyleValue::Nested(map)) => {
                let scoped = rule(&format!(".{}", class), &declarations(map));
                rules.push(format!("{} {{ {} }}", key, scoped));
            }
            // Shape mismatch: dropped without emitting anything.
            _ => {}
        }
    }

    let mut css = rule(&format!(".{}", class), &base);
    for nested in rules {
        css.push(' ');
        css.push_str(&nested);
    }
    css
}

/// Flattens one nested map into declaration text, skipping deeper nesting.
fn declarations(map: &StyleMap) -> String {
    let mut out = String::new();
    for (key, value) in map.iter() {
        if let StyleValue::Literal(lit) = value {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&declaration(key, lit));
        }
    }
    out
}

fn declaration(name: &str, value: &Literal) -> String {
    format!("{}: {};", camel_to_kebab(name), value)
}

fn rule(selector: &str, declarations: &str) -> String {
    if declarations.is_empty() {
        format!("{} {{ }}", selector)
    } else {
        format!("{} {{ {} }}", selector, declarations)
    }
}

/// Converts a mixed-case property name to its hyphenated CSS form
/// (`fontSize` -> `font-size`). Only ASCII uppercase marks a word break;
/// already-hyphenated and custom-property names pass through untouched.
fn camel_to_kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class() -> ClassName {
        ClassName::new("sc-x")
    }

    #[test]
    fn test_base_rule() {
        let style = StyleMap::new().set("color", "red");
        assert_eq!(compile(&class(), &style), ".sc-x { color: red; }");
    }

    #[test]
    fn test_property_names_are_kebab_cased() {
        let style = StyleMap::new().set("fontSize", "12px").set("zIndex", 10);
        assert_eq!(
            compile(&class(), &style),
            ".sc-x { font-size: 12px; z-index: 10; }"
        );
    }

    #[test]
    fn test_pseudo_selector_suffix() {
        let style = StyleMap::new()
            .set("color", "red")
            .set(":hover", StyleMap::new().set("color", "blue"));
        assert_eq!(
            compile(&class(), &style),
            ".sc-x { color: red; } .sc-x:hover { color: blue; }"
        );
    }

    #[test]
    fn test_pseudo_element_suffix() {
        let style = StyleMap::new().set("::before", StyleMap::new().set("content", "''"));
        assert_eq!(
            compile(&class(), &style),
            ".sc-x { } .sc-x::before { content: ''; }"
        );
    }

    #[test]
    fn test_combinator_rewrites_first_ampersand() {
        let style = StyleMap::new().set("& > span", StyleMap::new().set("margin", "0"));
        assert_eq!(
            compile(&class(), &style),
            ".sc-x { } .sc-x > span { margin: 0; }"
        );

        // Only the first `&` is the generated class; later ones pass through.
        let style = StyleMap::new().set("&:hover &", StyleMap::new().set("margin", "0"));
        assert_eq!(
            compile(&class(), &style),
            ".sc-x { } .sc-x:hover & { margin: 0; }"
        );
    }

    #[test]
    fn test_media_query_wraps_scoped_rule() {
        let style = StyleMap::new().set(
            "@media (max-width: 768px)",
            StyleMap::new().set("display", "none"),
        );
        let class = ClassName::new("sc-y");
        assert_eq!(
            compile(&class, &style),
            ".sc-y { } @media (max-width: 768px) { .sc-y { display: none; } }"
        );
    }

    #[test]
    fn test_empty_map_emits_empty_base_rule() {
        assert_eq!(compile(&class(), &StyleMap::new()), ".sc-x { }");
    }

    #[test]
    fn test_shape_mismatches_are_dropped() {
        // A map under a property key and a literal under a selector key
        // both vanish from the output.
        let style = StyleMap::new()
            .set("color", "red")
            .set("padding", StyleMap::new().set("top", "1px"))
            .set("&:hover", "blue");
        assert_eq!(compile(&class(), &style), ".sc-x { color: red; }");
    }

    #[test]
    fn test_second_nesting_level_is_dropped() {
        let style = StyleMap::new().set(
            "&:hover",
            StyleMap::new()
                .set("color", "blue")
                .set("&:focus", StyleMap::new().set("color", "green")),
        );
        assert_eq!(
            compile(&class(), &style),
            ".sc-x { } .sc-x:hover { color: blue; }"
        );
    }

    #[test]
    fn test_rule_order_follows_entry_order() {
        let style = StyleMap::new()
            .set(":focus", StyleMap::new().set("outline", "none"))
            .set("color", "red")
            .set("&.active", StyleMap::new().set("fontWeight", "bold"));
        assert_eq!(
            compile(&class(), &style),
            ".sc-x { color: red; } .sc-x:focus { outline: none; } .sc-x.active { font-weight: bold; }"
        );
    }

    #[test]
    fn test_camel_to_kebab() {
        assert_eq!(camel_to_kebab("fontSize"), "font-size");
        assert_eq!(camel_to_kebab("borderTopLeftRadius"), "border-top-left-radius");
        assert_eq!(camel_to_kebab("color"), "color");
        assert_eq!(camel_to_kebab("font-size"), "font-size");
    }
}
