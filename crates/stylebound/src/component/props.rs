//! Render-time properties for styled components.
//!
//! Props model what a caller hands a component for one render: named
//! values, an optional incoming `className`, event callbacks, and child
//! nodes. Names starting with `$` are internal to the styling layer; the
//! render pipeline consumes them and never forwards them to the wrapped
//! renderable.

use std::fmt;
use std::rc::Rc;

use crate::theme::ThemeTokens;
use super::styled::Element;

/// Prefix marking props as internal to the styling layer.
pub const INTERNAL_PROP_PREFIX: char = '$';

/// The prop carrying a per-render theme override.
pub const THEME_PROP: &str = "$theme";

/// An opaque event callback carried through props.
///
/// Handlers are reference-counted and clone cheaply with the props that
/// hold them. Equality is identity: two handlers compare equal only when
/// they share the same allocation, which is what prop-diffing hosts want.
pub struct EventHandler(Rc<dyn Fn()>);

impl EventHandler {
    /// Wraps a callback.
    pub fn new(f: impl Fn() + 'static) -> Self {
        EventHandler(Rc::new(f))
    }

    /// Invokes the callback.
    pub fn call(&self) {
        (self.0)()
    }
}

impl Clone for EventHandler {
    fn clone(&self) -> Self {
        EventHandler(Rc::clone(&self.0))
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EventHandler")
    }
}

impl PartialEq for EventHandler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// One property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Str(String),
    Num(f64),
    Bool(bool),
    /// A theme record, carried by the [`THEME_PROP`] override.
    Theme(ThemeTokens),
    /// An event callback, e.g. under `onClick`.
    Handler(EventHandler),
}

impl PropValue {
    /// Returns the string value, if this is a string prop.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric value, if this is a numeric prop.
    pub fn as_num(&self) -> Option<f64> {
        match self {
            PropValue::Num(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a boolean prop.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the handler, if this is a callback prop.
    pub fn as_handler(&self) -> Option<&EventHandler> {
        match self {
            PropValue::Handler(h) => Some(h),
            _ => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Str(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Num(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Num(value as f64)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<ThemeTokens> for PropValue {
    fn from(value: ThemeTokens) -> Self {
        PropValue::Theme(value)
    }
}

impl From<EventHandler> for PropValue {
    fn from(value: EventHandler) -> Self {
        PropValue::Handler(value)
    }
}

/// A child node: plain text or an already-rendered element.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(String),
    Element(Element),
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Node::Element(value)
    }
}

/// The incoming property set for one render.
///
/// Values keep insertion order, and setting a name twice replaces in
/// place, mirroring [`StyleMap`](crate::StyleMap).
///
/// # Example
///
/// ```rust
/// use stylebound::Props;
///
/// let props = Props::new()
///     .set("id", "save-button")
///     .class_name("cta")
///     .on("onClick", || {})
///     .child("Save");
///
/// assert_eq!(props.len(), 3);
/// assert_eq!(props.children().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    values: Vec<(String, PropValue)>,
    children: Vec<Node>,
}

impl Props {
    /// Creates an empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning `self` for chaining.
    pub fn set(mut self, name: &str, value: impl Into<PropValue>) -> Self {
        let value = value.into();
        if let Some(slot) = self.values.iter_mut().find(|(k, _)| k == name) {
            slot.1 = value;
        } else {
            self.values.push((name.to_string(), value));
        }
        self
    }

    /// Registers an event callback under `name`, e.g. `onClick`.
    pub fn on(self, name: &str, handler: impl Fn() + 'static) -> Self {
        self.set(name, PropValue::Handler(EventHandler::new(handler)))
    }

    /// Sets the incoming `className`, merged after the generated class.
    pub fn class_name(self, class: &str) -> Self {
        self.set("className", class)
    }

    /// Supplies a per-render theme override via the [`THEME_PROP`] prop.
    pub fn theme(self, tokens: ThemeTokens) -> Self {
        self.set(THEME_PROP, PropValue::Theme(tokens))
    }

    /// Appends a child node.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Returns the value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.values.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Iterates over values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The child nodes, in order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns the number of named values (children not counted).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no named values and no children.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.children.is_empty()
    }

    /// Returns the theme override, if the [`THEME_PROP`] prop carries one.
    pub fn theme_override(&self) -> Option<&ThemeTokens> {
        match self.get(THEME_PROP) {
            Some(PropValue::Theme(tokens)) => Some(tokens),
            _ => None,
        }
    }

    pub(crate) fn into_parts(self) -> (Vec<(String, PropValue)>, Vec<Node>) {
        (self.values, self.children)
    }
}
