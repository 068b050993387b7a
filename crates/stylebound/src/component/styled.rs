//! The styled-component factory and its render pipeline.
//!
//! [`styled`] wraps a render target with a style description and returns a
//! [`StyledComponent`]. Rendering one resolves the style against the
//! effective theme and the incoming props, derives the class name, compiles
//! and injects the CSS, and assembles an [`Element`] whose props carry the
//! generated class merged with any incoming one.
//!
//! The pipeline runs in full on every render. Caching happens at the
//! injection layer, keyed by class name, so repeated renders of an
//! unchanged style cost a hash and a cache hit.

use std::fmt;
use std::rc::Rc;

use crate::document;
use crate::error::Result;
use crate::style::{class_for, compile, ClassName, StyleMap};
use crate::theme::{self, ThemeTokens};
use super::props::{Node, PropValue, Props, INTERNAL_PROP_PREFIX};

/// What a styled component wraps.
///
/// The pipeline treats every variant identically; the variant is a label
/// for the host renderer, which decides what `div`, `Card`, or
/// `motion.div` means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderTarget {
    /// A primitive markup element, e.g. `div`.
    Tag(String),
    /// A named composite component; resolving the name is the host's job.
    Component(String),
    /// A primitive of the motion sub-library, e.g. `motion.div`.
    Motion(String),
}

impl RenderTarget {
    /// Display label for the target: `div`, `Card`, `motion.div`.
    pub fn label(&self) -> String {
        match self {
            RenderTarget::Tag(name) | RenderTarget::Component(name) => name.clone(),
            RenderTarget::Motion(name) => format!("motion.{}", name),
        }
    }
}

impl From<&str> for RenderTarget {
    fn from(value: &str) -> Self {
        RenderTarget::Tag(value.to_string())
    }
}

impl From<String> for RenderTarget {
    fn from(value: String) -> Self {
        RenderTarget::Tag(value)
    }
}

/// A dynamic style: a function of the effective theme and the render props.
pub type StyleFn = Rc<dyn Fn(&ThemeTokens, &Props) -> StyleMap>;

/// A component's style description.
///
/// Static styles resolve to themselves; dynamic ones run once per render
/// with the effective theme (override or ambient) and the incoming props.
#[derive(Clone)]
pub enum StyleParam {
    /// A fixed style map.
    Static(StyleMap),
    /// A style computed per render.
    Dynamic(StyleFn),
}

impl StyleParam {
    /// Wraps a style function.
    ///
    /// ```rust
    /// use stylebound::{StyleMap, StyleParam};
    ///
    /// let param = StyleParam::dynamic(|theme, _props| {
    ///     StyleMap::new().set("color", theme.text_color.as_str())
    /// });
    /// # let _ = param;
    /// ```
    pub fn dynamic(f: impl Fn(&ThemeTokens, &Props) -> StyleMap + 'static) -> Self {
        StyleParam::Dynamic(Rc::new(f))
    }

    fn resolve(&self, theme: &ThemeTokens, props: &Props) -> StyleMap {
        match self {
            StyleParam::Static(map) => map.clone(),
            StyleParam::Dynamic(f) => f(theme, props),
        }
    }
}

impl fmt::Debug for StyleParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleParam::Static(map) => f.debug_tuple("Static").field(map).finish(),
            StyleParam::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl From<StyleMap> for StyleParam {
    fn from(value: StyleMap) -> Self {
        StyleParam::Static(value)
    }
}

/// Wraps a render target with a style description.
///
/// The returned component can render any number of times; equal resolved
/// styles share one class and one injected rule set.
///
/// # Example
///
/// ```rust
/// use stylebound::prelude::*;
///
/// provide_themes(ThemeSet::default());
///
/// let button = styled(
///     "button",
///     StyleMap::new()
///         .set("padding", "8px 16px")
///         .set("&:hover", StyleMap::new().set("opacity", 0.9)),
/// );
///
/// let element = button.render(Props::new()).unwrap();
/// assert!(element.class_name().starts_with("sc-"));
/// ```
pub fn styled(target: impl Into<RenderTarget>, style: impl Into<StyleParam>) -> StyledComponent {
    StyledComponent {
        target: target.into(),
        style: style.into(),
    }
}

/// Wraps a motion primitive by name: `styled_motion("div", ...)` styles
/// `motion.div`.
///
/// Motion targets run the same pipeline as everything else; the target
/// only labels the element for the host.
pub fn styled_motion(name: &str, style: impl Into<StyleParam>) -> StyledComponent {
    StyledComponent {
        target: RenderTarget::Motion(name.to_string()),
        style: style.into(),
    }
}

/// A component wrapping a render target with a style description.
#[derive(Debug, Clone)]
pub struct StyledComponent {
    target: RenderTarget,
    style: StyleParam,
}

impl StyledComponent {
    /// The wrapped target.
    pub fn target(&self) -> &RenderTarget {
        &self.target
    }

    /// Debugging name in the host's component tree, e.g. `Styled(div)`.
    pub fn display_name(&self) -> String {
        format!("Styled({})", self.target.label())
    }

    /// Renders the component with `props`.
    ///
    /// The pipeline, in order: resolve the effective theme (the
    /// [`Props::theme`] override when present, the ambient scope
    /// otherwise), resolve the style, derive its class, compile and
    /// inject the CSS, and assemble the element. Internal props are
    /// consumed here; the element's props carry the generated class
    /// merged with any incoming `className`, plus everything else
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::NoThemeScope`](crate::StyleError::NoThemeScope)
    /// when no theme scope is installed. The ambient scope is consulted
    /// even when an override is supplied, so the error surfaces either
    /// way.
    pub fn render(&self, props: Props) -> Result<Element> {
        let ambient = theme::current_theme()?;
        let effective = props.theme_override().cloned().unwrap_or(ambient);

        let style = self.style.resolve(&effective, &props);
        let class = class_for(&style);
        let css = compile(&class, &style);
        document::ensure_injected(&class, &css);

        Ok(Element::assemble(self.target.clone(), &class, props))
    }
}

/// The final property set handed to the wrapped renderable.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProps {
    class_name: String,
    values: Vec<(String, PropValue)>,
    children: Vec<Node>,
}

impl ResolvedProps {
    /// The merged class attribute: the generated class, then the incoming
    /// one when present, space-separated.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Returns the forwarded value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.values.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Iterates over forwarded values in their original order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The forwarded child nodes.
    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

/// A render-ready element: the target plus its resolved props.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    target: RenderTarget,
    props: ResolvedProps,
}

impl Element {
    fn assemble(target: RenderTarget, class: &ClassName, props: Props) -> Self {
        let (values, children) = props.into_parts();

        let mut incoming_class: Option<String> = None;
        let mut kept = Vec::with_capacity(values.len());
        for (name, value) in values {
            if name == "className" {
                if let PropValue::Str(incoming) = value {
                    incoming_class = Some(incoming);
                }
            } else if name.starts_with(INTERNAL_PROP_PREFIX) {
                // Consumed by the styling layer, never forwarded.
            } else {
                kept.push((name, value));
            }
        }

        let class_name = match incoming_class {
            Some(extra) if !extra.is_empty() => format!("{} {}", class, extra),
            _ => class.to_string(),
        };

        Element {
            target,
            props: ResolvedProps {
                class_name,
                values: kept,
                children,
            },
        }
    }

    /// The render target.
    pub fn target(&self) -> &RenderTarget {
        &self.target
    }

    /// The resolved props.
    pub fn props(&self) -> &ResolvedProps {
        &self.props
    }

    /// Shorthand for the merged class attribute.
    pub fn class_name(&self) -> &str {
        self.props.class_name()
    }
}
