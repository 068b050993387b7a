//! Styled components: wrapping render targets with style descriptions.
//!
//! [`styled`] and [`styled_motion`] build [`StyledComponent`]s; rendering
//! one turns [`Props`] into an [`Element`] carrying the generated class.
//! See [`StyledComponent::render`] for the pipeline.

mod props;
mod styled;

pub use props::{EventHandler, Node, PropValue, Props, INTERNAL_PROP_PREFIX, THEME_PROP};
pub use styled::{
    styled, styled_motion, Element, RenderTarget, ResolvedProps, StyleFn, StyleParam,
    StyledComponent,
};
