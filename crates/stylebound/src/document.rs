//! The active document: style injection and the injection cache.
//!
//! Compiled CSS has to land in a document exactly once per class. This
//! module models that document as process-wide state: a set of injected
//! class names and an ordered list of the style elements they produced.
//! [`ensure_injected`] is the idempotent entry point the render pipeline
//! calls; everything else is inspection for hosts and tests.
//!
//! Injection survives for the life of the process. Components appear and
//! disappear, but their rules stay, ready for the next render that hashes
//! to the same class. [`reset_document`] exists so tests can start clean.

use std::collections::HashMap;
use std::sync::Mutex;

use once_cell::sync::Lazy;

use crate::style::ClassName;

/// One materialized style element in the document's style area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleElement {
    id: String,
    css: String,
}

impl StyleElement {
    /// The element id, `style-<class>`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The CSS text the element carries.
    pub fn css(&self) -> &str {
        &self.css
    }
}

#[derive(Default)]
struct DocumentState {
    /// Classes already materialized, with the CSS they were injected with.
    injected: HashMap<ClassName, String>,
    /// Style elements in injection order.
    head: Vec<StyleElement>,
}

static DOCUMENT: Lazy<Mutex<DocumentState>> = Lazy::new(|| Mutex::new(DocumentState::default()));

/// Injects `css` for `class` unless that class is already present.
///
/// The first call for a class appends a style element with id
/// `style-<class>` and records the class in the cache. Every later call
/// for the same class returns without touching the document, regardless
/// of the CSS passed. Equal styles hash to equal classes, so re-renders
/// and repeated components cost one cache lookup, not one element each.
pub fn ensure_injected(class: &ClassName, css: &str) {
    let mut doc = DOCUMENT.lock().unwrap();
    if doc.injected.contains_key(class) {
        return;
    }
    doc.head.push(StyleElement {
        id: format!("style-{}", class),
        css: css.to_string(),
    });
    doc.injected.insert(class.clone(), css.to_string());
}

/// Returns `true` if `class` has been injected.
pub fn is_injected(class: &ClassName) -> bool {
    DOCUMENT.lock().unwrap().injected.contains_key(class)
}

/// Returns the CSS injected for `class`, if any.
pub fn injected_css(class: &ClassName) -> Option<String> {
    DOCUMENT.lock().unwrap().injected.get(class).cloned()
}

/// Returns a snapshot of the document's style elements, in injection order.
pub fn style_elements() -> Vec<StyleElement> {
    DOCUMENT.lock().unwrap().head.clone()
}

/// Returns the number of injected style elements.
pub fn style_element_count() -> usize {
    DOCUMENT.lock().unwrap().head.len()
}

/// Clears the injection cache and removes every style element.
///
/// Intended for tests; a running host has no reason to un-inject styles.
pub fn reset_document() {
    let mut doc = DOCUMENT.lock().unwrap();
    doc.injected.clear();
    doc.head.clear();
}
