#![forbid(unsafe_code)]

//! The DOM capability surface the controllers are written against.
//!
//! Controllers never locate or own elements themselves. A host implements
//! [`Dom`] over its real document (or uses the in-memory backend from the
//! `test-helpers` feature) and the controllers drive it through element
//! handles.
//!
//! # Invariants
//!
//! 1. [`ElementId`] handles stay valid for the page session; elements are
//!    moved, never destroyed.
//! 2. `query_*` results are in document order.
//! 3. `fade_in`/`fade_out` are fire-and-forget: `is_visible` reflects the
//!    requested end state as soon as the call returns.
//! 4. `off_click` removes every click listener on the element.

use crate::event::ClickHandler;
use crate::selector::Selector;

/// Opaque, non-owning handle to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    /// Wrap a raw handle value.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw handle value.
    #[inline]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Description of an element to create.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Markup {
    pub tag: String,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
}

impl Markup {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Add a class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set an attribute, replacing an earlier value with the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    /// Set the `id` attribute.
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Set text content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// Document operations consumed by the controllers.
pub trait Dom {
    /// The page body.
    fn body(&self) -> ElementId;

    /// First element in the document matching `selector`.
    fn query_element(&self, selector: &Selector) -> Option<ElementId> {
        self.query_elements(selector).into_iter().next()
    }

    /// All elements in the document matching `selector`.
    fn query_elements(&self, selector: &Selector) -> Vec<ElementId>;

    /// Descendants of `root` (excluding `root`) matching `selector`.
    fn query_within(&self, root: ElementId, selector: &Selector) -> Vec<ElementId>;

    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;

    fn parent(&self, element: ElementId) -> Option<ElementId>;

    fn add_class(&mut self, element: ElementId, class: &str);
    fn remove_class(&mut self, element: ElementId, class: &str);
    fn has_class(&self, element: ElementId, class: &str) -> bool;

    /// Whether the element and all of its ancestors are displayed.
    fn is_visible(&self, element: ElementId) -> bool;
    fn fade_in(&mut self, element: ElementId);
    fn fade_out(&mut self, element: ElementId);

    fn on_click(&mut self, element: ElementId, handler: ClickHandler);
    /// Remove every click listener on `element`.
    fn off_click(&mut self, element: ElementId);
    /// Listeners currently bound to `element`, in registration order.
    fn click_handlers(&self, element: ElementId) -> Vec<ClickHandler>;

    /// Create a detached element.
    fn create_element(&mut self, markup: &Markup) -> ElementId;
    /// Move `child` to the end of `parent`'s children.
    fn append_child(&mut self, parent: ElementId, child: ElementId);
    /// Move `child` to the start of `parent`'s children.
    fn prepend_child(&mut self, parent: ElementId, child: ElementId);

    fn inline_style(&self, element: ElementId, property: &str) -> Option<String>;
    fn set_inline_style(&mut self, element: ElementId, property: &str, value: &str);

    /// The element followed by its ancestors, innermost first.
    fn propagation_path(&self, target: ElementId) -> Vec<ElementId> {
        let mut path = vec![target];
        let mut node = target;
        while let Some(parent) = self.parent(node) {
            path.push(parent);
            node = parent;
        }
        path
    }
}
