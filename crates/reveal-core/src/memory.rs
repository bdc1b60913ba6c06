#![forbid(unsafe_code)]

//! In-memory DOM backend.
//!
//! `MemoryDom` is a deterministic, host-free [`Dom`] used by tests and by
//! headless hosts that want to drive the controllers without a browser.
//!
//! # Semantics
//!
//! - The document is an `html` root with a single `body` child.
//! - Created elements start detached and are invisible to queries until
//!   appended somewhere under the root.
//! - Visibility is inherited: an element is visible only if it and every
//!   ancestor are displayed.
//! - Fades settle immediately and are recorded in [`MemoryDom::transitions`].
//! - Appending or prepending an attached element moves it.
//!
//! # Failure Modes
//!
//! Operations on unknown handles are no-ops (queries return empty/`None`).
//! Moving an element into itself or one of its descendants is ignored.

use std::fmt::Write as _;

use crate::dom::{Dom, ElementId, Markup};
use crate::event::ClickHandler;
use crate::selector::Selector;

/// A recorded fade request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    FadeIn,
    FadeOut,
}

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
    styles: Vec<(String, String)>,
    text: Option<String>,
    displayed: bool,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    listeners: Vec<ClickHandler>,
}

impl Node {
    fn from_markup(markup: &Markup) -> Self {
        let mut classes: Vec<String> = Vec::with_capacity(markup.classes.len());
        for class in &markup.classes {
            if !classes.contains(class) {
                classes.push(class.clone());
            }
        }
        Self {
            tag: markup.tag.to_ascii_lowercase(),
            attributes: markup.attributes.clone(),
            classes,
            styles: Vec::new(),
            text: markup.text.clone(),
            displayed: true,
            parent: None,
            children: Vec::new(),
            listeners: Vec::new(),
        }
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn matches(&self, selector: &Selector) -> bool {
        match selector {
            Selector::Id(id) => self.attribute("id") == Some(id.as_str()),
            Selector::Class(class) => self.classes.iter().any(|c| c == class),
            Selector::Tag(tag) => self.tag.eq_ignore_ascii_case(tag),
            Selector::LinkTo(id) => {
                self.tag == "a"
                    && self
                        .attribute("href")
                        .and_then(|href| href.strip_prefix('#'))
                        == Some(id.as_str())
            }
        }
    }
}

/// Deterministic in-memory document.
#[derive(Debug, Clone)]
pub struct MemoryDom {
    nodes: Vec<Node>,
    root: ElementId,
    body: ElementId,
    transitions: Vec<(ElementId, Transition)>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    /// Create a document containing only `html > body`.
    #[must_use]
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: Vec::new(),
            root: ElementId::new(0),
            body: ElementId::new(0),
            transitions: Vec::new(),
        };
        dom.root = dom.create_element(&Markup::new("html"));
        dom.body = dom.create_element(&Markup::new("body"));
        dom.append_child(dom.root, dom.body);
        dom
    }

    /// The `html` root.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Create an element from `markup` and append it to `parent`.
    pub fn insert(&mut self, parent: ElementId, markup: Markup) -> ElementId {
        let element = self.create_element(&markup);
        self.append_child(parent, element);
        element
    }

    /// Set whether the element itself is displayed, without recording a fade.
    pub fn set_displayed(&mut self, element: ElementId, displayed: bool) {
        if let Some(node) = self.node_mut(element) {
            node.displayed = displayed;
        }
    }

    pub fn tag(&self, element: ElementId) -> Option<&str> {
        self.node(element).map(|n| n.tag.as_str())
    }

    pub fn classes(&self, element: ElementId) -> &[String] {
        self.node(element)
            .map(|n| n.classes.as_slice())
            .unwrap_or_default()
    }

    pub fn children(&self, element: ElementId) -> &[ElementId] {
        self.node(element)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    pub fn text(&self, element: ElementId) -> Option<&str> {
        self.node(element).and_then(|n| n.text.as_deref())
    }

    /// Number of attached elements matching `selector`.
    pub fn count(&self, selector: &Selector) -> usize {
        self.query_elements(selector).len()
    }

    /// Every fade requested so far, oldest first.
    pub fn transitions(&self) -> &[(ElementId, Transition)] {
        &self.transitions
    }

    /// Fades requested for one element, oldest first.
    pub fn transitions_for(&self, element: ElementId) -> Vec<Transition> {
        self.transitions
            .iter()
            .filter(|(el, _)| *el == element)
            .map(|(_, t)| *t)
            .collect()
    }

    /// Whether `ancestor` is `element` or contains it.
    pub fn contains(&self, ancestor: ElementId, element: ElementId) -> bool {
        let mut node = Some(element);
        while let Some(current) = node {
            if current == ancestor {
                return true;
            }
            node = self.parent(current);
        }
        false
    }

    /// Render the attached tree as indented text, one element per line.
    ///
    /// Each line shows `tag#id.class…`, other attributes in brackets,
    /// inline styles in braces, text in quotes and `(hidden)` for elements
    /// that are not displayed themselves.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(self.root, 0, &mut out);
        out
    }

    fn write_outline(&self, element: ElementId, depth: usize, out: &mut String) {
        let Some(node) = self.node(element) else {
            return;
        };
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(&node.tag);
        if let Some(id) = node.attribute("id") {
            let _ = write!(out, "#{id}");
        }
        for class in &node.classes {
            let _ = write!(out, ".{class}");
        }
        for (name, value) in node.attributes.iter().filter(|(n, _)| n != "id") {
            let _ = write!(out, " [{name}=\"{value}\"]");
        }
        if !node.styles.is_empty() {
            let styles: Vec<String> = node
                .styles
                .iter()
                .map(|(p, v)| format!("{p}: {v}"))
                .collect();
            let _ = write!(out, " {{{}}}", styles.join("; "));
        }
        if let Some(text) = &node.text {
            let _ = write!(out, " \"{text}\"");
        }
        if !node.displayed {
            out.push_str(" (hidden)");
        }
        out.push('\n');
        for &child in &node.children {
            self.write_outline(child, depth + 1, out);
        }
    }

    fn node(&self, element: ElementId) -> Option<&Node> {
        usize::try_from(element.id())
            .ok()
            .and_then(|idx| self.nodes.get(idx))
    }

    fn node_mut(&mut self, element: ElementId) -> Option<&mut Node> {
        usize::try_from(element.id())
            .ok()
            .and_then(|idx| self.nodes.get_mut(idx))
    }

    fn collect_matching(&self, from: ElementId, selector: &Selector, out: &mut Vec<ElementId>) {
        let Some(node) = self.node(from) else {
            return;
        };
        for &child in &node.children {
            if self.node(child).is_some_and(|n| n.matches(selector)) {
                out.push(child);
            }
            self.collect_matching(child, selector, out);
        }
    }

    /// Detach `child` from its parent and return whether the move is legal.
    fn detach_for_move(&mut self, parent: ElementId, child: ElementId) -> bool {
        if self.node(parent).is_none() || self.node(child).is_none() {
            return false;
        }
        if self.contains(child, parent) {
            return false;
        }
        if let Some(old) = self.node(child).and_then(|n| n.parent)
            && let Some(old_parent) = self.node_mut(old)
        {
            old_parent.children.retain(|&c| c != child);
        }
        true
    }

    fn record_fade(&mut self, element: ElementId, transition: Transition) {
        let Some(node) = self.node_mut(element) else {
            return;
        };
        node.displayed = transition == Transition::FadeIn;
        self.transitions.push((element, transition));
    }
}

impl Dom for MemoryDom {
    fn body(&self) -> ElementId {
        self.body
    }

    fn query_elements(&self, selector: &Selector) -> Vec<ElementId> {
        let mut out = Vec::new();
        if self.node(self.root).is_some_and(|n| n.matches(selector)) {
            out.push(self.root);
        }
        self.collect_matching(self.root, selector, &mut out);
        out
    }

    fn query_within(&self, root: ElementId, selector: &Selector) -> Vec<ElementId> {
        let mut out = Vec::new();
        self.collect_matching(root, selector, &mut out);
        out
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.node(element)
            .and_then(|n| n.attribute(name))
            .map(str::to_owned)
    }

    fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.node(element).and_then(|n| n.parent)
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        if let Some(node) = self.node_mut(element)
            && !node.classes.iter().any(|c| c == class)
        {
            node.classes.push(class.to_owned());
        }
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        if let Some(node) = self.node_mut(element) {
            node.classes.retain(|c| c != class);
        }
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.node(element)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    fn is_visible(&self, element: ElementId) -> bool {
        let mut node = Some(element);
        let mut seen_any = false;
        while let Some(current) = node {
            match self.node(current) {
                Some(n) if n.displayed => {
                    seen_any = true;
                    node = n.parent;
                }
                _ => return false,
            }
        }
        seen_any && self.contains(self.root, element)
    }

    fn fade_in(&mut self, element: ElementId) {
        self.record_fade(element, Transition::FadeIn);
    }

    fn fade_out(&mut self, element: ElementId) {
        self.record_fade(element, Transition::FadeOut);
    }

    fn on_click(&mut self, element: ElementId, handler: ClickHandler) {
        if let Some(node) = self.node_mut(element) {
            node.listeners.push(handler);
        }
    }

    fn off_click(&mut self, element: ElementId) {
        if let Some(node) = self.node_mut(element) {
            node.listeners.clear();
        }
    }

    fn click_handlers(&self, element: ElementId) -> Vec<ClickHandler> {
        self.node(element)
            .map(|n| n.listeners.clone())
            .unwrap_or_default()
    }

    fn create_element(&mut self, markup: &Markup) -> ElementId {
        let id = ElementId::new(self.nodes.len() as u64);
        self.nodes.push(Node::from_markup(markup));
        id
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if !self.detach_for_move(parent, child) {
            return;
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
    }

    fn prepend_child(&mut self, parent: ElementId, child: ElementId) {
        if !self.detach_for_move(parent, child) {
            return;
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.insert(0, child);
        }
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
    }

    fn inline_style(&self, element: ElementId, property: &str) -> Option<String> {
        self.node(element).and_then(|n| {
            n.styles
                .iter()
                .find(|(p, _)| p == property)
                .map(|(_, v)| v.clone())
        })
    }

    fn set_inline_style(&mut self, element: ElementId, property: &str, value: &str) {
        let Some(node) = self.node_mut(element) else {
            return;
        };
        match node.styles.iter_mut().find(|(p, _)| p == property) {
            Some(slot) => slot.1 = value.to_owned(),
            None => node.styles.push((property.to_owned(), value.to_owned())),
        }
    }
}
