#![forbid(unsafe_code)]

//! Page-scoped chrome shared by every modal on a page.
//!
//! [`PageChrome`] owns the two resources no single modal owns:
//!
//! - the shared overlay element, found or created on first use and then
//!   reused for the page session, and
//! - the body scroll lock.
//!
//! # Invariants
//!
//! 1. At most one overlay is ever created per page; an overlay already in
//!    the markup is adopted instead.
//! 2. The overlay is only ever re-classed, never replaced or removed, so a
//!    handle held by one modal is never invalidated by another.
//! 3. The body's inline `overflow` is captured when the lock is first taken
//!    and written back when it is released. With nothing captured, release
//!    writes `auto`.
//!
//! Acquisition is check-then-create with no guard. That is sound only
//! because binding runs synchronously on the single UI thread.

use reveal_core::{Dom, ElementId, Markup, Selector};

use crate::classes;
use crate::logging::debug;

const OVERFLOW: &str = "overflow";

/// Body scroll suspension shared by all modals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollLock {
    /// `Some(previous inline overflow)` while locked.
    saved: Option<Option<String>>,
}

impl ScrollLock {
    pub fn is_locked(&self) -> bool {
        self.saved.is_some()
    }

    /// Hide body scrollbars so a tall modal does not show two of them.
    pub fn lock(&mut self, dom: &mut dyn Dom) {
        let body = dom.body();
        if self.saved.is_none() {
            self.saved = Some(dom.inline_style(body, OVERFLOW));
        }
        dom.set_inline_style(body, OVERFLOW, "hidden");
    }

    /// Hand scrolling back to the body. No-op when not locked.
    pub fn release(&mut self, dom: &mut dyn Dom) {
        let Some(previous) = self.saved.take() else {
            return;
        };
        let body = dom.body();
        dom.set_inline_style(body, OVERFLOW, previous.as_deref().unwrap_or("auto"));
    }
}

/// Chrome shared across the modals of one page.
#[derive(Debug, Clone, Default)]
pub struct PageChrome {
    overlay: Option<ElementId>,
    scroll: ScrollLock,
}

impl PageChrome {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared overlay, if a modal has acquired it yet.
    pub fn overlay(&self) -> Option<ElementId> {
        self.overlay
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll
    }

    pub fn scroll_lock_mut(&mut self) -> &mut ScrollLock {
        &mut self.scroll
    }

    /// Return the page overlay, adopting one from the markup or creating it.
    pub fn acquire_overlay(&mut self, dom: &mut dyn Dom) -> ElementId {
        if let Some(overlay) = self.overlay {
            return overlay;
        }

        let overlay = match dom.query_element(&Selector::class(classes::OVERLAY)) {
            Some(existing) => {
                debug!(overlay = existing.id(), "adopted overlay from markup");
                existing
            }
            None => {
                let created = dom.create_element(&Markup::new("div").class(classes::OVERLAY));
                let body = dom.body();
                dom.append_child(body, created);
                debug!(overlay = created.id(), "created shared overlay");
                created
            }
        };
        self.overlay = Some(overlay);
        overlay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reveal_core::memory::MemoryDom;

    #[test]
    fn creates_overlay_once() {
        let mut dom = MemoryDom::new();
        let mut chrome = PageChrome::new();
        let first = chrome.acquire_overlay(&mut dom);
        let second = chrome.acquire_overlay(&mut dom);
        assert_eq!(first, second);
        assert_eq!(dom.count(&Selector::class(classes::OVERLAY)), 1);
        assert_eq!(dom.parent(first), Some(dom.body()));
    }

    #[test]
    fn adopts_overlay_present_in_markup() {
        let mut dom = MemoryDom::new();
        let body = dom.body();
        let existing = dom.insert(body, Markup::new("div").class(classes::OVERLAY));
        let mut chrome = PageChrome::new();
        assert_eq!(chrome.acquire_overlay(&mut dom), existing);
        assert_eq!(dom.count(&Selector::class(classes::OVERLAY)), 1);
    }

    #[test]
    fn lock_then_release_writes_auto_when_nothing_was_set() {
        let mut dom = MemoryDom::new();
        let mut lock = ScrollLock::default();
        lock.lock(&mut dom);
        assert!(lock.is_locked());
        assert_eq!(dom.inline_style(dom.body(), "overflow").as_deref(), Some("hidden"));
        lock.release(&mut dom);
        assert!(!lock.is_locked());
        assert_eq!(dom.inline_style(dom.body(), "overflow").as_deref(), Some("auto"));
    }

    #[test]
    fn release_restores_previous_inline_value() {
        let mut dom = MemoryDom::new();
        let body = dom.body();
        dom.set_inline_style(body, "overflow", "scroll");
        let mut lock = ScrollLock::default();
        lock.lock(&mut dom);
        lock.lock(&mut dom);
        lock.release(&mut dom);
        assert_eq!(dom.inline_style(body, "overflow").as_deref(), Some("scroll"));
    }

    #[test]
    fn release_without_lock_leaves_body_alone() {
        let mut dom = MemoryDom::new();
        let mut lock = ScrollLock::default();
        lock.release(&mut dom);
        assert_eq!(dom.inline_style(dom.body(), "overflow"), None);
    }
}
