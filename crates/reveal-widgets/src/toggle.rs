#![forbid(unsafe_code)]

//! Shared shown/hidden protocol for visibility controllers.
//!
//! Open state is never stored. Every implementation derives it from the
//! DOM on each query, so a toggle always acts on what is rendered and a
//! rapid double click resolves as "last request wins".

use reveal_core::{ClickEvent, ClickIntent, Dom};

use crate::chrome::PageChrome;

/// A controller that shows and hides one panel.
pub trait Toggle {
    /// Whether the panel is currently open, read from the DOM.
    fn is_open(&self, dom: &dyn Dom) -> bool;

    fn show(&self, dom: &mut dyn Dom, chrome: &mut PageChrome);

    fn hide(&self, dom: &mut dyn Dom, chrome: &mut PageChrome);

    /// Hide when open, show otherwise.
    fn toggle(&self, dom: &mut dyn Dom, chrome: &mut PageChrome) {
        if self.is_open(dom) {
            self.hide(dom, chrome);
        } else {
            self.show(dom, chrome);
        }
    }

    /// React to one of this controller's click listeners firing.
    ///
    /// `Toggle` listeners sit on links whose `href` is a target reference,
    /// so navigation is always suppressed.
    fn handle_click(
        &self,
        intent: ClickIntent,
        event: &mut ClickEvent,
        dom: &mut dyn Dom,
        chrome: &mut PageChrome,
    ) {
        match intent {
            ClickIntent::Toggle => {
                event.prevent_default();
                self.toggle(dom, chrome);
            }
            ClickIntent::Dismiss => {
                if self.is_open(dom) {
                    self.hide(dom, chrome);
                }
            }
            ClickIntent::Swallow => event.stop_propagation(),
        }
    }
}
