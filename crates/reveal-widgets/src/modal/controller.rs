#![forbid(unsafe_code)]

//! Per-panel modal controller.

use reveal_core::{ClickHandler, ClickIntent, ControllerId, Dom, ElementId, Markup, Selector};

use crate::chrome::PageChrome;
use crate::classes;
use crate::config::ModalConfig;
use crate::logging::{debug, trace};
use crate::toggle::Toggle;

/// Controller for one modal panel.
///
/// Invariants:
/// - `container` and `close` belong to this instance alone and are created
///   exactly once, at bind time.
/// - `overlay` is the page's shared overlay; this controller only re-classes it.
/// - The container carries a click listener if and only if the modal is open.
#[derive(Debug, Clone)]
pub struct ModalController {
    id: ControllerId,
    panel: ElementId,
    links: Vec<ElementId>,
    close_controls: Vec<ElementId>,
    overlay: ElementId,
    container: ElementId,
    close: ElementId,
    config: ModalConfig,
}

impl ModalController {
    /// Restructure the page around `panel` and attach its listeners.
    pub(crate) fn bind(
        id: ControllerId,
        panel: ElementId,
        dom: &mut dyn Dom,
        chrome: &mut PageChrome,
        config: ModalConfig,
    ) -> Self {
        let links = match dom.attribute(panel, "id").filter(|id| !id.is_empty()) {
            Some(panel_id) => dom.query_elements(&Selector::link_to(panel_id)),
            None => {
                debug!(panel = panel.id(), "modal panel has no id; no links");
                Vec::new()
            }
        };
        // Resolved before the injected control exists, so it is bound once.
        let close_controls = dom.query_within(panel, &Selector::class(classes::CLOSE));

        let overlay = chrome.acquire_overlay(dom);

        let container = dom.create_element(&Markup::new("div").class(classes::CONTAINER));
        let close = dom.create_element(
            &Markup::new("a")
                .class(classes::CLOSE_CONTROL)
                .class(classes::CLOSE)
                .attr("title", "close")
                .text("\u{d7}"),
        );
        let body = dom.body();
        dom.append_child(body, container);
        dom.append_child(container, panel);
        dom.prepend_child(panel, close);

        for &link in &links {
            dom.on_click(link, ClickHandler::new(id, ClickIntent::Toggle));
        }
        dom.on_click(panel, ClickHandler::new(id, ClickIntent::Swallow));
        dom.on_click(close, ClickHandler::new(id, ClickIntent::Dismiss));
        for &control in &close_controls {
            dom.on_click(control, ClickHandler::new(id, ClickIntent::Dismiss));
        }

        debug!(
            controller = id.id(),
            panel = panel.id(),
            container = container.id(),
            links = links.len(),
            close_controls = close_controls.len(),
            "bound modal"
        );

        Self {
            id,
            panel,
            links,
            close_controls,
            overlay,
            container,
            close,
            config,
        }
    }

    pub fn id(&self) -> ControllerId {
        self.id
    }

    pub fn panel(&self) -> ElementId {
        self.panel
    }

    /// Links whose `href` references the panel.
    pub fn links(&self) -> &[ElementId] {
        &self.links
    }

    /// `.close` elements found inside the panel at bind time.
    pub fn close_controls(&self) -> &[ElementId] {
        &self.close_controls
    }

    pub fn overlay(&self) -> ElementId {
        self.overlay
    }

    pub fn container(&self) -> ElementId {
        self.container
    }

    /// The injected close control.
    pub fn close_control(&self) -> ElementId {
        self.close
    }

    pub fn config(&self) -> &ModalConfig {
        &self.config
    }
}

impl Toggle for ModalController {
    fn is_open(&self, dom: &dyn Dom) -> bool {
        dom.has_class(self.container, classes::VISIBLE)
    }

    fn show(&self, dom: &mut dyn Dom, chrome: &mut PageChrome) {
        trace!(controller = self.id.id(), "modal show");
        chrome.scroll_lock_mut().lock(dom);

        dom.add_class(self.container, classes::VISIBLE);
        dom.add_class(self.overlay, classes::VISIBLE);

        // Replace rather than stack, so repeated shows keep a single listener.
        dom.off_click(self.container);
        dom.on_click(
            self.container,
            ClickHandler::new(self.id, ClickIntent::Dismiss),
        );
    }

    fn hide(&self, dom: &mut dyn Dom, chrome: &mut PageChrome) {
        trace!(controller = self.id.id(), "modal hide");
        dom.remove_class(self.container, classes::VISIBLE);
        dom.remove_class(self.overlay, classes::VISIBLE);

        chrome.scroll_lock_mut().release(dom);

        dom.off_click(self.container);
    }
}
