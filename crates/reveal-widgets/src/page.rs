#![forbid(unsafe_code)]

//! Page session: a document plus the controllers bound to it.
//!
//! [`Page`] is the entry point hosts use. It binds controllers to resolved
//! elements and delivers clicks with DOM bubbling semantics:
//!
//! 1. The propagation path (target, then ancestors) is fixed when the
//!    click starts.
//! 2. At each element, the listeners bound at that moment run in
//!    registration order.
//! 3. Once a listener stops propagation, no further element is visited.
//!
//! Everything runs synchronously on the caller's thread; a second click
//! always observes the DOM left by the first.

use reveal_core::{ClickEvent, ControllerId, Dom, ElementId};

use crate::config::{DisclosureConfig, ModalConfig};
use crate::disclosure::DisclosureController;
use crate::logging::trace;
use crate::modal::ModalController;
use crate::registry::Registry;
use crate::toggle::Toggle;

/// A document and its bound controllers.
#[derive(Debug)]
pub struct Page<D: Dom> {
    dom: D,
    registry: Registry,
}

impl<D: Dom> Page<D> {
    pub fn new(dom: D) -> Self {
        Self {
            dom,
            registry: Registry::new(),
        }
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn into_dom(self) -> D {
        self.dom
    }

    /// Attach disclosure behavior to `trigger`.
    ///
    /// Binding the same trigger twice returns the first controller's id.
    pub fn bind_disclosure(
        &mut self,
        trigger: ElementId,
        config: DisclosureConfig,
    ) -> ControllerId {
        self.registry.bind_disclosure(&mut self.dom, trigger, config)
    }

    /// Attach modal behavior to `panel`.
    ///
    /// Binding the same panel twice returns the first controller's id.
    pub fn bind_modal(&mut self, panel: ElementId, config: ModalConfig) -> ControllerId {
        self.registry.bind_modal(&mut self.dom, panel, config)
    }

    /// The disclosure already bound to `trigger`, if any.
    pub fn disclosure(&self, trigger: ElementId) -> Option<&DisclosureController> {
        self.registry.disclosure(trigger)
    }

    /// The modal already bound to `panel`, if any.
    pub fn modal(&self, panel: ElementId) -> Option<&ModalController> {
        self.registry.modal(panel)
    }

    /// Whether the controller's panel is open. `None` for unknown ids.
    pub fn is_open(&self, id: ControllerId) -> Option<bool> {
        self.registry.controller(id).map(|c| c.is_open(&self.dom))
    }

    /// Open the controller's panel. Returns `false` for unknown ids.
    pub fn show(&mut self, id: ControllerId) -> bool {
        self.registry
            .with_controller(id, &mut self.dom, |c, dom, chrome| c.show(dom, chrome))
            .is_some()
    }

    /// Close the controller's panel. Returns `false` for unknown ids.
    pub fn hide(&mut self, id: ControllerId) -> bool {
        self.registry
            .with_controller(id, &mut self.dom, |c, dom, chrome| c.hide(dom, chrome))
            .is_some()
    }

    /// Flip the controller's panel. Returns `false` for unknown ids.
    pub fn toggle(&mut self, id: ControllerId) -> bool {
        self.registry
            .with_controller(id, &mut self.dom, |c, dom, chrome| c.toggle(dom, chrome))
            .is_some()
    }

    /// Deliver a click on `target` and return the finished event.
    pub fn click(&mut self, target: ElementId) -> ClickEvent {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("click_dispatch", element = target.id()).entered();

        let mut event = ClickEvent::new(target);
        for node in self.dom.propagation_path(target) {
            event.set_current(node);
            for handler in self.dom.click_handlers(node) {
                self.registry.dispatch(&mut self.dom, handler, &mut event);
            }
            if event.propagation_stopped() {
                trace!(at = node.id(), "propagation stopped");
                break;
            }
        }
        event
    }
}
