#![forbid(unsafe_code)]

//! Per-page registry of bound controllers.
//!
//! The registry owns every controller on a page, the element → controller
//! mappings used to refuse double binding, and the page chrome shared by
//! modals. Nothing is attached to the elements themselves.
//!
//! # Invariants
//!
//! 1. An element maps to at most one controller of each kind. Binding it
//!    again returns the existing id and touches nothing.
//! 2. Controller ids are unique within the registry and never reused.
//! 3. Dispatching a handler whose controller is unknown is a no-op.

use ahash::AHashMap;
use reveal_core::{ClickEvent, ClickHandler, ClickIntent, ControllerId, Dom, ElementId};

use crate::chrome::PageChrome;
use crate::config::{DisclosureConfig, ModalConfig};
use crate::disclosure::DisclosureController;
use crate::logging::{debug, trace};
use crate::modal::ModalController;
use crate::toggle::Toggle;

/// A bound controller of either kind.
#[derive(Debug, Clone)]
pub enum Controller {
    Disclosure(DisclosureController),
    Modal(ModalController),
}

impl Controller {
    pub fn id(&self) -> ControllerId {
        match self {
            Self::Disclosure(c) => c.id(),
            Self::Modal(c) => c.id(),
        }
    }

    pub fn as_disclosure(&self) -> Option<&DisclosureController> {
        match self {
            Self::Disclosure(c) => Some(c),
            Self::Modal(_) => None,
        }
    }

    pub fn as_modal(&self) -> Option<&ModalController> {
        match self {
            Self::Modal(c) => Some(c),
            Self::Disclosure(_) => None,
        }
    }
}

impl Toggle for Controller {
    fn is_open(&self, dom: &dyn Dom) -> bool {
        match self {
            Self::Disclosure(c) => c.is_open(dom),
            Self::Modal(c) => c.is_open(dom),
        }
    }

    fn show(&self, dom: &mut dyn Dom, chrome: &mut PageChrome) {
        match self {
            Self::Disclosure(c) => c.show(dom, chrome),
            Self::Modal(c) => c.show(dom, chrome),
        }
    }

    fn hide(&self, dom: &mut dyn Dom, chrome: &mut PageChrome) {
        match self {
            Self::Disclosure(c) => c.hide(dom, chrome),
            Self::Modal(c) => c.hide(dom, chrome),
        }
    }

    fn handle_click(
        &self,
        intent: ClickIntent,
        event: &mut ClickEvent,
        dom: &mut dyn Dom,
        chrome: &mut PageChrome,
    ) {
        match self {
            Self::Disclosure(c) => c.handle_click(intent, event, dom, chrome),
            Self::Modal(c) => c.handle_click(intent, event, dom, chrome),
        }
    }
}

/// Owner of all controllers and shared chrome for one page.
#[derive(Debug, Default)]
pub struct Registry {
    next_id: u64,
    controllers: AHashMap<ControllerId, Controller>,
    disclosures: AHashMap<ElementId, ControllerId>,
    modals: AHashMap<ElementId, ControllerId>,
    chrome: PageChrome,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a disclosure to `trigger`, or return the one already bound.
    pub fn bind_disclosure(
        &mut self,
        dom: &mut dyn Dom,
        trigger: ElementId,
        config: DisclosureConfig,
    ) -> ControllerId {
        if let Some(&existing) = self.disclosures.get(&trigger) {
            debug!(controller = existing.id(), "disclosure already bound");
            return existing;
        }
        let id = self.allocate_id();
        let controller = DisclosureController::bind(id, trigger, dom, config);
        self.disclosures.insert(trigger, id);
        self.controllers.insert(id, Controller::Disclosure(controller));
        id
    }

    /// Bind a modal to `panel`, or return the one already bound.
    pub fn bind_modal(
        &mut self,
        dom: &mut dyn Dom,
        panel: ElementId,
        config: ModalConfig,
    ) -> ControllerId {
        if let Some(&existing) = self.modals.get(&panel) {
            debug!(controller = existing.id(), "modal already bound");
            return existing;
        }
        let id = self.allocate_id();
        let controller = ModalController::bind(id, panel, dom, &mut self.chrome, config);
        self.modals.insert(panel, id);
        self.controllers.insert(id, Controller::Modal(controller));
        id
    }

    pub fn controller(&self, id: ControllerId) -> Option<&Controller> {
        self.controllers.get(&id)
    }

    /// The disclosure bound to `trigger`, if any.
    pub fn disclosure(&self, trigger: ElementId) -> Option<&DisclosureController> {
        self.disclosures
            .get(&trigger)
            .and_then(|id| self.controllers.get(id))
            .and_then(Controller::as_disclosure)
    }

    /// The modal bound to `panel`, if any.
    pub fn modal(&self, panel: ElementId) -> Option<&ModalController> {
        self.modals
            .get(&panel)
            .and_then(|id| self.controllers.get(id))
            .and_then(Controller::as_modal)
    }

    pub fn chrome(&self) -> &PageChrome {
        &self.chrome
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Route one listener invocation to its controller.
    pub fn dispatch(
        &mut self,
        dom: &mut dyn Dom,
        handler: ClickHandler,
        event: &mut ClickEvent,
    ) {
        let Some(controller) = self.controllers.get(&handler.controller) else {
            trace!(
                controller = handler.controller.id(),
                "click for unknown controller ignored"
            );
            return;
        };
        controller.handle_click(handler.intent, event, dom, &mut self.chrome);
    }

    /// Run `f` against a controller and the page chrome.
    ///
    /// Returns `None` when `id` is unknown.
    pub fn with_controller<R>(
        &mut self,
        id: ControllerId,
        dom: &mut dyn Dom,
        f: impl FnOnce(&Controller, &mut dyn Dom, &mut PageChrome) -> R,
    ) -> Option<R> {
        let controller = self.controllers.get(&id)?;
        Some(f(controller, dom, &mut self.chrome))
    }

    fn allocate_id(&mut self) -> ControllerId {
        self.next_id += 1;
        ControllerId::new(self.next_id)
    }
}
