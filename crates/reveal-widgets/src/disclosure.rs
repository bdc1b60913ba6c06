#![forbid(unsafe_code)]

//! Disclosure: one trigger shows and hides one panel.
//!
//! The trigger's `href` names the panel (`href="#details"`). Clicking the
//! trigger fades the panel in or out and flips the trigger between the
//! `open` and `closed` marker classes.
//!
//! # Invariants
//!
//! - The initial state is whatever the panel's visibility is at bind time;
//!   binding never forces it.
//! - After `show`, the panel is visible and the trigger has `open` but not
//!   `closed`. `hide` is the exact inverse.
//!
//! # Failure Modes
//!
//! | Failure | Behavior |
//! |---------|----------|
//! | Trigger has no `href` | Bound but inert: clicks only suppress navigation |
//! | `href` is not a supported selector | Same as above |
//! | No element matches | Same as above |

use reveal_core::{ClickEvent, ClickHandler, ClickIntent, ControllerId, Dom, ElementId, Selector};

use crate::chrome::PageChrome;
use crate::classes;
use crate::config::DisclosureConfig;
use crate::logging::{debug, trace};
use crate::toggle::Toggle;

/// Controller linking a trigger to the panel its `href` references.
#[derive(Debug, Clone)]
pub struct DisclosureController {
    id: ControllerId,
    trigger: ElementId,
    target: Option<ElementId>,
    config: DisclosureConfig,
}

impl DisclosureController {
    /// Resolve the target and attach the trigger's click listener.
    pub(crate) fn bind(
        id: ControllerId,
        trigger: ElementId,
        dom: &mut dyn Dom,
        config: DisclosureConfig,
    ) -> Self {
        let target = resolve_target(dom, trigger);
        dom.on_click(trigger, ClickHandler::new(id, ClickIntent::Toggle));

        debug!(
            controller = id.id(),
            trigger = trigger.id(),
            panel = target.map(ElementId::id),
            "bound disclosure"
        );

        Self {
            id,
            trigger,
            target,
            config,
        }
    }

    pub fn id(&self) -> ControllerId {
        self.id
    }

    pub fn trigger(&self) -> ElementId {
        self.trigger
    }

    /// The panel, or `None` when the reference did not resolve.
    pub fn target(&self) -> Option<ElementId> {
        self.target
    }

    pub fn config(&self) -> &DisclosureConfig {
        &self.config
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn resolve_target(dom: &dyn Dom, trigger: ElementId) -> Option<ElementId> {
    let Some(href) = dom.attribute(trigger, "href") else {
        debug!(trigger = trigger.id(), "disclosure trigger has no href; inert");
        return None;
    };
    let selector = match Selector::parse(&href) {
        Ok(selector) => selector,
        Err(err) => {
            debug!(trigger = trigger.id(), %err, "disclosure href unusable; inert");
            return None;
        }
    };
    let target = dom.query_element(&selector);
    if target.is_none() {
        debug!(trigger = trigger.id(), %selector, "disclosure target missing; inert");
    }
    target
}

impl Toggle for DisclosureController {
    fn is_open(&self, dom: &dyn Dom) -> bool {
        self.target.is_some_and(|target| dom.is_visible(target))
    }

    fn show(&self, dom: &mut dyn Dom, _chrome: &mut PageChrome) {
        let Some(target) = self.target else {
            return;
        };
        trace!(controller = self.id.id(), "disclosure show");
        dom.add_class(self.trigger, classes::OPEN);
        dom.remove_class(self.trigger, classes::CLOSED);
        dom.fade_in(target);
    }

    fn hide(&self, dom: &mut dyn Dom, _chrome: &mut PageChrome) {
        let Some(target) = self.target else {
            return;
        };
        trace!(controller = self.id.id(), "disclosure hide");
        dom.remove_class(self.trigger, classes::OPEN);
        dom.add_class(self.trigger, classes::CLOSED);
        dom.fade_out(target);
    }

    fn handle_click(
        &self,
        intent: ClickIntent,
        event: &mut ClickEvent,
        dom: &mut dyn Dom,
        chrome: &mut PageChrome,
    ) {
        match intent {
            // The trigger click is fully consumed: no navigation, no bubbling.
            ClickIntent::Toggle => {
                event.prevent_default();
                event.stop_propagation();
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

#[cfg(test)]
mod tests {
    use super::*;
    use reveal_core::Markup;
    use reveal_core::memory::{MemoryDom, Transition};

    fn fixture(hidden: bool) -> (MemoryDom, ElementId, ElementId) {
        let mut dom = MemoryDom::new();
        let body = dom.body();
        let trigger = dom.insert(body, Markup::new("a").attr("href", "#details"));
        let target = dom.insert(body, Markup::new("div").id("details"));
        dom.set_displayed(target, !hidden);
        (dom, trigger, target)
    }

    fn bind(dom: &mut MemoryDom, trigger: ElementId) -> DisclosureController {
        DisclosureController::bind(
            ControllerId::new(1),
            trigger,
            dom,
            DisclosureConfig::default(),
        )
    }

    #[test]
    fn resolves_target_from_href() {
        let (mut dom, trigger, target) = fixture(true);
        let ctrl = bind(&mut dom, trigger);
        assert_eq!(ctrl.target(), Some(target));
        assert_eq!(
            dom.click_handlers(trigger),
            vec![ClickHandler::new(ControllerId::new(1), ClickIntent::Toggle)]
        );
    }

    #[test]
    fn binding_does_not_force_state() {
        let (mut dom, trigger, target) = fixture(false);
        let ctrl = bind(&mut dom, trigger);
        assert!(ctrl.is_open(&dom));
        assert!(dom.classes(trigger).is_empty());
        assert!(dom.transitions_for(target).is_empty());
    }

    #[test]
    fn show_marks_trigger_and_fades_in() {
        let (mut dom, trigger, target) = fixture(true);
        let ctrl = bind(&mut dom, trigger);
        let mut chrome = PageChrome::new();
        dom.add_class(trigger, classes::CLOSED);

        ctrl.show(&mut dom, &mut chrome);
        assert!(dom.is_visible(target));
        assert!(dom.has_class(trigger, classes::OPEN));
        assert!(!dom.has_class(trigger, classes::CLOSED));
        assert_eq!(dom.transitions_for(target), vec![Transition::FadeIn]);
    }

    #[test]
    fn hide_is_inverse_of_show() {
        let (mut dom, trigger, target) = fixture(false);
        let ctrl = bind(&mut dom, trigger);
        let mut chrome = PageChrome::new();

        ctrl.hide(&mut dom, &mut chrome);
        assert!(!dom.is_visible(target));
        assert!(dom.has_class(trigger, classes::CLOSED));
        assert!(!dom.has_class(trigger, classes::OPEN));
    }

    #[test]
    fn toggle_twice_round_trips() {
        let (mut dom, trigger, target) = fixture(true);
        let ctrl = bind(&mut dom, trigger);
        let mut chrome = PageChrome::new();

        ctrl.toggle(&mut dom, &mut chrome);
        assert!(ctrl.is_open(&dom));
        ctrl.toggle(&mut dom, &mut chrome);
        assert!(!ctrl.is_open(&dom));
        assert!(!dom.is_visible(target));
    }

    #[test]
    fn trigger_click_is_fully_consumed() {
        let (mut dom, trigger, _) = fixture(true);
        let ctrl = bind(&mut dom, trigger);
        let mut chrome = PageChrome::new();
        let mut event = ClickEvent::new(trigger);

        ctrl.handle_click(ClickIntent::Toggle, &mut event, &mut dom, &mut chrome);
        assert!(event.default_prevented());
        assert!(event.propagation_stopped());
        assert!(ctrl.is_open(&dom));
    }

    #[test]
    fn missing_target_is_inert() {
        let mut dom = MemoryDom::new();
        let body = dom.body();
        let trigger = dom.insert(body, Markup::new("a").attr("href", "#nowhere"));
        let ctrl = bind(&mut dom, trigger);
        let mut chrome = PageChrome::new();
        let mut event = ClickEvent::new(trigger);

        assert_eq!(ctrl.target(), None);
        ctrl.handle_click(ClickIntent::Toggle, &mut event, &mut dom, &mut chrome);
        assert!(event.default_prevented());
        assert!(dom.classes(trigger).is_empty());
        assert!(dom.transitions().is_empty());
    }

    #[test]
    fn unusable_href_is_inert() {
        let mut dom = MemoryDom::new();
        let body = dom.body();
        let no_href = dom.insert(body, Markup::new("a"));
        let url = dom.insert(body, Markup::new("a").attr("href", "https://example.com/"));
        assert_eq!(bind(&mut dom, no_href).target(), None);
        assert_eq!(bind(&mut dom, url).target(), None);
    }
}
