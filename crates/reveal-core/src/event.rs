#![forbid(unsafe_code)]

//! Click events and typed listener registrations.
//!
//! Listeners are plain values rather than closures: a [`ClickHandler`] names
//! the controller that owns it and the [`ClickIntent`] it should carry out.
//! The page dispatcher routes each handler to its controller, so controllers
//! never alias their own state through captured callbacks.

use bitflags::bitflags;

use crate::dom::ElementId;

/// Identifier of a bound controller within one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControllerId(u64);

impl ControllerId {
    /// Wrap a raw id.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw id value.
    #[inline]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// What a click listener asks its controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickIntent {
    /// Flip between open and closed.
    Toggle,
    /// Close if open; no-op otherwise.
    Dismiss,
    /// Keep the click from bubbling past this element.
    Swallow,
}

/// A click listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClickHandler {
    pub controller: ControllerId,
    pub intent: ClickIntent,
}

impl ClickHandler {
    pub const fn new(controller: ControllerId, intent: ClickIntent) -> Self {
        Self { controller, intent }
    }
}

bitflags! {
    /// Dispatch flags set by handlers while a click propagates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct EventFlags: u8 {
        /// The element's default action (e.g. link navigation) is suppressed.
        const DEFAULT_PREVENTED = 0b01;
        /// The click does not bubble past the current element.
        const PROPAGATION_STOPPED = 0b10;
    }
}

/// A click travelling from its target up through its ancestors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    target: ElementId,
    current: ElementId,
    flags: EventFlags,
}

impl ClickEvent {
    /// Create a click on `target`, positioned at the target.
    pub fn new(target: ElementId) -> Self {
        Self {
            target,
            current: target,
            flags: EventFlags::empty(),
        }
    }

    /// The element that was clicked.
    #[inline]
    pub fn target(&self) -> ElementId {
        self.target
    }

    /// The element whose listeners are currently running.
    #[inline]
    pub fn current(&self) -> ElementId {
        self.current
    }

    /// Move the event to the next element on its propagation path.
    pub fn set_current(&mut self, element: ElementId) {
        self.current = element;
    }

    pub fn flags(&self) -> EventFlags {
        self.flags
    }

    /// Suppress the default action.
    pub fn prevent_default(&mut self) {
        self.flags.insert(EventFlags::DEFAULT_PREVENTED);
    }

    /// Stop bubbling after the current element's listeners have run.
    pub fn stop_propagation(&mut self) {
        self.flags.insert(EventFlags::PROPAGATION_STOPPED);
    }

    pub fn default_prevented(&self) -> bool {
        self.flags.contains(EventFlags::DEFAULT_PREVENTED)
    }

    pub fn propagation_stopped(&self) -> bool {
        self.flags.contains(EventFlags::PROPAGATION_STOPPED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_event_has_no_flags() {
        let event = ClickEvent::new(ElementId::new(3));
        assert_eq!(event.flags(), EventFlags::empty());
        assert_eq!(event.target(), event.current());
    }

    #[test]
    fn flags_accumulate_independently() {
        let mut event = ClickEvent::new(ElementId::new(1));
        event.prevent_default();
        assert!(event.default_prevented());
        assert!(!event.propagation_stopped());

        event.stop_propagation();
        assert_eq!(
            event.flags(),
            EventFlags::DEFAULT_PREVENTED | EventFlags::PROPAGATION_STOPPED
        );
    }

    #[test]
    fn current_moves_but_target_stays() {
        let mut event = ClickEvent::new(ElementId::new(1));
        event.set_current(ElementId::new(9));
        assert_eq!(event.target(), ElementId::new(1));
        assert_eq!(event.current(), ElementId::new(9));
    }
}
