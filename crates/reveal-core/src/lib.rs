#![forbid(unsafe_code)]

//! Core types for reveal: element handles, selectors, click events and the
//! [`Dom`](dom::Dom) capability trait that controllers are written against.

pub mod dom;
pub mod event;
#[cfg(any(test, feature = "test-helpers"))]
pub mod memory;
pub mod selector;

pub use dom::{Dom, ElementId, Markup};
pub use event::{ClickEvent, ClickHandler, ClickIntent, ControllerId, EventFlags};
pub use selector::{Selector, SelectorError};
