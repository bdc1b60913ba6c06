#![forbid(unsafe_code)]

//! Visibility controllers for reveal.
//!
//! - [`DisclosureController`]: a trigger that fades one panel in and out.
//! - [`ModalController`]: a panel shown in its own container above a
//!   page-wide overlay, with background, close-control and link dismissal.
//!
//! Hosts create a [`Page`] over their [`Dom`](reveal_core::Dom), bind
//! controllers to already-resolved elements, and forward clicks to
//! [`Page::click`].

pub mod chrome;
pub mod config;
pub mod disclosure;
mod logging;
pub mod modal;
pub mod page;
pub mod registry;
pub mod toggle;

pub use chrome::{PageChrome, ScrollLock};
pub use config::{DisclosureConfig, ModalConfig};
pub use disclosure::DisclosureController;
pub use modal::ModalController;
pub use page::Page;
pub use registry::{Controller, Registry};
pub use toggle::Toggle;

/// Marker classes forming the markup contract with page stylesheets.
pub mod classes {
    /// Disclosure trigger while its panel is shown.
    pub const OPEN: &str = "open";
    /// Disclosure trigger after its panel was hidden.
    pub const CLOSED: &str = "closed";
    /// Modal container and shared overlay while a modal is open.
    pub const VISIBLE: &str = "visible";
    /// The shared overlay.
    pub const OVERLAY: &str = "fb-modal-overlay";
    /// Per-modal container.
    pub const CONTAINER: &str = "fb-modal-container";
    /// The injected close control.
    pub const CLOSE_CONTROL: &str = "fb-modal-close";
    /// Any element inside a modal panel that closes it.
    pub const CLOSE: &str = "close";
}
