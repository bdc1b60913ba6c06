#![forbid(unsafe_code)]

//! Modal panels: a panel shown inside a per-instance container above the
//! page's shared overlay.
//!
//! Binding a panel restructures the page once:
//!
//! ```text
//! body
//!   …
//!   div.fb-modal-overlay            (shared, one per page)
//!   div.fb-modal-container          (one per modal)
//!     div#settings                  (the panel, moved here)
//!       a.fb-modal-close.close      (injected close control)
//!       …original panel content…
//! ```
//!
//! # Dismissal
//!
//! | Source | Listener | Active |
//! |--------|----------|--------|
//! | `a[href="#<panel id>"]` | toggle, suppress navigation | always |
//! | injected close control | close | always |
//! | `.close` elements inside the panel | close | always |
//! | container background | close | only while open |
//! | panel | stop propagation | always |
//!
//! The panel swallows clicks so a click inside it never reaches the
//! container's background listener.
//!
//! # Multiple Open Modals
//!
//! Opening a second modal does not close the first. Both mark the shared
//! overlay visible, and closing either one clears the overlay marker and
//! releases the scroll lock even if the other is still open.

mod controller;

pub use controller::ModalController;
