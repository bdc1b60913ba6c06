#![forbid(unsafe_code)]

//! Test harness for reveal.
//!
//! Provides ready-made pages over [`MemoryDom`](reveal_core::memory::MemoryDom)
//! and [`assert_outline!`] for comparing the document structure against an
//! expected outline with a readable diff.
//!
//! Set `RUST_LOG=reveal_widgets=trace` and call [`init_test_logging`] to see
//! controller logs in test output.

pub mod fixtures;

#[doc(hidden)]
pub use pretty_assertions;

use std::sync::Once;

static LOGGING: Once = Once::new();

/// Install a test-writer tracing subscriber once per process.
pub fn init_test_logging() {
    LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Assert that a `MemoryDom` renders to the expected outline.
///
/// ```ignore
/// assert_outline!(page.dom(), "html\n  body\n");
/// ```
#[macro_export]
macro_rules! assert_outline {
    ($dom:expr, $expected:expr $(,)?) => {
        $crate::pretty_assertions::assert_eq!($dom.outline(), $expected)
    };
}
