#![forbid(unsafe_code)]

//! Log macros that forward to `tracing` when the `tracing` feature is on
//! and expand to nothing otherwise.
//!
//! Arguments are not evaluated when the feature is off, so log fields must
//! be side-effect free.

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($arg)*);
        }
    };
}

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)*);
        }
    };
}

pub(crate) use debug;
pub(crate) use trace;
