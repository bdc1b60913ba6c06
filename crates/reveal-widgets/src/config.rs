#![forbid(unsafe_code)]

//! Typed controller configuration.
//!
//! Neither controller recognizes any options yet. The structs exist so
//! hosts have a stable place to pass configuration and so new options can
//! be added without changing constructor signatures. With the `serde`
//! feature, an empty object deserializes to the defaults and unknown keys
//! are rejected.
//!
//! The deserialization tests live in `reveal-harness/tests/config.rs`,
//! which enables the feature, so a plain workspace `cargo test` runs them.

/// Options for [`DisclosureController`](crate::disclosure::DisclosureController).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
#[non_exhaustive]
pub struct DisclosureConfig {}

/// Options for [`ModalController`](crate::modal::ModalController).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
#[non_exhaustive]
pub struct ModalConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_equal() {
        assert_eq!(ModalConfig::default(), ModalConfig::default());
        assert_eq!(DisclosureConfig::default(), DisclosureConfig::default());
    }
}
