#![forbid(unsafe_code)]

//! Typed element selectors.
//!
//! Only the handful of forms the controllers rely on are supported:
//!
//! | Form | Example | Matches |
//! |------|---------|---------|
//! | Identity | `#settings` | element whose `id` attribute equals `settings` |
//! | Class | `.fb-modal-overlay` | element carrying the class |
//! | Tag | `body` | element with that tag name |
//! | Link to identity | `a[href="#settings"]` | `<a>` whose `href` is exactly `#settings` |
//!
//! A trigger's `href` is resolved by parsing it as a selector, so a link
//! like `href="#details"` resolves to [`Selector::Id`]. Names follow CSS
//! identifier rules, so `#détails` is an identity reference too. Escapes
//! (`#a\.b`) are not decoded.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Result |
//! |---------|-------|--------|
//! | Empty input | `""` or whitespace | [`SelectorError::Empty`] |
//! | Empty name | `#` or `.` alone | [`SelectorError::EmptyName`] |
//! | Anything else | combinators, pseudo-classes, escapes, other attributes | [`SelectorError::Unsupported`] |

use std::fmt;

/// Errors from selector parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// The input was empty.
    Empty,
    /// A `#` or `.` prefix was not followed by a name.
    EmptyName(String),
    /// The input uses syntax outside the supported subset.
    Unsupported(String),
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty selector"),
            Self::EmptyName(s) => write!(f, "selector '{s}' has no name"),
            Self::Unsupported(s) => write!(f, "unsupported selector: {s}"),
        }
    }
}

impl std::error::Error for SelectorError {}

/// A parsed selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// `#id`
    Id(String),
    /// `.class`
    Class(String),
    /// `tag`
    Tag(String),
    /// `a[href="#id"]`
    LinkTo(String),
}

impl Selector {
    /// Parse a selector string.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SelectorError::Empty);
        }

        if let Some(name) = input.strip_prefix('#') {
            return named(input, name).map(|n| Self::Id(n.to_owned()));
        }
        if let Some(name) = input.strip_prefix('.') {
            return named(input, name).map(|n| Self::Class(n.to_owned()));
        }
        if let Some(rest) = input.strip_prefix("a[href=") {
            let id = rest
                .strip_suffix(']')
                .and_then(unquote)
                .and_then(|href| href.strip_prefix('#'))
                .ok_or_else(|| SelectorError::Unsupported(input.to_owned()))?;
            return named(input, id).map(|n| Self::LinkTo(n.to_owned()));
        }
        if is_name(input) && input.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Ok(Self::Tag(input.to_ascii_lowercase()));
        }

        Err(SelectorError::Unsupported(input.to_owned()))
    }

    /// Selector for links whose `href` references the element with `id`.
    #[must_use]
    pub fn link_to(id: impl Into<String>) -> Self {
        Self::LinkTo(id.into())
    }

    /// Selector for the element with the given `id`.
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Selector for elements carrying `class`.
    #[must_use]
    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Class(class) => write!(f, ".{class}"),
            Self::Tag(tag) => f.write_str(tag),
            Self::LinkTo(id) => write!(f, "a[href=\"#{id}\"]"),
        }
    }
}

impl std::str::FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn named<'a>(input: &str, name: &'a str) -> Result<&'a str, SelectorError> {
    if name.is_empty() {
        return Err(SelectorError::EmptyName(input.to_owned()));
    }
    if !is_name(name) {
        return Err(SelectorError::Unsupported(input.to_owned()));
    }
    Ok(name)
}

/// CSS identifier characters: ASCII alphanumerics, `-`, `_`, and any
/// non-ASCII code point.
fn is_name(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii())
}

fn unquote(s: &str) -> Option<&str> {
    s.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| s.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_identity_reference() {
        assert_eq!(Selector::parse("#details"), Ok(Selector::id("details")));
    }

    #[test]
    fn parses_class_and_tag() {
        assert_eq!(
            Selector::parse(".fb-modal-overlay"),
            Ok(Selector::class("fb-modal-overlay"))
        );
        assert_eq!(Selector::parse("BODY"), Ok(Selector::Tag("body".into())));
    }

    #[test]
    fn parses_link_to_identity() {
        assert_eq!(
            Selector::parse("a[href=\"#settings\"]"),
            Ok(Selector::link_to("settings"))
        );
        assert_eq!(
            Selector::parse("a[href='#settings']"),
            Ok(Selector::link_to("settings"))
        );
    }

    #[test]
    fn accepts_non_ascii_names() {
        assert_eq!(Selector::parse("#détails"), Ok(Selector::id("détails")));
        assert_eq!(Selector::parse(".réglages"), Ok(Selector::class("réglages")));
        assert_eq!(
            Selector::parse("a[href=\"#設定\"]"),
            Ok(Selector::link_to("設定"))
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(Selector::parse("  #x  "), Ok(Selector::id("x")));
    }

    #[test]
    fn rejects_empty_and_bare_prefixes() {
        assert_eq!(Selector::parse(""), Err(SelectorError::Empty));
        assert_eq!(Selector::parse("   "), Err(SelectorError::Empty));
        assert_eq!(
            Selector::parse("#"),
            Err(SelectorError::EmptyName("#".into()))
        );
        assert_eq!(
            Selector::parse("."),
            Err(SelectorError::EmptyName(".".into()))
        );
    }

    #[test]
    fn rejects_unsupported_syntax() {
        for input in [
            "div > p",
            "#a.b",
            "a:hover",
            "a[href=\"settings\"]",
            "a[title=\"x\"]",
            "http://example.com",
            "1abc",
            "#a\\.b",
        ] {
            assert!(
                matches!(Selector::parse(input), Err(SelectorError::Unsupported(_))),
                "{input} should be unsupported"
            );
        }
    }

    #[test]
    fn error_display_names_input() {
        let err = Selector::parse("div > p").unwrap_err();
        assert_eq!(err.to_string(), "unsupported selector: div > p");
    }

    proptest! {
        #[test]
        fn display_reparses_to_same_selector(name in "[a-z][a-z0-9_-]{0,12}", kind in 0u8..4) {
            let sel = match kind {
                0 => Selector::id(name.clone()),
                1 => Selector::class(name.clone()),
                2 => Selector::Tag(name.clone()),
                _ => Selector::link_to(name.clone()),
            };
            prop_assert_eq!(Selector::parse(&sel.to_string()), Ok(sel));
        }
    }
}
