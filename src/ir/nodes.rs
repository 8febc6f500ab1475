//! Core data structures for rendered inline content.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An inline unit produced by an inline pattern handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InlineNode {
    Text(String),
    Styled(StyledSpan),
    Tagged(TaggedSpan),
}

/// Which color channel a color setting applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    Foreground,
    Background,
}

/// A color value as written in the annotation syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorValue {
    /// Lowercase ASCII color name (e.g., "red").
    Named(String),
    /// Six hex digits, stored without the leading `#`.
    Hex(String),
}

impl ColorValue {
    /// Parse a color token from the annotation syntax.
    ///
    /// The token has already been shape-checked by the pattern that captured
    /// it, so this only dispatches on the leading `#`. The token is kept
    /// verbatim either way.
    pub fn parse(token: &str) -> Self {
        match token.strip_prefix('#') {
            Some(digits) => ColorValue::Hex(digits.to_string()),
            None => ColorValue::Named(token.to_string()),
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Named(name) => write!(f, "{name}"),
            ColorValue::Hex(digits) => write!(f, "#{digits}"),
        }
    }
}

/// Represents a text span carrying resolved color attributes.
///
/// Carries at most one value per channel; setting a channel twice keeps the
/// later value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledSpan {
    pub text: String,
    pub foreground: Option<ColorValue>,
    pub background: Option<ColorValue>,
}

impl StyledSpan {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            foreground: None,
            background: None,
        }
    }

    /// Set the color for one channel, replacing any earlier value.
    pub fn set_color(&mut self, channel: Channel, value: ColorValue) {
        match channel {
            Channel::Foreground => self.foreground = Some(value),
            Channel::Background => self.background = Some(value),
        }
    }
}

/// Represents a text span wrapped in a single named tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedSpan {
    pub tag: String,
    pub text: String,
}
