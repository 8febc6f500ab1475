//! Color annotation matching (`[text]{fg=color bg=color}` → styled span)
//!
//! The annotation wraps a span of text in brackets and attaches one or two
//! `channel=value` clauses in braces. A value is either a lowercase ASCII
//! color name or `#` followed by exactly six hex digits. Clause order does
//! not matter to the grammar; when both clauses name the same channel, the
//! later one wins and the earlier one is dropped.

use crate::extension::InlinePattern;
use crate::ir::nodes::{Channel, ColorValue, InlineNode, StyledSpan};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// One `channel=value` clause captured from an annotation.
#[derive(Debug, Clone, PartialEq)]
struct ColorSetting {
    channel: Channel,
    value: ColorValue,
}

static COLOR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\[([^\]]+)\]\{\s*(fg|bg)=([a-z]+|#[\da-fA-F]{6})\s*(?:\s+(fg|bg)=([a-z]+|#[\da-fA-F]{6}))?\s*\}",
    )
    .expect("color pattern is a valid regex")
});

/// Inline pattern for the bracketed color annotation syntax.
///
/// Matches `[text]{fg=red}`, `[text]{bg=#0a0b0c}` and the two-clause form
/// `[text]{fg=red bg=blue}`. Malformed annotations (wrong hex digit count,
/// uppercase names) simply fail to match and are left in the text.
#[derive(Debug)]
pub struct ColorPattern;

impl ColorPattern {
    fn setting(channel_token: &str, value_token: &str) -> ColorSetting {
        ColorSetting {
            channel: channel_of(channel_token),
            value: ColorValue::parse(value_token),
        }
    }
}

/// Map a captured channel token to its channel.
///
/// The pattern's channel alternation only admits `fg` and `bg`.
fn channel_of(token: &str) -> Channel {
    match token {
        "bg" => Channel::Background,
        _ => Channel::Foreground,
    }
}

impl InlinePattern for ColorPattern {
    fn name(&self) -> &str {
        "color"
    }

    fn description(&self) -> &str {
        "bracketed foreground/background color annotations"
    }

    fn priority(&self) -> u32 {
        100
    }

    fn pattern(&self) -> &Regex {
        &COLOR_PATTERN
    }

    fn handle_match(&self, captures: &Captures<'_>) -> InlineNode {
        let mut span = StyledSpan::new(&captures[1]);

        let first = Self::setting(&captures[2], &captures[3]);
        let second = match (captures.get(4), captures.get(5)) {
            (Some(channel), Some(value)) => Some(Self::setting(channel.as_str(), value.as_str())),
            _ => None,
        };

        match second {
            Some(second) => {
                // Last writer wins per channel: the first clause only
                // survives when it names the other channel.
                if first.channel != second.channel {
                    span.set_color(first.channel, first.value);
                }
                span.set_color(second.channel, second.value);
            }
            None => span.set_color(first.channel, first.value),
        }

        InlineNode::Styled(span)
    }
}
