//! Simple tag patterns (delimited span → a single named tag)
//!
//! A [`SimpleTagPattern`] is the generic building block for inline markup
//! that maps one capture group straight into one HTML element with no
//! attributes. The shipped instance handles underline, which has no
//! Markdown spelling of its own: the formatting-code preprocessor emits
//! `~text~` and this pattern turns it into a `<u>` element.

use crate::extension::InlinePattern;
use crate::ir::nodes::{InlineNode, TaggedSpan};
use regex::{Captures, Regex};

/// Inline pattern wrapping one capture group in a named tag.
#[derive(Debug)]
pub struct SimpleTagPattern {
    name: String,
    priority: u32,
    pattern: Regex,
    tag: String,
    group: usize,
}

impl SimpleTagPattern {
    pub fn new(
        name: impl Into<String>,
        pattern: Regex,
        tag: impl Into<String>,
        group: usize,
        priority: u32,
    ) -> Self {
        Self {
            name: name.into(),
            priority,
            pattern,
            tag: tag.into(),
            group,
        }
    }

    /// The `~delimited~` underline pattern.
    ///
    /// Priority 75: below the color pattern, so color annotations claim
    /// their spans first.
    pub fn underline() -> Self {
        let pattern = Regex::new(r"(~)(.*?)~").expect("underline pattern is a valid regex");
        Self::new("underline", pattern, "u", 2, 75)
    }
}

impl InlinePattern for SimpleTagPattern {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u32 {
        self.priority
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn handle_match(&self, captures: &Captures<'_>) -> InlineNode {
        let text = captures
            .get(self.group)
            .map(|group| group.as_str())
            .unwrap_or_default();

        InlineNode::Tagged(TaggedSpan {
            tag: self.tag.clone(),
            text: text.to_string(),
        })
    }
}
