//! Extension traits for the rendering pipeline
//!
//! This module defines the two capability interfaces the pipeline is built
//! from. A [`LinePreprocessor`] rewrites the raw message lines before any
//! inline matching happens; an [`InlinePattern`] owns a compiled regex and
//! turns each successful match into an inline node.
//!
//! Both traits declare a dispatch priority. The registry runs extensions in
//! descending priority order, so a preprocessor at 100 sees the text before
//! one at 50, and an inline pattern at 100 claims its spans before one at 75
//! gets a look at what is left.

use crate::ir::nodes::InlineNode;
use regex::{Captures, Regex};

/// A text-level preprocessing step that runs before inline matching
///
/// Implementors transform a whole block of lines at once. The block is
/// handed over as owned lines so a preprocessor is free to merge, split or
/// rewrite them; the only contract is that the result is again a sequence
/// of lines.
pub trait LinePreprocessor: Send + Sync {
    /// The name of this preprocessor (e.g., "formatting-codes")
    fn name(&self) -> &str;

    /// Optional description of this preprocessor
    fn description(&self) -> &str {
        ""
    }

    /// Dispatch priority; higher priorities run earlier
    fn priority(&self) -> u32;

    /// Transform a block of lines
    fn run(&self, lines: Vec<String>) -> Vec<String>;
}

/// An inline pattern handler
///
/// The host scans preprocessed text with [`InlinePattern::pattern`] and
/// calls [`InlinePattern::handle_match`] for every match it finds. The
/// handler never sees non-matching text, so it is a total function over its
/// captures: shape errors are the pattern's job, not the handler's.
pub trait InlinePattern: Send + Sync + std::fmt::Debug {
    /// The name of this pattern (e.g., "color")
    fn name(&self) -> &str;

    /// Optional description of this pattern
    fn description(&self) -> &str {
        ""
    }

    /// Dispatch priority; higher priorities run earlier
    fn priority(&self) -> u32;

    /// The compiled pattern the host scans text with
    fn pattern(&self) -> &Regex;

    /// Build the replacement node for one successful match
    fn handle_match(&self, captures: &Captures<'_>) -> InlineNode;
}
