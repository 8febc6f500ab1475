//! Extension registry for pipeline discovery and dispatch ordering
//!
//! This module provides a centralized registry for the extensions a
//! renderer runs: line preprocessors and inline patterns. Each list is kept
//! sorted by descending priority, with registration order preserved for
//! ties, so the renderer can just iterate.

use crate::error::RenderError;
use crate::extension::{InlinePattern, LinePreprocessor};
use crate::extensions::codes::CodePreprocessor;
use crate::extensions::color::ColorPattern;
use crate::extensions::tag::SimpleTagPattern;
use std::cmp::Reverse;

/// Registry of rendering extensions
///
/// # Examples
///
/// ```ignore
/// let mut registry = ExtensionRegistry::new();
/// registry.register_preprocessor(CodePreprocessor);
///
/// for preprocessor in registry.preprocessors() {
///     lines = preprocessor.run(lines);
/// }
/// ```
pub struct ExtensionRegistry {
    preprocessors: Vec<Box<dyn LinePreprocessor>>,
    inline_patterns: Vec<Box<dyn InlinePattern>>,
}

impl ExtensionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ExtensionRegistry {
            preprocessors: Vec::new(),
            inline_patterns: Vec::new(),
        }
    }

    /// Register a line preprocessor
    ///
    /// Higher priorities run earlier; equal priorities keep their
    /// registration order.
    pub fn register_preprocessor<P: LinePreprocessor + 'static>(&mut self, preprocessor: P) {
        self.preprocessors.push(Box::new(preprocessor));
        self.preprocessors.sort_by_key(|p| Reverse(p.priority()));
    }

    /// Register an inline pattern
    pub fn register_inline_pattern<P: InlinePattern + 'static>(&mut self, pattern: P) {
        self.inline_patterns.push(Box::new(pattern));
        self.inline_patterns.sort_by_key(|p| Reverse(p.priority()));
    }

    /// Preprocessors in dispatch order
    pub fn preprocessors(&self) -> &[Box<dyn LinePreprocessor>] {
        &self.preprocessors
    }

    /// Inline patterns in dispatch order
    pub fn inline_patterns(&self) -> &[Box<dyn InlinePattern>] {
        &self.inline_patterns
    }

    /// Look up a preprocessor by name
    pub fn preprocessor(&self, name: &str) -> Result<&dyn LinePreprocessor, RenderError> {
        self.preprocessors
            .iter()
            .map(|p| p.as_ref())
            .find(|p| p.name() == name)
            .ok_or_else(|| RenderError::ExtensionNotFound(name.to_string()))
    }

    /// Look up an inline pattern by name
    pub fn inline_pattern(&self, name: &str) -> Result<&dyn InlinePattern, RenderError> {
        self.inline_patterns
            .iter()
            .map(|p| p.as_ref())
            .find(|p| p.name() == name)
            .ok_or_else(|| RenderError::ExtensionNotFound(name.to_string()))
    }

    /// Create a registry with the built-in extensions
    ///
    /// Formatting-code preprocessing runs at 100; the color pattern runs at
    /// 100 and the underline pattern at 75, so color annotations are
    /// matched before any underline spans.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register_preprocessor(CodePreprocessor);
        registry.register_inline_pattern(ColorPattern);
        registry.register_inline_pattern(SimpleTagPattern::underline());

        registry
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
