//! Message rendering pipeline (buffer text → HTML)
//!
//! Ties the registry to a Markdown engine. Rendering one message is three
//! steps, each handing its whole output to the next:
//!
//! 1. Every registered line preprocessor runs over the message lines in
//!    priority order (formatting codes become Markdown delimiters here).
//! 2. Every registered inline pattern runs over the joined text in priority
//!    order; each match is replaced with its node's serialized HTML.
//! 3. comrak converts the spliced text to HTML, with raw inline HTML
//!    enabled so the elements from step 2 pass through untouched.
//!
//! The pipeline is stateless between calls: each `render` builds its own
//! scan state and touches nothing shared, so one renderer can be used from
//! multiple callers on different messages without coordination.

use crate::error::RenderError;
use crate::html;
use crate::registry::ExtensionRegistry;
use comrak::{markdown_to_html, ComrakOptions};
use serde::{Deserialize, Serialize};

/// Options for message rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Enable comrak's table extension
    pub tables: bool,
    /// Enable comrak's footnote extension
    pub footnotes: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tables: true,
            footnotes: true,
        }
    }
}

/// Renders chat buffer text to HTML using the registered extensions.
pub struct MessageRenderer {
    registry: ExtensionRegistry,
    options: RenderOptions,
}

impl MessageRenderer {
    /// Create a renderer with the built-in extensions and default options.
    pub fn new() -> Self {
        Self {
            registry: ExtensionRegistry::with_defaults(),
            options: RenderOptions::default(),
        }
    }

    /// Create a renderer with a custom registry and options.
    pub fn with_registry(registry: ExtensionRegistry, options: RenderOptions) -> Self {
        Self { registry, options }
    }

    /// Render one message to HTML.
    pub fn render(&self, source: &str) -> Result<RenderedMessage, RenderError> {
        let mut lines: Vec<String> = source.split('\n').map(str::to_string).collect();

        for preprocessor in self.registry.preprocessors() {
            lines = preprocessor.run(lines);
        }

        let text = self.apply_inline_patterns(&lines.join("\n"))?;
        let html = markdown_to_html(&text, &self.comrak_options());

        Ok(RenderedMessage { html })
    }

    /// Replace every inline-pattern match with its serialized node.
    ///
    /// One left-to-right pass per pattern: a replacement is never rescanned
    /// by the pattern that produced it, while later (lower priority)
    /// patterns still see the full spliced text.
    fn apply_inline_patterns(&self, text: &str) -> Result<String, RenderError> {
        let mut text = text.to_string();

        for pattern in self.registry.inline_patterns() {
            let mut replaced = String::with_capacity(text.len());
            let mut scanned_to = 0;

            for captures in pattern.pattern().captures_iter(&text) {
                let matched = captures.get(0).expect("group 0 is the whole match");
                replaced.push_str(&text[scanned_to..matched.start()]);

                let node = pattern.handle_match(&captures);
                replaced.push_str(&html::serialize_inline(&node)?);

                scanned_to = matched.end();
            }

            replaced.push_str(&text[scanned_to..]);
            text = replaced;
        }

        Ok(text)
    }

    fn comrak_options(&self) -> ComrakOptions<'static> {
        let mut options = ComrakOptions::default();
        options.extension.table = self.options.tables;
        options.extension.footnotes = self.options.footnotes;
        // Inline patterns splice raw elements into the text; comrak must
        // pass them through instead of escaping them.
        options.render.unsafe_ = true;
        options
    }
}

impl Default for MessageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// A rendered message
#[derive(Debug, Clone)]
pub struct RenderedMessage {
    html: String,
}

impl RenderedMessage {
    /// The rendered HTML.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Consume the message and return the HTML.
    pub fn into_html(self) -> String {
        self.html
    }

    /// Convert the rendered output back to buffer formatting codes.
    ///
    /// Always returns [`RenderError::NotSupported`]: the pipeline only runs
    /// toward HTML.
    pub fn to_buffer_codes(&self) -> Result<String, RenderError> {
        Err(RenderError::NotSupported(
            "converting rendered output back to buffer formatting codes".to_string(),
        ))
    }
}

/// Render a message with the built-in extensions and default options.
///
/// # Example
///
/// ```
/// use chatmark::renderer::render_to_html;
///
/// let html = render_to_html("plain text").unwrap();
/// assert_eq!(html, "<p>plain text</p>\n");
/// ```
pub fn render_to_html(source: &str) -> Result<String, RenderError> {
    MessageRenderer::new()
        .render(source)
        .map(RenderedMessage::into_html)
}
