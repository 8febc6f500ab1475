//! Chat buffer formatting to Markdown and HTML
//!
//!     This crate converts the inline formatting a chat buffer carries as
//!     control characters (toggle codes for emphasis, bold and underline,
//!     plus a reset-all code) into Markdown delimiters, recognizes a
//!     bracketed color-annotation syntax (`[text]{fg=red bg=#00ff00}`),
//!     and renders the result to HTML. It is the message-rendering half of
//!     a chat client: raw buffer text in, HTML out.
//!
//! Architecture
//!
//!     Rendering is a pipeline of small extensions dispatched by priority.
//!     A LinePreprocessor rewrites the message lines before anything else
//!     looks at them; an InlinePattern owns a compiled regex and turns each
//!     match into an inline node, which is serialized to an HTML fragment
//!     and spliced back into the text. Whatever is left after all patterns
//!     have run is ordinary Markdown and goes to comrak.
//!
//!     The crate never implements a Markdown language of its own. Markdown
//!     conversion is comrak's job and HTML escaping is html5ever's; the
//!     code here is only the buffer-specific transformations in front of
//!     them.
//!
//!     The file structure:
//!     .
//!     ├── error.rs          # RenderError
//!     ├── extension.rs      # LinePreprocessor / InlinePattern traits
//!     ├── registry.rs       # ExtensionRegistry, priority-ordered dispatch
//!     ├── extensions
//!     │   ├── codes.rs      # formatting codes → Markdown delimiters
//!     │   ├── color.rs      # color annotations → styled spans
//!     │   └── tag.rs        # simple tag patterns (underline)
//!     ├── ir
//!     │   └── nodes.rs      # inline node types
//!     ├── html.rs           # inline node → HTML fragment
//!     ├── renderer.rs       # the full pipeline over comrak
//!     └── lib.rs
//!
//! Core Algorithms
//!
//!     The interesting part is the formatting-code scanner in
//!     extensions/codes.rs. Buffer codes are toggles, not brackets, so a
//!     buffer can close an outer attribute while an inner one is still
//!     open. The scanner keeps an explicit stack of open attributes and,
//!     on an out-of-order close, unwinds the stack to the target and then
//!     reopens what it had to close on the way, which keeps the emitted
//!     Markdown properly nested. A reset code and the end of input both
//!     flush the stack, so the output is always balanced no matter what
//!     the buffer did.
//!
//!     The color matcher in extensions/color.rs resolves at most two
//!     channel=value clauses with a last-writer-wins rule per channel and
//!     builds a styled span; html.rs turns that span into a `<font>`
//!     element with data-mx-color / data-mx-bg-color attributes.
//!
//! Concurrency
//!
//!     Every transformation is a pure function over its input. Scan state
//!     (attribute stack, output buffer) lives in the call frame, so any
//!     number of callers can render different messages through the same
//!     renderer without coordination.

pub mod error;
pub mod extension;
pub mod extensions;
pub mod html;
pub mod ir;
pub mod registry;
pub mod renderer;

pub use error::RenderError;
pub use extension::{InlinePattern, LinePreprocessor};
pub use registry::ExtensionRegistry;
pub use renderer::{render_to_html, MessageRenderer, RenderOptions, RenderedMessage};
