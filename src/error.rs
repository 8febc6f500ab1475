//! Error types for rendering operations

use std::fmt;

/// Errors that can occur while rendering buffer text
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Extension not found in registry
    ExtensionNotFound(String),
    /// Error while serializing inline nodes to HTML
    SerializationError(String),
    /// Operation is intentionally not implemented
    NotSupported(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::ExtensionNotFound(name) => write!(f, "Extension '{name}' not found"),
            RenderError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            RenderError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}
