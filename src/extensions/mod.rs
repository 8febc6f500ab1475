//! Built-in pipeline extensions
//!
//! One module per extension:
//! - `codes`: the formatting-code preprocessor (control codes → delimiters)
//! - `color`: the bracketed color-annotation inline pattern
//! - `tag`: the generic single-tag inline pattern, shipped for underline

pub mod codes;
pub mod color;
pub mod tag;
