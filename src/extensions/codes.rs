//! Formatting-code preprocessing (buffer control codes → Markdown)
//!
//! Chat buffers carry inline formatting as single control characters that
//! toggle an attribute on and off. This module rewrites those codes into
//! Markdown delimiters with a single left-to-right scan over the whole
//! block, keeping a stack of currently-open attributes so that spans nest
//! correctly even when the buffer closes them out of order.

use crate::extension::LinePreprocessor;

/// An inline formatting attribute toggled by a buffer control code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Emphasis,
    Bold,
    Underline,
}

/// Markdown delimiter for each attribute, indexed by tag value.
///
/// Open and close delimiters are textually identical for every entry.
/// The close-and-reopen emission in `close_attribute` depends on that; a
/// scheme with distinct open/close tokens would turn this into a table of
/// pairs and split the emission paths.
const DELIMITERS: [&str; 3] = ["*", "__", "~"];

impl Attribute {
    /// The delimiter that opens and closes this attribute's span.
    pub fn delimiter(self) -> &'static str {
        DELIMITERS[self as usize]
    }
}

/// Control code toggling emphasis.
const EMPHASIS_CODE: char = '\u{1D}';
/// Control code toggling bold.
const BOLD_CODE: char = '\u{02}';
/// Control code toggling underline.
const UNDERLINE_CODE: char = '\u{1F}';
/// Control code terminating every open attribute.
const RESET_CODE: char = '\u{0F}';

/// Convert formatting codes in a block of lines to Markdown delimiters.
///
/// The lines are joined with a single newline before scanning, so a span
/// opened on one line can close on a later one, and split back apart at the
/// end. Every character that is not one of the four control codes is copied
/// through verbatim; text without control codes comes back unchanged.
///
/// The output is always balanced: spans still open when the input ends are
/// closed in reverse-open order.
pub fn convert_codes(lines: &[String]) -> Vec<String> {
    let source = lines.join("\n");

    let mut stack: Vec<Attribute> = Vec::new();
    let mut dest = String::with_capacity(source.len());

    for character in source.chars() {
        match character {
            EMPHASIS_CODE => toggle_attribute(&mut stack, &mut dest, Attribute::Emphasis),
            BOLD_CODE => toggle_attribute(&mut stack, &mut dest, Attribute::Bold),
            UNDERLINE_CODE => toggle_attribute(&mut stack, &mut dest, Attribute::Underline),
            RESET_CODE => {
                close_open_attributes(&stack, &mut dest);
                stack.clear();
            }
            _ => dest.push(character),
        }
    }

    close_open_attributes(&stack, &mut dest);

    dest.split('\n').map(str::to_string).collect()
}

/// Open `attribute` if it is not on the stack, close it otherwise.
///
/// An attribute is open at most once, so a toggle for an absent attribute
/// is always an open and a toggle for a present one is always a close.
fn toggle_attribute(stack: &mut Vec<Attribute>, dest: &mut String, attribute: Attribute) {
    if stack.contains(&attribute) {
        close_attribute(stack, dest, attribute);
    } else {
        stack.push(attribute);
        dest.push_str(attribute.delimiter());
    }
}

/// Close `closing`, unwinding and reopening anything opened after it.
///
/// Attributes above `closing` on the stack are closed first (innermost out)
/// and then reopened in their original relative order, so they keep
/// applying to the text that follows.
fn close_attribute(stack: &mut Vec<Attribute>, dest: &mut String, closing: Attribute) {
    let mut put_back = Vec::new();

    while let Some(attribute) = stack.pop() {
        dest.push_str(attribute.delimiter());

        if attribute == closing {
            break;
        }

        put_back.push(attribute);
    }

    while let Some(attribute) = put_back.pop() {
        stack.push(attribute);
        dest.push_str(attribute.delimiter());
    }
}

/// Emit closing delimiters for every open attribute, most recent first.
fn close_open_attributes(stack: &[Attribute], dest: &mut String) {
    for attribute in stack.iter().rev() {
        dest.push_str(attribute.delimiter());
    }
}

/// Line preprocessor wrapping [`convert_codes`].
///
/// Registered ahead of every inline pattern so that pattern matching only
/// ever sees Markdown delimiters, never raw control codes.
pub struct CodePreprocessor;

impl LinePreprocessor for CodePreprocessor {
    fn name(&self) -> &str {
        "formatting-codes"
    }

    fn description(&self) -> &str {
        "buffer formatting codes to Markdown delimiters"
    }

    fn priority(&self) -> u32 {
        100
    }

    fn run(&self, lines: Vec<String>) -> Vec<String> {
        convert_codes(&lines)
    }
}
