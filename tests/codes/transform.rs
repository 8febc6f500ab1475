//! Scenario tests for the formatting-code preprocessor.
//!
//! These exercise the preprocessor through its public interface on
//! multi-line blocks, the way the renderer drives it.

use chatmark::extension::LinePreprocessor;
use chatmark::extensions::codes::CodePreprocessor;
use insta::assert_snapshot;

fn run(lines: &[&str]) -> Vec<String> {
    let lines: Vec<String> = lines.iter().map(|line| line.to_string()).collect();
    CodePreprocessor.run(lines)
}

#[test]
fn test_line_count_is_preserved() {
    let output = run(&["one", "two", "three"]);
    assert_eq!(output.len(), 3);
}

#[test]
fn test_span_closed_on_a_later_line() {
    let output = run(&["\u{02}first", "second\u{02} rest"]);
    assert_eq!(output, vec!["__first", "second__ rest"]);
}

#[test]
fn test_span_left_open_is_closed_on_last_line() {
    let output = run(&["\u{1D}first", "second"]);
    assert_eq!(output, vec!["*first", "second*"]);
}

#[test]
fn test_reset_mid_block() {
    let output = run(&["\u{02}a\u{1F}b", "c\u{0F}d"]);
    // Bold opens, underline nests inside it, reset closes underline then
    // bold on the second line.
    assert_eq!(output, vec!["__a~b", "c~__d"]);
}

#[test]
fn test_markup_only_block_is_unchanged() {
    let lines = &["*em* and __bold__", "~under~ plain"];
    let output = run(lines);
    assert_eq!(output, vec!["*em* and __bold__", "~under~ plain"]);
}

#[test]
fn test_kitchen_sink_block() {
    let output = run(&["\u{02}status\u{02}: ok", "\u{1F}details\u{1D}follow\u{0F} end"]);
    assert_snapshot!(output.join("\n"), @r"
    __status__: ok
    ~details*follow*~ end
    ");
}
