//! End-to-end rendering tests (buffer text → HTML).
//!
//! These drive the full pipeline: formatting-code preprocessing, inline
//! pattern splicing, and the comrak conversion behind them.

use chatmark::renderer::{render_to_html, MessageRenderer};
use chatmark::RenderError;
use insta::assert_snapshot;

#[test]
fn test_plain_message() {
    let html = render_to_html("hello world").unwrap();
    assert_eq!(html, "<p>hello world</p>\n");
}

#[test]
fn test_bold_and_emphasis_codes() {
    let html = render_to_html("say \u{02}loud\u{02} and \u{1D}soft\u{1D}").unwrap();

    assert!(html.contains("<strong>loud</strong>"));
    assert!(html.contains("<em>soft</em>"));
}

#[test]
fn test_underline_span() {
    let html = render_to_html("\u{1F}down under\u{1F} and more").unwrap();
    assert!(html.contains("<u>down under</u>"));
}

#[test]
fn test_color_annotation_single_channel() {
    let html = render_to_html("an [alert]{fg=red} here").unwrap();
    assert!(html.contains("<font data-mx-color=\"red\">alert</font>"));
}

#[test]
fn test_color_annotation_both_channels() {
    let html = render_to_html("[alert]{fg=red bg=#000000}").unwrap();
    assert!(
        html.contains("<font data-mx-color=\"red\" data-mx-bg-color=\"#000000\">alert</font>")
    );
}

#[test]
fn test_color_annotation_same_channel_twice() {
    let html = render_to_html("[hi]{fg=blue fg=green}").unwrap();

    assert!(html.contains("<font data-mx-color=\"green\">hi</font>"));
    assert!(!html.contains("blue"));
}

#[test]
fn test_malformed_color_annotation_is_left_alone() {
    let html = render_to_html("not a color: [hi]{fg=#123}").unwrap();
    assert!(!html.contains("<font"));
}

#[test]
fn test_unclosed_code_is_closed_before_markdown() {
    let html = render_to_html("\u{02}loud").unwrap();
    assert!(html.contains("<strong>loud</strong>"));
}

#[test]
fn test_reset_terminates_all_formatting() {
    let html = render_to_html("\u{02}a\u{1D}b\u{0F} plain").unwrap();

    assert!(html.contains("<strong>a<em>b</em></strong>"));
    assert!(html.contains("plain"));
}

#[test]
fn test_codes_spanning_lines() {
    let html = render_to_html("\u{02}one\ntwo\u{02}").unwrap();
    assert!(html.contains("<strong>"));
}

#[test]
fn test_markdown_still_works() {
    let html = render_to_html("# heading\n\nbody").unwrap();

    assert!(html.contains("<h1>heading</h1>"));
    assert!(html.contains("<p>body</p>"));
}

#[test]
fn test_to_buffer_codes_not_supported() {
    let rendered = MessageRenderer::new().render("hello").unwrap();

    assert!(matches!(
        rendered.to_buffer_codes(),
        Err(RenderError::NotSupported(_))
    ));
}

#[test]
fn test_kitchen_sink_message() {
    let html = render_to_html(
        "\u{02}status\u{02}: [ok]{fg=green} and \u{1F}details\u{1F} follow\u{0F}",
    )
    .unwrap();

    assert_snapshot!(html.trim_end(), @r#"<p><strong>status</strong>: <font data-mx-color="green">ok</font> and <u>details</u> follow</p>"#);
}
