//! Behavioural tests for the formatter.
//!
//! Block structure is asserted directly; HTML output uses inline snapshots.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::formatting::{
    Block, RenderOptions, format_text, format_text_with, parse_blocks, render_lines,
};

fn p(s: &str) -> Block {
    Block::Paragraph(s.to_string())
}

fn ol(items: &[&str]) -> Block {
    Block::OrderedList(items.iter().map(|s| s.to_string()).collect())
}

fn ul(items: &[&str]) -> Block {
    Block::UnorderedList(items.iter().map(|s| s.to_string()).collect())
}

#[test]
fn empty_input_has_no_blocks() {
    assert!(parse_blocks("").is_empty());
    assert_eq!(format_text(""), "");
}

#[rstest]
#[case("\n")]
#[case("\n\n\n")]
#[case("   \n\t\n  ")]
#[case("\r\n\r\n")]
fn blank_only_input_has_no_blocks(#[case] raw: &str) {
    assert!(parse_blocks(raw).is_empty());
}

#[rstest]
#[case::numbered("1. a\n2. b", vec![ol(&["a", "b"])])]
#[case::all_bullet_markers("- a\n* b\n• c", vec![ul(&["a", "b", "c"])])]
#[case::kind_change("1. a\n- b", vec![ol(&["a"]), ul(&["b"])])]
#[case::bullet_then_numbered("- a\n1. b", vec![ul(&["a"]), ol(&["b"])])]
#[case::joined_paragraph("line one\nline two", vec![p("line one line two")])]
#[case::split_paragraphs("para one\n\npara two", vec![p("para one"), p("para two")])]
#[case::list_between_paragraphs(
    "intro\n1. item a\n2. item b\noutro",
    vec![p("intro"), ol(&["item a", "item b"]), p("outro")]
)]
#[case::blank_splits_same_kind_lists("- a\n\n- b", vec![ul(&["a"]), ul(&["b"])])]
#[case::leading_and_trailing_blanks("\n\n  text  \n\n", vec![p("text")])]
#[case::numbers_are_discarded("7. seven\n3. three", vec![ol(&["seven", "three"])])]
#[case::indented_items("   - a\n\t- b", vec![ul(&["a", "b"])])]
#[case::crlf_lines("first\r\nsecond\r\n\r\n1. x\r\n", vec![p("first second"), ol(&["x"])])]
fn builds_expected_blocks(#[case] raw: &str, #[case] expected: Vec<Block>) {
    assert_eq!(parse_blocks(raw), expected);
}

#[test]
fn every_item_line_maps_to_one_entry() {
    let raw = "1. a\n2. b\n3. c\n- d\n- e";
    let blocks = parse_blocks(raw);
    let items: usize = blocks
        .iter()
        .map(|b| match b {
            Block::OrderedList(items) | Block::UnorderedList(items) => items.len(),
            Block::Paragraph(_) => 0,
        })
        .sum();
    assert_eq!(items, 5);
}

#[test]
fn formatting_is_deterministic() {
    let raw = "Summary:\n1. **first**\n2. second\n\n- note\nclosing words";
    assert_eq!(format_text(raw), format_text(raw));
}

#[test]
fn adversarial_input_does_not_panic() {
    let inputs = [
        "\u{0}\u{1}\u{7f}",
        "1.\n2.\n-\n*\n•",
        "<script>alert(1)</script>",
        "\n\r\n\r\r\n",
        "99999999999999999999999999999. huge number",
        "•\u{a0}non-breaking space bullet",
    ];
    for raw in inputs {
        let _ = format_text(raw);
        let _ = render_lines(&parse_blocks(raw));
    }
}

#[test]
fn renders_list_between_paragraphs() {
    let html = format_text("intro\n1. item a\n2. item b\noutro");
    insta::assert_snapshot!(
        html,
        @r#"<p class="mb-4">intro</p><ol class="list-decimal list-inside space-y-3 my-4 pl-4"><li class="text-sm leading-relaxed">item a</li><li class="text-sm leading-relaxed">item b</li></ol><p class="mb-4">outro</p>"#
    );
}

#[test]
fn renders_bullets_after_numbers_as_separate_lists() {
    let html = format_text("1. a\n- b");
    insta::assert_snapshot!(
        html,
        @r#"<ol class="list-decimal list-inside space-y-3 my-4 pl-4"><li class="text-sm leading-relaxed">a</li></ol><ul class="list-disc list-inside space-y-3 my-4 pl-4"><li class="text-sm leading-relaxed">b</li></ul>"#
    );
}

#[test]
fn verbatim_keeps_markup_in_captured_text() {
    let html = format_text("Use <b>bold</b> & more");
    assert_eq!(html, r#"<p class="mb-4">Use <b>bold</b> & more</p>"#);
}

#[test]
fn html_escape_option_encodes_captured_text() {
    let html = format_text_with("- <em>x</em> & y", &RenderOptions::escaped());
    insta::assert_snapshot!(
        html,
        @r#"<ul class="list-disc list-inside space-y-3 my-4 pl-4"><li class="text-sm leading-relaxed">&lt;em&gt;x&lt;/em&gt; &amp; y</li></ul>"#
    );
}

#[test]
fn terminal_lines_number_by_position() {
    let blocks = parse_blocks("Steps:\n4. boil\n9. serve\n\n- hot\n- fresh");
    assert_eq!(
        render_lines(&blocks),
        vec!["Steps:", "", "1. boil", "2. serve", "", "• hot", "• fresh"]
    );
}

#[test]
fn blocks_serialize_with_kind_tags() {
    let json = serde_json::to_value(parse_blocks("hi\n- a")).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "kind": "Paragraph", "content": "hi" },
            { "kind": "UnorderedList", "content": ["a"] },
        ])
    );
}
