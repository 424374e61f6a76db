use pretty_assertions::assert_eq;
use triorelevan_engine::formatting::{Block, format_text, parse_blocks, render_lines};

#[test]
fn fixture_rag_answer() {
    assert_fixture("rag_answer");
}

#[test]
fn fixture_wrapped_paragraphs() {
    assert_fixture("wrapped_paragraphs");
}

#[test]
fn fixture_kind_switches() {
    assert_fixture("kind_switches");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let raw = std::fs::read_to_string(format!("{fixtures_dir}/{name}.txt")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap();

    assert_eq!(format_text(&raw), expected);
}

/// Text and list content survive the round trip through blocks.
#[test]
fn no_content_is_lost() {
    let raw = "alpha\nbeta\n\n1. gamma\n- delta";
    let words: Vec<String> = render_lines(&parse_blocks(raw))
        .iter()
        .flat_map(|l| l.split_whitespace().map(str::to_string).collect::<Vec<_>>())
        .collect();
    for expected in ["alpha", "beta", "gamma", "delta"] {
        assert!(words.iter().any(|w| w == expected), "missing {expected}");
    }
}

#[test]
fn answer_from_backend_is_formatted() {
    let answer: triorelevan_engine::RagAnswer = serde_json::from_str(
        r#"{ "answer": "Steps:\n1. Rest\n2. Hydrate", "confidence": "low" }"#,
    )
    .unwrap();

    assert_eq!(
        parse_blocks(&answer.answer),
        vec![
            Block::Paragraph("Steps:".into()),
            Block::OrderedList(vec!["Rest".into(), "Hydrate".into()]),
        ]
    );
}
