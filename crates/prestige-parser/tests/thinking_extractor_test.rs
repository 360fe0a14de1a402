//! Agreement between the legacy thinking extractor and the full parser.
//!
//! The extractor is a single-tag fast path used by an older rendering mode;
//! for buffers that contain only `<think>` tags and prose it must split the
//! text the same way the general parser does.

use prestige_parser::{extract_thinking, parse_response, BlockState, ContentPiece};

fn thinking_texts(pieces: &[ContentPiece]) -> Vec<String> {
    pieces
        .iter()
        .filter_map(|p| match p {
            ContentPiece::Thinking { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

fn markdown_words(pieces: &[ContentPiece]) -> Vec<String> {
    pieces
        .iter()
        .filter_map(|p| match p {
            ContentPiece::Markdown { text } => Some(text.clone()),
            _ => None,
        })
        .flat_map(|t| t.split_whitespace().map(str::to_string).collect::<Vec<_>>())
        .collect()
}

fn assert_agreement(buffer: &str, is_streaming: bool) {
    let pieces = parse_response(buffer, is_streaming);
    let extracted = extract_thinking(buffer);

    assert_eq!(
        extracted.thinking,
        thinking_texts(&pieces).join("\n\n"),
        "thinking text diverges for {:?}",
        buffer
    );
    let regular_words: Vec<String> = extracted
        .regular
        .split_whitespace()
        .map(str::to_string)
        .collect();
    assert_eq!(
        regular_words,
        markdown_words(&pieces),
        "regular text diverges for {:?}",
        buffer
    );
}

#[test]
fn test_agreement_on_complete_spans() {
    assert_agreement("<think>B</think>rest", false);
    assert_agreement("A <think>B</think> C", false);
    assert_agreement("<think>one</think>mid<think>two</think>", false);
    assert_agreement("no tags at all", false);
}

#[test]
fn test_agreement_on_trailing_open_span() {
    assert_agreement("intro <think>partial", true);
    assert_agreement("<think>done</think>text<think>more", true);
}

#[test]
fn test_streaming_trailing_span_exact() {
    let pieces = parse_response("intro <think>partial", true);
    assert_eq!(
        pieces,
        vec![
            ContentPiece::Markdown {
                text: "intro".to_string(),
            },
            ContentPiece::Thinking {
                text: "partial".to_string(),
                state: BlockState::Pending,
            },
        ]
    );

    let extracted = extract_thinking("intro <think>partial");
    assert_eq!(extracted.thinking, "partial");
    assert_eq!(extracted.regular, "intro");
    assert!(extracted.unterminated);
}

#[test]
fn test_extractor_ignores_other_catalog_tags() {
    // The legacy path only knows about <think>; other tags stay in the
    // regular text verbatim.
    let buffer = "<think>plan</think><prestige-delete path=\"a.ts\"></prestige-delete>";
    let extracted = extract_thinking(buffer);
    assert_eq!(extracted.thinking, "plan");
    assert!(extracted.regular.contains("prestige-delete"));
}
