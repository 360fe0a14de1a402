//! Legacy single-tag extraction path.
//!
//! An older rendering mode only separates model reasoning from prose: it
//! pulls every `<think>…</think>` span out of the buffer (plus at most one
//! trailing span still missing its closer while streaming) and leaves the
//! rest as regular text. For buffers that contain nothing but `think` tags
//! this agrees with the full parser's output.

use once_cell::sync::Lazy;
use regex::Regex;

static THINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<think>(.*?)</think>").unwrap());

const OPEN_TAG: &str = "<think>";

/// Result of splitting a buffer into thinking and regular text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThinkingContent {
    /// All extracted thinking spans, trimmed and paragraph-joined.
    pub thinking: String,
    /// The buffer with every matched span removed, trimmed at the ends.
    pub regular: String,
    /// Whether a trailing `<think>` without a closer was consumed.
    pub unterminated: bool,
}

/// Extract thinking content from the full accumulated buffer.
pub fn extract_thinking(buffer: &str) -> ThinkingContent {
    let mut spans: Vec<&str> = Vec::new();
    let mut regular = String::new();
    let mut cursor = 0;

    for caps in THINK_RE.captures_iter(buffer) {
        let whole = caps.get(0).expect("capture 0 always exists");
        regular.push_str(&buffer[cursor..whole.start()]);
        let inner = caps.get(1).expect("think body capture").as_str().trim();
        if !inner.is_empty() {
            spans.push(inner);
        }
        cursor = whole.end();
    }

    // Streaming case: one last span may still be missing its closer. It runs
    // to the end of the buffer and is removed from the regular text as well.
    let rest = &buffer[cursor..];
    let mut unterminated = false;
    match rest.find(OPEN_TAG) {
        Some(rel) => {
            regular.push_str(&rest[..rel]);
            let inner = rest[rel + OPEN_TAG.len()..].trim();
            if !inner.is_empty() {
                spans.push(inner);
            }
            unterminated = true;
        }
        None => regular.push_str(rest),
    }

    ThinkingContent {
        thinking: spans.join("\n\n"),
        regular: regular.trim().to_string(),
        unterminated,
    }
}
