//! Tag scanner: a single forward, non-overlapping pass over the preprocessed
//! buffer.
//!
//! The scan is hand-written rather than one big regex alternation: the body
//! match must pair a close tag with the *same* name that opened it, which the
//! `regex` crate cannot express without backreferences, and a manual walk
//! keeps matching linear on adversarial input (long runs of `<` never
//! backtrack). The preprocessor counts open tags through the same
//! [`match_open_tag`] primitive, so the two sides always agree on what an
//! open tag is.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::catalog::{TagCatalog, TagDescriptor};
use crate::preprocess::ProcessedBuffer;

/// `key="value"` pairs inside an open tag. Values run to the next double
/// quote; embedded quotes cannot be escaped.
static ATTR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([a-z][a-z0-9-]*)\s*=\s*"([^"]*)""#).unwrap());

/// A matched open tag `<name ...>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OpenTag {
    /// Byte offset of the `<`.
    pub start: usize,
    /// Byte offset one past the closing `>` of the open tag.
    pub end: usize,
    /// Byte offset one past the tag name (start of any attribute source).
    pub name_end: usize,
}

/// Try to match an open tag for `name` at byte offset `start` (which must
/// point at a `<`).
///
/// The tag name must be followed by `>` or whitespace, so an incomplete name
/// still being streamed (`<prestige-writ`) never matches, and neither does a
/// longer name that merely shares a prefix. An open tag without a terminating
/// `>` anywhere in the buffer does not match at all.
pub(crate) fn match_open_tag(text: &str, start: usize, name: &str) -> Option<OpenTag> {
    let rest = text.get(start..)?;
    if !rest.starts_with('<') || !rest[1..].starts_with(name) {
        return None;
    }
    let name_end = start + 1 + name.len();
    match text[name_end..].chars().next() {
        Some('>') => Some(OpenTag {
            start,
            end: name_end + 1,
            name_end,
        }),
        Some(c) if c.is_whitespace() => {
            let gt = text[name_end..].find('>')?;
            Some(OpenTag {
                start,
                end: name_end + gt + 1,
                name_end,
            })
        }
        _ => None,
    }
}

/// All open tags for `name` in left-to-right order.
pub(crate) fn find_open_tags(text: &str, name: &str) -> Vec<OpenTag> {
    let needle = format!("<{}", name);
    let mut opens = Vec::new();
    let mut pos = 0;
    while let Some(rel) = text[pos..].find(&needle) {
        let lt = pos + rel;
        match match_open_tag(text, lt, name) {
            Some(open) => {
                opens.push(open);
                pos = open.end;
            }
            None => pos = lt + 1,
        }
    }
    opens
}

/// Number of `</name>` closers in the text.
pub(crate) fn count_closing_tags(text: &str, name: &str) -> usize {
    let closer = format!("</{}>", name);
    text.matches(&closer).count()
}

/// One matched tag occurrence, with its source span in the processed buffer.
#[derive(Debug, Clone)]
pub struct TagMatch<'a> {
    pub descriptor: &'a TagDescriptor,
    /// Byte offset of the opening `<`.
    pub start: usize,
    /// Byte offset one past the `</name>` closer.
    pub end: usize,
    /// Recognized attributes found in the open tag.
    pub attributes: HashMap<String, String>,
    /// Inner text between the open tag and the closer.
    pub body: String,
    /// Whether the closer was appended by the preprocessor rather than
    /// present in the source text.
    pub synthetic_close: bool,
}

impl TagMatch<'_> {
    /// Attribute value, defaulting to the empty string when absent.
    pub fn attr(&self, name: &str) -> &str {
        self.attributes.get(name).map(String::as_str).unwrap_or("")
    }
}

fn parse_attributes(attr_src: &str, descriptor: &TagDescriptor) -> HashMap<String, String> {
    let mut attributes = HashMap::new();
    for caps in ATTR_RE.captures_iter(attr_src) {
        let key = &caps[1];
        if descriptor.attributes.iter().any(|a| a == key) {
            // First occurrence wins if the model repeats an attribute.
            attributes
                .entry(key.to_string())
                .or_insert_with(|| caps[2].to_string());
        }
    }
    attributes
}

/// Scan the processed buffer for catalog tags, left to right.
///
/// Matches never overlap: once a tag matches, scanning resumes after its
/// closer, so tag-like text inside a body is not scanned again (tags do not
/// nest). An open tag whose closer never appears is left as literal text.
pub fn scan<'a>(processed: &ProcessedBuffer, catalog: &'a TagCatalog) -> Vec<TagMatch<'a>> {
    let text = processed.text();
    let mut matches = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let Some(rel) = text[pos..].find('<') else {
            break;
        };
        let lt = pos + rel;
        let mut matched_end = None;

        // Name charsets exclude `>` and whitespace, so at most one catalog
        // name can match at a given `<`.
        for descriptor in catalog.tags() {
            let Some(open) = match_open_tag(text, lt, &descriptor.name) else {
                continue;
            };
            let closer = format!("</{}>", descriptor.name);
            if let Some(crel) = text[open.end..].find(&closer) {
                let body_end = open.end + crel;
                let end = body_end + closer.len();
                let synthetic_close = processed.is_in_progress(&descriptor.name, lt);
                debug!(
                    "Matched <{}> at {}..{} (synthetic_close: {})",
                    descriptor.name, lt, end, synthetic_close
                );
                matches.push(TagMatch {
                    descriptor,
                    start: lt,
                    end,
                    attributes: parse_attributes(&text[open.name_end..open.end - 1], descriptor),
                    body: text[open.end..body_end].to_string(),
                    synthetic_close,
                });
                matched_end = Some(end);
            }
            break;
        }

        pos = match matched_end {
            Some(end) => end,
            None => lt + 1,
        };
    }

    matches
}
