//! Content-piece assembly and the public parse entry points.
//!
//! Every call re-runs the whole accumulated buffer through the
//! preprocess → scan → assemble pipeline and returns a fresh piece sequence.
//! The caller is expected to throw the previous sequence away; nothing is
//! retained between calls.

use tracing::debug;

use crate::catalog::{TagCatalog, TagKind};
use crate::piece::{CommandType, ContentPiece, IntegrationProvider};
use crate::preprocess::close_unclosed_tags;
use crate::scanner::{scan, TagMatch};
use crate::state::resolve_block_state;

/// Structured-content parser for one fixed tag catalog.
#[derive(Debug, Clone)]
pub struct StructuredContentParser {
    catalog: TagCatalog,
}

impl StructuredContentParser {
    pub fn new(catalog: TagCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &TagCatalog {
        &self.catalog
    }

    /// Parse the full accumulated buffer into an ordered piece sequence.
    ///
    /// Pure and total: any string returns a sequence, malformed or unknown
    /// tags stay literal markdown text, and repeated calls on the same input
    /// give the same output. `is_streaming` only affects the lifecycle state
    /// of blocks whose closer the preprocessor had to fabricate.
    pub fn parse(&self, buffer: &str, is_streaming: bool) -> Vec<ContentPiece> {
        let processed = close_unclosed_tags(buffer, &self.catalog);
        let matches = scan(&processed, &self.catalog);
        debug!(
            "Parsed buffer of {} bytes into {} tag match(es) (is_streaming: {})",
            buffer.len(),
            matches.len(),
            is_streaming
        );
        assemble(processed.text(), &matches, is_streaming)
    }
}

/// Parse with the built-in Prestige catalog.
pub fn parse_response(buffer: &str, is_streaming: bool) -> Vec<ContentPiece> {
    StructuredContentParser::new(TagCatalog::prestige()).parse(buffer, is_streaming)
}

/// Interleave markdown gaps with tag pieces in source order. The scanner
/// already guarantees ordering; the only work here is gap extraction and
/// dropping whitespace-only gaps.
fn assemble(text: &str, matches: &[TagMatch<'_>], is_streaming: bool) -> Vec<ContentPiece> {
    let mut pieces = Vec::new();
    let mut cursor = 0;

    for tag_match in matches {
        push_markdown(&mut pieces, &text[cursor..tag_match.start]);
        pieces.push(build_piece(tag_match, is_streaming));
        cursor = tag_match.end;
    }
    push_markdown(&mut pieces, &text[cursor..]);

    pieces
}

fn push_markdown(pieces: &mut Vec<ContentPiece>, gap: &str) {
    let trimmed = gap.trim();
    if !trimmed.is_empty() {
        pieces.push(ContentPiece::Markdown {
            text: trimmed.to_string(),
        });
    }
}

/// Split a list-valued attribute (`packages`, `files`, `patterns`) on
/// whitespace or commas.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn opt_string(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

fn opt_list(raw: &str) -> Option<Vec<String>> {
    let entries = split_list(raw);
    if entries.is_empty() {
        None
    } else {
        Some(entries)
    }
}

fn build_piece(tag_match: &TagMatch<'_>, is_streaming: bool) -> ContentPiece {
    let state = resolve_block_state(is_streaming, tag_match.synthetic_close);
    let content = if tag_match.descriptor.has_body {
        tag_match.body.clone()
    } else {
        String::new()
    };

    match tag_match.descriptor.kind {
        TagKind::Think => ContentPiece::Thinking {
            text: content.trim().to_string(),
            state,
        },
        TagKind::Write => ContentPiece::FileWrite {
            path: tag_match.attr("path").to_string(),
            description: tag_match.attr("description").to_string(),
            content,
            state,
        },
        TagKind::Rename => ContentPiece::Rename {
            from: tag_match.attr("from").to_string(),
            to: tag_match.attr("to").to_string(),
            state,
        },
        TagKind::Delete => ContentPiece::Delete {
            path: tag_match.attr("path").to_string(),
            state,
        },
        TagKind::AddDependency => ContentPiece::AddDependency {
            packages: split_list(tag_match.attr("packages")),
            state,
        },
        TagKind::Command => ContentPiece::Command {
            command_type: CommandType::parse(tag_match.attr("type")),
            state,
        },
        TagKind::AddIntegration => ContentPiece::AddIntegration {
            provider: IntegrationProvider::parse(tag_match.attr("provider")),
            content,
            state,
        },
        TagKind::CodebaseContext => ContentPiece::CodebaseContext {
            context_type: tag_match.attr("type").to_string(),
            template_id: opt_string(tag_match.attr("template-id")),
            files: opt_list(tag_match.attr("files")),
            patterns: opt_list(tag_match.attr("patterns")),
            query: opt_string(tag_match.attr("query")),
            keep: opt_string(tag_match.attr("keep")).map(|v| v.eq_ignore_ascii_case("true")),
            content,
            state,
        },
        // Never synthetically closed, so it only exists once genuinely
        // complete and carries no state.
        TagKind::ChatSummary => ContentPiece::ChatSummary {
            content: content.trim().to_string(),
        },
        TagKind::PromptDbConnect => ContentPiece::PromptDbConnect { content, state },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_on_whitespace_and_commas() {
        assert_eq!(split_list("react react-dom"), vec!["react", "react-dom"]);
        assert_eq!(split_list("a, b,c"), vec!["a", "b", "c"]);
        assert_eq!(split_list("  "), Vec::<String>::new());
    }

    #[test]
    fn test_empty_attr_maps_to_none() {
        assert_eq!(opt_string(""), None);
        assert_eq!(opt_string("x"), Some("x".to_string()));
        assert_eq!(opt_list(""), None);
    }
}
