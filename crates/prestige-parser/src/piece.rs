//! Typed output of the structured-content parser.
//!
//! A parsed response is an ordered sequence of [`ContentPiece`] values: plain
//! markdown text interleaved with the structured directives the model emitted.
//! Every parse call produces a fresh, disposable sequence; pieces are never
//! mutated or reused across calls.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a structured block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockState {
    /// The block's closing tag has not arrived yet and generation is ongoing.
    Pending,
    /// The block was genuinely closed in the source text.
    Finished,
    /// Generation ended while the block was still open.
    Aborted,
}

/// Action requested by a `<prestige-command>` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    Rebuild,
    Restart,
    Refresh,
    /// Any value outside the recognized set, including a missing attribute.
    Unknown,
}

impl CommandType {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "rebuild" => CommandType::Rebuild,
            "restart" => CommandType::Restart,
            "refresh" => CommandType::Refresh,
            _ => CommandType::Unknown,
        }
    }
}

/// Integration target of a `<prestige-add-integration>` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationProvider {
    Github,
    Supabase,
    Vercel,
    /// Any value outside the recognized set, including a missing attribute.
    Unknown,
}

impl IntegrationProvider {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "github" => IntegrationProvider::Github,
            "supabase" => IntegrationProvider::Supabase,
            "vercel" => IntegrationProvider::Vercel,
            _ => IntegrationProvider::Unknown,
        }
    }
}

/// One atomic unit of parser output.
///
/// The serde representation is internally tagged so the renderer boundary
/// sees a stable `{"type": "...", ...}` JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ContentPiece {
    /// Plain prose between structured tags. Never empty or whitespace-only.
    Markdown { text: String },
    /// Model reasoning from a `<think>` block.
    Thinking { text: String, state: BlockState },
    /// Write (or overwrite) a file.
    FileWrite {
        path: String,
        description: String,
        content: String,
        state: BlockState,
    },
    /// Rename a file.
    Rename {
        from: String,
        to: String,
        state: BlockState,
    },
    /// Delete a file.
    Delete { path: String, state: BlockState },
    /// Install one or more packages.
    AddDependency {
        packages: Vec<String>,
        state: BlockState,
    },
    /// Run a predefined project command.
    Command {
        command_type: CommandType,
        state: BlockState,
    },
    /// Connect a third-party integration.
    AddIntegration {
        provider: IntegrationProvider,
        content: String,
        state: BlockState,
    },
    /// Codebase context request emitted by the model.
    CodebaseContext {
        context_type: String,
        template_id: Option<String>,
        files: Option<Vec<String>>,
        patterns: Option<Vec<String>>,
        query: Option<String>,
        keep: Option<bool>,
        content: String,
        state: BlockState,
    },
    /// Prompt the user to connect a database.
    PromptDbConnect { content: String, state: BlockState },
    /// Conversation summary. Only emitted once its closing tag is genuinely
    /// present, so it carries no lifecycle state.
    ChatSummary { content: String },
}

impl ContentPiece {
    /// Lifecycle state of this piece, if the variant carries one.
    pub fn state(&self) -> Option<BlockState> {
        match self {
            ContentPiece::Markdown { .. } | ContentPiece::ChatSummary { .. } => None,
            ContentPiece::Thinking { state, .. }
            | ContentPiece::FileWrite { state, .. }
            | ContentPiece::Rename { state, .. }
            | ContentPiece::Delete { state, .. }
            | ContentPiece::AddDependency { state, .. }
            | ContentPiece::Command { state, .. }
            | ContentPiece::AddIntegration { state, .. }
            | ContentPiece::CodebaseContext { state, .. }
            | ContentPiece::PromptDbConnect { state, .. } => Some(*state),
        }
    }

    /// True for piece kinds a dispatcher acts on once they reach
    /// [`BlockState::Finished`].
    pub fn is_actionable(&self) -> bool {
        matches!(
            self,
            ContentPiece::FileWrite { .. }
                | ContentPiece::Rename { .. }
                | ContentPiece::Delete { .. }
                | ContentPiece::AddDependency { .. }
                | ContentPiece::Command { .. }
                | ContentPiece::AddIntegration { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_type_parse() {
        assert_eq!(CommandType::parse("rebuild"), CommandType::Rebuild);
        assert_eq!(CommandType::parse("restart"), CommandType::Restart);
        assert_eq!(CommandType::parse("refresh"), CommandType::Refresh);
        assert_eq!(CommandType::parse(""), CommandType::Unknown);
        assert_eq!(CommandType::parse("reboot"), CommandType::Unknown);
    }

    #[test]
    fn test_integration_provider_parse() {
        assert_eq!(IntegrationProvider::parse("github"), IntegrationProvider::Github);
        assert_eq!(IntegrationProvider::parse("supabase"), IntegrationProvider::Supabase);
        assert_eq!(IntegrationProvider::parse("vercel"), IntegrationProvider::Vercel);
        assert_eq!(IntegrationProvider::parse("gitlab"), IntegrationProvider::Unknown);
    }

    #[test]
    fn test_markdown_and_summary_carry_no_state() {
        let md = ContentPiece::Markdown {
            text: "hello".to_string(),
        };
        assert_eq!(md.state(), None);
        let summary = ContentPiece::ChatSummary {
            content: "done".to_string(),
        };
        assert_eq!(summary.state(), None);
    }

    #[test]
    fn test_actionable_pieces() {
        let delete = ContentPiece::Delete {
            path: "a.ts".to_string(),
            state: BlockState::Finished,
        };
        assert!(delete.is_actionable());
        let thinking = ContentPiece::Thinking {
            text: "hmm".to_string(),
            state: BlockState::Finished,
        };
        assert!(!thinking.is_actionable());
    }
}
