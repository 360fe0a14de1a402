//! Console rendering of parsed pieces.

use anyhow::Result;
use prestige_parser::{BlockState, CommandType, ContentPiece, IntegrationProvider, ThinkingContent};

const SUMMARY_LEN: usize = 60;

pub fn print_pieces(pieces: &[ContentPiece]) {
    for piece in pieces {
        println!("{}", describe(piece));
    }
}

pub fn print_json(pieces: &[ContentPiece]) -> Result<()> {
    for piece in pieces {
        println!("{}", serde_json::to_string(piece)?);
    }
    Ok(())
}

pub fn print_thinking(extracted: &ThinkingContent) {
    if !extracted.thinking.is_empty() {
        println!("--- thinking{} ---", if extracted.unterminated { " (open)" } else { "" });
        println!("{}", extracted.thinking);
    }
    println!("--- regular ---");
    println!("{}", extracted.regular);
}

/// First line of `text`, truncated for one-line display.
fn summarize(text: &str) -> String {
    let line = text.lines().next().unwrap_or("");
    let mut out: String = line.chars().take(SUMMARY_LEN).collect();
    if line.chars().count() > SUMMARY_LEN || text.lines().count() > 1 {
        out.push_str("...");
    }
    out
}

fn state_label(state: BlockState) -> &'static str {
    match state {
        BlockState::Pending => "pending",
        BlockState::Finished => "finished",
        BlockState::Aborted => "aborted",
    }
}

fn command_label(command_type: CommandType) -> &'static str {
    match command_type {
        CommandType::Rebuild => "rebuild",
        CommandType::Restart => "restart",
        CommandType::Refresh => "refresh",
        CommandType::Unknown => "unknown",
    }
}

fn provider_label(provider: IntegrationProvider) -> &'static str {
    match provider {
        IntegrationProvider::Github => "github",
        IntegrationProvider::Supabase => "supabase",
        IntegrationProvider::Vercel => "vercel",
        IntegrationProvider::Unknown => "unknown",
    }
}

fn describe(piece: &ContentPiece) -> String {
    match piece {
        ContentPiece::Markdown { text } => format!("[markdown] {}", summarize(text)),
        ContentPiece::Thinking { text, state } => {
            format!("[thinking {}] {}", state_label(*state), summarize(text))
        }
        ContentPiece::FileWrite {
            path,
            description,
            content,
            state,
        } => format!(
            "[write {} {}] {} ({} bytes)",
            path,
            state_label(*state),
            summarize(description),
            content.len()
        ),
        ContentPiece::Rename { from, to, state } => {
            format!("[rename {} -> {} {}]", from, to, state_label(*state))
        }
        ContentPiece::Delete { path, state } => {
            format!("[delete {} {}]", path, state_label(*state))
        }
        ContentPiece::AddDependency { packages, state } => format!(
            "[add-dependency {}] {}",
            state_label(*state),
            packages.join(", ")
        ),
        ContentPiece::Command {
            command_type,
            state,
        } => format!(
            "[command {} {}]",
            command_label(*command_type),
            state_label(*state)
        ),
        ContentPiece::AddIntegration {
            provider,
            content,
            state,
        } => format!(
            "[add-integration {} {}] {}",
            provider_label(*provider),
            state_label(*state),
            summarize(content)
        ),
        ContentPiece::CodebaseContext {
            context_type,
            state,
            ..
        } => format!(
            "[codebase-context {} {}]",
            context_type,
            state_label(*state)
        ),
        ContentPiece::PromptDbConnect { state, .. } => {
            format!("[prompt-db-connect {}]", state_label(*state))
        }
        ContentPiece::ChatSummary { content } => {
            format!("[chat-summary] {}", summarize(content))
        }
    }
}
