//! Incremental structured-content parser for Prestige chat responses.
//!
//! Model output arrives as one continuously growing text buffer: plain prose
//! interleaved with custom tags (`<prestige-write>`, `<prestige-delete>`, …)
//! that the app turns into project actions. The last tag is frequently cut
//! off mid-stream, so on every new chunk the caller re-parses the *entire*
//! accumulated buffer and swaps in the fresh piece sequence:
//!
//! ```
//! use prestige_parser::{parse_response, BlockState, ContentPiece};
//!
//! let pieces = parse_response("Hi <prestige-write path=\"x.ts\">code", true);
//! assert_eq!(pieces[0], ContentPiece::Markdown { text: "Hi".to_string() });
//! assert_eq!(pieces[1].state(), Some(BlockState::Pending));
//! ```
//!
//! Parsing is synchronous, pure, and total: no input ever fails or panics.
//! The only constructible error is a [`CatalogError`] for a misconfigured
//! tag grammar, raised when the catalog is built rather than per parse call.

pub mod catalog;
pub mod piece;
pub mod preprocess;
pub mod scanner;
pub mod state;
pub mod thinking;

mod parser;

pub use catalog::{CatalogError, TagCatalog, TagDescriptor, TagKind};
pub use parser::{parse_response, StructuredContentParser};
pub use piece::{BlockState, CommandType, ContentPiece, IntegrationProvider};
pub use state::resolve_block_state;
pub use thinking::{extract_thinking, ThinkingContent};
