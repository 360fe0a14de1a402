//! Canonical block-state resolution.

use crate::piece::BlockState;

/// Map a block's closing evidence to its lifecycle state.
///
/// This is the single rule used everywhere:
/// - a genuine closer in the source text means the block is finished,
///   regardless of whether the stream is still running;
/// - a synthetic closer while streaming means the block is still being
///   generated;
/// - a synthetic closer after the stream ended means generation stopped with
///   the block still open.
pub fn resolve_block_state(is_streaming: bool, synthetic_close: bool) -> BlockState {
    match (synthetic_close, is_streaming) {
        (false, _) => BlockState::Finished,
        (true, true) => BlockState::Pending,
        (true, false) => BlockState::Aborted,
    }
}
