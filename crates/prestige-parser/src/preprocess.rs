//! Unclosed-tag preprocessor.
//!
//! During streaming the last tag in the buffer is often cut off before its
//! closer arrives. For each catalog tag independently, this pass counts opens
//! and closers left to right; when opens outnumber closers it appends the
//! missing closers to the end of the buffer and records which open
//! occurrences were closed synthetically, so the scanner can report them as
//! in-progress rather than genuinely finished.
//!
//! Excess closers (a closer with no earlier open) are left untouched; they
//! simply fail to pair during scanning and surface as literal text.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::catalog::TagCatalog;
use crate::scanner::{count_closing_tags, find_open_tags};

/// Buffer with synthetic closers appended, plus the open-tag offsets that
/// were closed synthetically, keyed by tag name.
#[derive(Debug, Clone)]
pub struct ProcessedBuffer {
    text: String,
    in_progress: HashMap<String, HashSet<usize>>,
}

impl ProcessedBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the open tag for `name` starting at byte offset `start` was
    /// closed synthetically.
    pub fn is_in_progress(&self, name: &str, start: usize) -> bool {
        self.in_progress
            .get(name)
            .is_some_and(|offsets| offsets.contains(&start))
    }

    /// True if any tag needed a synthetic closer.
    pub fn has_unclosed_tags(&self) -> bool {
        !self.in_progress.is_empty()
    }
}

/// Synthetically close every dangling open tag in `raw`.
///
/// Opens are matched with the same primitive the scanner uses, so a tag name
/// that is itself still incomplete (`<prestige-writ`) is not counted and not
/// closed. A tag whose descriptor opts out of auto-closing (the chat summary)
/// is skipped entirely: its dangling opens stay unpaired.
///
/// A synthetically closed tag spans from its open tag to the end of the
/// buffer. When two different tag types are dangling at once, each gets its
/// own closer appended; the scanner's forward pass resolves the overlap by
/// letting the earlier open swallow the later one.
pub fn close_unclosed_tags(raw: &str, catalog: &TagCatalog) -> ProcessedBuffer {
    let mut text = raw.to_string();
    let mut in_progress: HashMap<String, HashSet<usize>> = HashMap::new();

    for tag in catalog.tags() {
        if !tag.auto_close {
            continue;
        }
        let opens = find_open_tags(raw, &tag.name);
        let closers = count_closing_tags(raw, &tag.name);
        if opens.len() <= closers {
            continue;
        }

        let missing = opens.len() - closers;
        debug!("Appending {} synthetic </{}> closer(s)", missing, tag.name);

        // The last `missing` opens are the ones left dangling: every earlier
        // open pairs with a real closer in the forward scan.
        let offsets = in_progress.entry(tag.name.clone()).or_default();
        for open in &opens[opens.len() - missing..] {
            offsets.insert(open.start);
        }
        for _ in 0..missing {
            text.push_str("</");
            text.push_str(&tag.name);
            text.push('>');
        }
    }

    ProcessedBuffer { text, in_progress }
}
