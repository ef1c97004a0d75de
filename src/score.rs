//! Score table: a length-indexed lookup with clamp-to-last-entry for
//! words longer than the table covers.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreTable(Vec<u32>);

impl ScoreTable {
    /// Builds a score table from an explicit length->points sequence.
    /// Entries at index 0/1/2 are conventionally 0, but this is not
    /// enforced here; callers that pass a table whose early entries are
    /// nonzero simply get that behavior.
    pub fn new(entries: Vec<u32>) -> Self {
        ScoreTable(entries)
    }

    /// Reads a score table from a JSON array of non-negative integers,
    /// indexed by word length.
    pub fn load(path: &Path) -> Result<ScoreTable> {
        let text = fs::read_to_string(path)?;
        let entries: Vec<u32> = serde_json::from_str(&text)
            .map_err(|e| crate::error::Error::Format(format!("score table: {e}")))?;
        Ok(ScoreTable(entries))
    }

    /// The standard table used by the well-known worked examples for this
    /// game's scoring.
    pub fn standard() -> Self {
        ScoreTable(vec![0, 0, 0, 1, 1, 2, 3, 5, 11, 11, 11, 11, 11, 11, 11, 11, 11])
    }

    /// Score for a word of the given length. Lengths past the table's
    /// end use the last entry; an empty table scores everything 0.
    pub fn score_for(&self, len: usize) -> u32 {
        if self.0.is_empty() {
            return 0;
        }
        let idx = len.min(self.0.len() - 1);
        self.0[idx]
    }
}
