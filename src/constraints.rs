//! Generation constraints. Each "max" field uses `-1` to mean unbounded;
//! internally we substitute a large sentinel rather than threading an
//! `Option` through the hot search path.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Constraints {
    pub min_words: u32,
    /// -1 means unbounded.
    pub max_words: i64,
    pub min_score: u64,
    /// -1 means unbounded.
    pub max_score: i64,
    pub min_longest: usize,
    /// -1 means unbounded.
    pub max_longest: i64,
    pub min_legal_len: usize,
}

impl Constraints {
    /// No lower bounds, no upper bounds: used by `analyse`.
    pub fn unconstrained() -> Self {
        Constraints {
            min_words: 0,
            max_words: -1,
            min_score: 0,
            max_score: -1,
            min_longest: 0,
            max_longest: -1,
            min_legal_len: 0,
        }
    }

    pub fn max_words_effective(&self) -> u64 {
        sentinel(self.max_words)
    }

    pub fn max_score_effective(&self) -> u64 {
        sentinel(self.max_score)
    }

    pub fn max_longest_effective(&self) -> usize {
        sentinel(self.max_longest) as usize
    }
}

fn sentinel(v: i64) -> u64 {
    if v < 0 {
        u64::MAX
    } else {
        v as u64
    }
}
