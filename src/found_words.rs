//! Bounded deduplicating store of found words.
//!
//! An open-addressed hash table with linear probing, keyed by an inline
//! byte string (no per-word heap allocation in the inner loop). A
//! parallel vector of occupied slot indices gives `reset()` its required
//! O(used) cost without scanning the whole table. Hashing uses
//! `hashbrown`'s ahash-backed `DefaultHashBuilder` for speed; the probing
//! and duplicate handling are hand-rolled so that `reset()` stays
//! O(used) instead of the O(capacity) a generic `HashSet::clear()` would
//! cost.

use hashbrown::hash_map::DefaultHashBuilder;
use std::hash::{BuildHasher, Hash, Hasher};

/// Longest word the dictionary can contain; no word this long can ever
/// be produced by the search.
pub const MAX_WORD_LEN: usize = 16;

/// A prime capacity comfortably above the few-thousand-word peak
/// occupancy a single board ever produces, keeping the load factor well
/// under 0.5.
const CAPACITY: usize = 16_381;

#[derive(Clone, Copy)]
struct InlineWord {
    bytes: [u8; MAX_WORD_LEN],
    len: u8,
}

impl InlineWord {
    fn new(word: &[u8]) -> Self {
        debug_assert!(word.len() <= MAX_WORD_LEN);
        let mut bytes = [0u8; MAX_WORD_LEN];
        bytes[..word.len()].copy_from_slice(word);
        InlineWord {
            bytes,
            len: word.len() as u8,
        }
    }

    fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }
}

pub struct FoundWordSet {
    slots: Vec<Option<InlineWord>>,
    used_indices: Vec<usize>,
    hash_builder: DefaultHashBuilder,
}

impl FoundWordSet {
    pub fn new() -> Self {
        FoundWordSet {
            slots: vec![None; CAPACITY],
            used_indices: Vec::new(),
            hash_builder: DefaultHashBuilder::default(),
        }
    }

    fn hash_of(&self, word: &[u8]) -> usize {
        let mut hasher = self.hash_builder.build_hasher();
        word.hash(&mut hasher);
        (hasher.finish() % CAPACITY as u64) as usize
    }

    /// Inserts `word`, returning `true` iff it was novel. Probes
    /// linearly on collision; tolerates arbitrary hash collisions.
    pub fn insert(&mut self, word: &[u8]) -> bool {
        let start = self.hash_of(word);
        let mut idx = start;
        loop {
            match &self.slots[idx] {
                None => {
                    self.slots[idx] = Some(InlineWord::new(word));
                    self.used_indices.push(idx);
                    return true;
                }
                Some(existing) if existing.as_slice() == word => return false,
                Some(_) => {
                    idx = (idx + 1) % CAPACITY;
                    debug_assert!(
                        idx != start,
                        "found-word table is full; CAPACITY is too small for this board"
                    );
                }
            }
        }
    }

    /// Resets the set to empty in O(distinct previously inserted words).
    pub fn reset(&mut self) {
        for idx in self.used_indices.drain(..) {
            self.slots[idx] = None;
        }
    }

    /// The set's contents, in insertion order (deterministic given
    /// insertion order).
    pub fn snapshot(&self) -> Vec<Vec<u8>> {
        self.used_indices
            .iter()
            .map(|&idx| self.slots[idx].unwrap().as_slice().to_vec())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.used_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used_indices.is_empty()
    }
}

impl Default for FoundWordSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_reports_novelty() {
        let mut set = FoundWordSet::new();
        assert!(set.insert(b"CAT"));
        assert!(!set.insert(b"CAT"));
        assert!(set.insert(b"DOG"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn reset_empties_the_set_and_allows_reinsertion() {
        let mut set = FoundWordSet::new();
        set.insert(b"CAT");
        set.insert(b"DOG");
        set.reset();
        assert_eq!(set.len(), 0);
        assert!(set.insert(b"CAT"));
    }

    #[test]
    fn snapshot_matches_insertion_order() {
        let mut set = FoundWordSet::new();
        set.insert(b"ONE");
        set.insert(b"TWO");
        set.insert(b"THREE");
        let snap = set.snapshot();
        assert_eq!(snap, vec![b"ONE".to_vec(), b"TWO".to_vec(), b"THREE".to_vec()]);
    }

    #[test]
    fn snapshot_contains_no_duplicates() {
        let mut set = FoundWordSet::new();
        for _ in 0..5 {
            set.insert(b"REPEAT");
        }
        assert_eq!(set.snapshot().len(), 1);
    }
}
