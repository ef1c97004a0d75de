//! The board+dictionary search — the hard core. A depth-first traversal
//! that simultaneously walks the board's adjacency graph and the packed
//! DAWG, under a 64-bit used-tile bitmask, recording words into a
//! deduplicating set and aborting as soon as an upper bound is provably
//! tripped.
//!
//! Every piece of per-board state — the dice array, the counters, the
//! fail flag, the found-word set — lives on one `Evaluator` value rather
//! than as free-floating globals. Sharing across threads is then
//! explicit: one `Evaluator` per thread, each with its own state,
//! borrowing the same read-only `Dictionary`.
//!
//! The recursion alternates board traversal with DAWG traversal, using a
//! shared fail flag for early abort and explicit undo (via the bitmask)
//! rather than cloned state at each step.

use crate::board::{bit_index, check_board_size};
use crate::constraints::Constraints;
use crate::dawg::Dictionary;
use crate::error::Result;
use crate::found_words::{FoundWordSet, MAX_WORD_LEN};
use crate::score::ScoreTable;
use crate::tile::{decode, Tile};

/// Neighbour exploration order: top-left, top, top-right, left, right,
/// bottom-left, bottom, bottom-right. The only observable effect of this
/// order is which upper-bound trip a caller sees first; the found-word
/// set itself is order-invariant.
const NEIGHBOUR_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub struct Evaluator<'d> {
    dictionary: &'d Dictionary,
    width: usize,
    height: usize,
    constraints: Constraints,
    score_table: ScoreTable,

    dice: Vec<u8>,
    found: FoundWordSet,
    num_words: u32,
    score: u64,
    longest: usize,
    fail: bool,
    word_buf: [u8; MAX_WORD_LEN + 1],
}

impl<'d> Evaluator<'d> {
    pub fn new(
        dictionary: &'d Dictionary,
        width: usize,
        height: usize,
        score_table: ScoreTable,
        constraints: Constraints,
    ) -> Result<Self> {
        check_board_size(width, height)?;
        Ok(Evaluator {
            dictionary,
            width,
            height,
            constraints,
            score_table,
            dice: vec![0; width * height],
            found: FoundWordSet::new(),
            num_words: 0,
            score: 0,
            longest: 0,
            fail: false,
            word_buf: [0; MAX_WORD_LEN + 1],
        })
    }

    pub fn num_words(&self) -> u32 {
        self.num_words
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn longest(&self) -> usize {
        self.longest
    }

    /// The found words, in insertion order.
    pub fn words(&self) -> Vec<String> {
        self.found
            .snapshot()
            .into_iter()
            .map(|bytes| String::from_utf8(bytes).expect("dictionary letters are ASCII"))
            .collect()
    }

    /// Runs the full board evaluation: resets the found-word set, zeros
    /// the counters, clears the fail flag, and launches the recursive
    /// descent from every board position. Returns `true` iff every lower
    /// bound is satisfied and no upper bound was ever tripped.
    ///
    /// # Errors
    /// Returns `Error::Format` if `dice.len() != width * height`, rather
    /// than panicking on the internal copy.
    pub fn evaluate(&mut self, dice: &[u8]) -> Result<bool> {
        if dice.len() != self.width * self.height {
            return Err(crate::error::Error::Format(format!(
                "board is {}x{} ({} tiles) but {} dice codes were given",
                self.width,
                self.height,
                self.width * self.height,
                dice.len()
            )));
        }
        self.dice.copy_from_slice(dice);
        self.found.reset();
        self.num_words = 0;
        self.score = 0;
        self.longest = 0;
        self.fail = false;

        'positions: for y in 0..self.height {
            for x in 0..self.width {
                let keep_going = self.step(Dictionary::ROOT, 0, y as isize, x as isize, 0);
                if !keep_going {
                    break 'positions;
                }
            }
        }

        if self.fail {
            return Ok(false);
        }
        Ok(self.num_words >= self.constraints.min_words
            && self.score >= self.constraints.min_score
            && self.longest >= self.constraints.min_longest
            && self.longest <= self.constraints.max_longest_effective())
    }

    /// The recursive step. Returns `false` ("abort") to unwind the whole
    /// traversal once the fail flag trips; `true` ("continue") otherwise,
    /// including for plain dead ends.
    fn step(&mut self, i: u32, word_len: usize, y: isize, x: isize, used: u64) -> bool {
        if self.fail {
            return false;
        }
        if y < 0 || x < 0 || y as usize >= self.height || x as usize >= self.width {
            return true;
        }
        let (y, x) = (y as usize, x as usize);
        let mask = 1u64 << bit_index(self.width, y, x);
        if used & mask != 0 {
            return true;
        }

        let code = self.dice[bit_index(self.width, y, x)];
        let (next_i, new_word_len) = match decode(code) {
            Tile::Letter(c) => match self.find_sibling(i, c) {
                Some(node) => {
                    self.word_buf[word_len] = c;
                    (node, word_len + 1)
                }
                None => return true,
            },
            Tile::Multi(t1, t2) => {
                let first = match self.find_sibling(i, t1) {
                    Some(node) => node,
                    None => return true,
                };
                let child = self.dictionary.child(first);
                if child == 0 {
                    return true;
                }
                let second = match self.find_sibling(child, t2) {
                    Some(node) => node,
                    None => return true,
                };
                self.word_buf[word_len] = t1;
                self.word_buf[word_len + 1] = t2;
                (second, word_len + 2)
            }
        };

        let used = used | mask;

        if self.dictionary.eow(next_i) && new_word_len >= self.constraints.min_legal_len {
            if !self.accept(new_word_len) {
                return false;
            }
        }

        let child_i = self.dictionary.child(next_i);
        if child_i != 0 {
            for &(dy, dx) in &NEIGHBOUR_DELTAS {
                let ny = y as isize + dy as isize;
                let nx = x as isize + dx as isize;
                if !self.step(child_i, new_word_len, ny, nx, used) {
                    return false;
                }
            }
        }

        true
    }

    /// Linear-scans the sibling chain starting at `i` for a node whose
    /// letter is `target`.
    fn find_sibling(&self, mut i: u32, target: u8) -> Option<u32> {
        while i != 0 {
            if self.dictionary.letter(i) == target {
                return Some(i);
            }
            i = self.dictionary.sibling(i);
        }
        None
    }

    /// Attempts to record the word currently in `word_buf[..word_len]`.
    /// Returns `false` if this acceptance tripped the fail flag (caller
    /// must abort), `true` otherwise.
    fn accept(&mut self, word_len: usize) -> bool {
        let word = &self.word_buf[..word_len];
        if !self.found.insert(word) {
            return true;
        }

        self.num_words += 1;
        if self.num_words as u64 > self.constraints.max_words_effective() {
            self.fail = true;
            return false;
        }

        self.score += self.score_table.score_for(word_len) as u64;
        if self.score > self.constraints.max_score_effective() {
            self.fail = true;
            return false;
        }

        if word_len > self.longest {
            self.longest = word_len;
            if self.longest > self.constraints.max_longest_effective() {
                self.fail = true;
                return false;
            }
        }

        true
    }
}
