//! Dice and dice sets: an ordered collection of dice that gets shuffled
//! across board positions and rolled once per generation attempt.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::tile::is_valid_code;

/// A single die: exactly six faces drawn from the tile-code alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Die(pub [u8; 6]);

impl Die {
    /// Parses a die from its 6-character face string. Rejects anything
    /// not exactly 6 bytes, or containing a byte outside
    /// `'A'..='Z'`/`'0'..='5'`.
    pub fn parse(faces: &str) -> Result<Die> {
        let bytes = faces.as_bytes();
        if bytes.len() != 6 || !bytes.iter().all(|&b| is_valid_code(b)) {
            return Err(Error::BadDie {
                die: faces.to_string(),
            });
        }
        let mut arr = [0u8; 6];
        arr.copy_from_slice(bytes);
        Ok(Die(arr))
    }

    fn face(&self, idx: usize) -> u8 {
        self.0[idx]
    }
}

/// An ordered collection of dice; the order is mutated (shuffled) by
/// [`roll`] across calls, same physical dice, just reordered.
#[derive(Debug, Clone)]
pub struct DiceSet {
    dice: Vec<Die>,
}

impl DiceSet {
    pub fn new(dice: Vec<Die>) -> Self {
        DiceSet { dice }
    }

    /// Parses a dice set from its face-string representation, rejecting
    /// any die with `BadDie`.
    pub fn parse(faces: &[impl AsRef<str>]) -> Result<DiceSet> {
        let dice = faces
            .iter()
            .map(|s| Die::parse(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(DiceSet::new(dice))
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }
}

/// Shuffles `dice_set` in place (Fisher-Yates, unbiased) and rolls one
/// face per die, returning the resulting board layout in dice-position
/// order.
pub fn roll(dice_set: &mut DiceSet, rng: &mut impl Rng) -> Vec<u8> {
    dice_set.dice.shuffle(rng);
    dice_set
        .dice
        .iter()
        .map(|die| die.face(rng.gen_range(0..6)))
        .collect()
}
