//! Boggle-style board generation and dictionary search against a packed
//! Directed Acyclic Word Graph (DAWG).
//!
//! The public surface is two calls: [`generator::generate`] rolls boards
//! until one satisfies a [`constraints::Constraints`] record (or a try
//! budget runs out), and [`generator::analyse`] finds every legal word on
//! a fixed board layout. Both sit on top of [`search::Evaluator`], the
//! recursive board+DAWG traversal that is the hard part of this crate.

pub mod board;
pub mod constraints;
pub mod dawg;
pub mod dice;
pub mod error;
pub mod found_words;
pub mod generator;
pub mod prefilter;
pub mod score;
pub mod search;
pub mod tile;

pub use constraints::Constraints;
pub use dawg::Dictionary;
pub use dice::{Die, DiceSet};
pub use error::{Error, Result};
pub use generator::{analyse, generate, GenerateResult};
pub use score::ScoreTable;
pub use search::Evaluator;
