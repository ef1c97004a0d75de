//! Public surface: the rejection-sampling outer loop and fixed-board
//! analysis.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::board::validate_layout;
use crate::constraints::Constraints;
use crate::dawg::Dictionary;
use crate::dice::{roll, DiceSet};
use crate::error::{Error, Result};
use crate::score::ScoreTable;
use crate::search::Evaluator;

/// Result of a successful [`generate`] call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResult {
    pub words: Vec<String>,
    pub dice_layout: String,
    pub tries: u32,
}

/// Rejection-sampling driver: reroll until the board satisfies every
/// lower bound and no upper bound was tripped, or `max_tries` is
/// exhausted. Returns `Ok(None)` on exhaustion — this is the benign
/// "couldn't find one" outcome, not an error; it is never reported via
/// the error channel, and `tries` is only ever present inside a
/// successful [`GenerateResult`].
#[allow(clippy::too_many_arguments)]
pub fn generate(
    dice_set: &mut DiceSet,
    width: usize,
    height: usize,
    dictionary: &Dictionary,
    score_table: &ScoreTable,
    constraints: &Constraints,
    max_tries: u32,
    seed: u64,
    use_prefilter: bool,
) -> Result<Option<GenerateResult>> {
    if dice_set.len() != width * height {
        return Err(Error::Format(format!(
            "board is {width}x{height} ({} tiles) but the dice set has {} dice",
            width * height,
            dice_set.len()
        )));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut evaluator = Evaluator::new(
        dictionary,
        width,
        height,
        score_table.clone(),
        *constraints,
    )?;

    let mut prefilter_rejections = 0u32;
    for attempt in 1..=max_tries {
        let layout = roll(dice_set, &mut rng);

        if use_prefilter && !crate::prefilter::looks_promising(&layout, constraints) {
            prefilter_rejections += 1;
            continue;
        }

        if evaluator.evaluate(&layout)? {
            info!(
                "accepted board after {attempt} attempt(s) ({prefilter_rejections} prefilter rejections)"
            );
            let dice_layout: String = layout.iter().map(|&b| b as char).collect();
            return Ok(Some(GenerateResult {
                words: evaluator.words(),
                dice_layout,
                tries: attempt,
            }));
        }
        debug!("rejected board on attempt {attempt}");
    }

    warn!("budget of {max_tries} attempts exhausted without an accepted board");
    Ok(None)
}

/// Bypasses rolling and constraints: runs the search with all minima at
/// 0 and all maxima unbounded over a fixed `layout`, returning every
/// word found.
pub fn analyse(
    dictionary: &Dictionary,
    score_table: &ScoreTable,
    width: usize,
    height: usize,
    layout: &str,
) -> Result<Vec<String>> {
    let tiles = validate_layout(layout, width, height)?;
    let mut evaluator = Evaluator::new(
        dictionary,
        width,
        height,
        score_table.clone(),
        Constraints::unconstrained(),
    )?;
    evaluator.evaluate(&tiles)?;
    Ok(evaluator.words())
}
