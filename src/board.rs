//! Board-layout validation and the `(y, x) <-> bit` mapping.
//!
//! The heavier board state (dice array, per-evaluation counters, fail
//! flag, found-word set) lives on [`crate::search::Evaluator`] instead of
//! here; this module holds only the pieces every caller needs regardless
//! of whether they ever run a search — tile-code validation and the size
//! limit that makes a 64-bit used-mask sufficient.

use crate::error::{Error, Result};
use crate::tile::is_valid_code;

/// `width*height <= 36` so a `u64` bitmask can track used positions.
pub const MAX_POSITIONS: usize = 36;

pub fn check_board_size(width: usize, height: usize) -> Result<()> {
    if width * height > MAX_POSITIONS {
        return Err(Error::BoardTooLarge { width, height });
    }
    Ok(())
}

/// Maps board position `(y, x)` to its bit in the used-mask.
#[inline]
pub fn bit_index(width: usize, y: usize, x: usize) -> usize {
    y * width + x
}

/// Validates a fixed board layout string: the right length, and every
/// byte a tile code this crate understands.
pub fn validate_layout(layout: &str, width: usize, height: usize) -> Result<Vec<u8>> {
    check_board_size(width, height)?;
    let bytes = layout.as_bytes();
    if bytes.len() != width * height {
        return Err(Error::Format(format!(
            "layout has {} tiles but board is {width}x{height} ({} expected)",
            bytes.len(),
            width * height
        )));
    }
    for &b in bytes {
        if !is_valid_code(b) {
            return Err(Error::Format(format!(
                "layout byte {:?} is not a valid tile code",
                b as char
            )));
        }
    }
    Ok(bytes.to_vec())
}
