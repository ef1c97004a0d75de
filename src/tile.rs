//! Tile codes and the multi-letter tile vocabulary.
//!
//! A board position holds one byte: an ordinary letter `'A'..='Z'`, or a
//! digit `'0'..='5'` naming one of five predefined two-letter expansions.
//! Both cases consume exactly one board position but the multi-letter
//! case advances the DAWG by two edges, so the decoder is the single seam
//! that draws the letter/multi distinction, rather than branching on
//! character ranges at every call site.

/// The decoded shape of a tile code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Letter(u8),
    Multi(u8, u8),
}

/// Expansions for digit tile codes '0'..'5', indexed by `code - b'0'`.
/// '0' -> "__" is a blank: it deliberately can't match any real DAWG
/// letter, so any board containing it simply can't extend through that
/// position.
const MULTI_EXPANSIONS: [(u8, u8); 6] = [
    (b'_', b'_'), // '0' blank
    (b'Q', b'U'), // '1'
    (b'I', b'N'), // '2'
    (b'T', b'H'), // '3'
    (b'E', b'R'), // '4'
    (b'H', b'E'), // '5'
];

/// Decodes a raw tile byte into its letter or multi-letter expansion.
///
/// # Panics
/// Panics if `code` is not in `'A'..='Z'` or `'0'..='5'`. Callers must
/// validate tile codes (dice-set input, board layout strings) before
/// they reach the search engine; see [`crate::board::validate_tile_code`].
pub fn decode(code: u8) -> Tile {
    match code {
        b'A'..=b'Z' => Tile::Letter(code),
        b'0'..=b'5' => {
            let (a, b) = MULTI_EXPANSIONS[(code - b'0') as usize];
            Tile::Multi(a, b)
        }
        other => panic!("tile code {other} is not a valid letter or multi-letter digit"),
    }
}

/// Whether `code` is a tile code this crate understands (ordinary letter
/// or multi-letter digit), independent of whether it is valid in a
/// particular context (e.g. a die face vs. a fixed layout string).
pub fn is_valid_code(code: u8) -> bool {
    matches!(code, b'A'..=b'Z' | b'0'..=b'5')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_decode_to_themselves() {
        assert_eq!(decode(b'A'), Tile::Letter(b'A'));
        assert_eq!(decode(b'Z'), Tile::Letter(b'Z'));
    }

    #[test]
    fn qu_tile_decodes_to_q_then_u() {
        assert_eq!(decode(b'1'), Tile::Multi(b'Q', b'U'));
    }

    #[test]
    fn all_five_multi_tiles_are_distinct_two_letter_pairs() {
        let expansions: Vec<(u8, u8)> = (b'1'..=b'5')
            .map(|c| match decode(c) {
                Tile::Multi(a, b) => (a, b),
                Tile::Letter(_) => unreachable!(),
            })
            .collect();
        assert_eq!(
            expansions,
            vec![
                (b'Q', b'U'),
                (b'I', b'N'),
                (b'T', b'H'),
                (b'E', b'R'),
                (b'H', b'E'),
            ]
        );
    }

    #[test]
    fn blank_tile_never_matches_real_letters() {
        assert_eq!(decode(b'0'), Tile::Multi(b'_', b'_'));
    }

    #[test]
    fn is_valid_code_accepts_letters_and_digits_zero_to_five() {
        assert!(is_valid_code(b'M'));
        assert!(is_valid_code(b'3'));
        assert!(!is_valid_code(b'6'));
        assert!(!is_valid_code(b'a'));
    }

    #[test]
    #[should_panic]
    fn decode_panics_on_unknown_code() {
        decode(b'6');
    }
}
