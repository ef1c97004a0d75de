//! Error kinds for the dictionary loader, dice-set validation, and board
//! construction. The search engine itself never produces an `Error`; it
//! reports accept/reject booleans only (see `search`).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read dictionary: {0}")]
    Io(#[from] std::io::Error),

    #[error("dictionary format error: {0}")]
    Format(String),

    #[error("invalid die {die:?}: must be 6 characters from A-Z or 0-5")]
    BadDie { die: String },

    #[error("board {width}x{height} exceeds the 36-tile bitmask limit")]
    BoardTooLarge { width: usize, height: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
