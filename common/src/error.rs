use crate::hole::Hole;

/// Errors from turning text into holes and moves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("`{0}` is not a hole number")]
    NotANumber(String),
    #[error("hole {0} is not on the board, holes are numbered 1 to 15")]
    OutOfRange(u32),
    #[error("`{0}` is not a move, expected `from-to`")]
    Malformed(String),
    #[error("no jump leads from hole {from} to hole {to}")]
    NoSuchJump { from: Hole, to: Hole },
}
