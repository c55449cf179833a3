use std::{fmt, str::FromStr};

use crate::{error::ParseError, hole::Hole};

pub const NR_JUMPS: usize = 36;

/// A peg on `from` jumps over the peg on `jumped` and lands in the empty hole
/// `to`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Jump {
    pub from: Hole,
    pub to: Hole,
    pub jumped: Hole,
}

const fn jump(from: u8, to: u8, jumped: u8) -> Jump {
    Jump {
        from: Hole::must(from),
        to: Hole::must(to),
        jumped: Hole::must(jumped),
    }
}

/// Every jump on the board, grouped by starting hole. The order of this table
/// is the order in which legal moves are generated and searched.
#[rustfmt::skip]
pub static JUMP_TABLE: [Jump; NR_JUMPS] = [
    jump(1, 4, 2),    jump(1, 6, 3),
    jump(2, 7, 4),    jump(2, 9, 5),
    jump(3, 8, 5),    jump(3, 10, 6),
    jump(4, 6, 5),    jump(4, 1, 2),    jump(4, 11, 7),   jump(4, 13, 8),
    jump(5, 14, 9),   jump(5, 12, 8),
    jump(6, 4, 5),    jump(6, 13, 9),   jump(6, 15, 10),  jump(6, 1, 3),
    jump(7, 2, 4),    jump(7, 9, 8),
    jump(8, 3, 5),    jump(8, 10, 9),
    jump(9, 2, 5),    jump(9, 7, 8),
    jump(10, 8, 9),   jump(10, 3, 6),
    jump(11, 13, 12), jump(11, 4, 7),
    jump(12, 5, 8),   jump(12, 14, 13),
    jump(13, 11, 12), jump(13, 15, 14), jump(13, 6, 9),   jump(13, 4, 8),
    jump(14, 12, 13), jump(14, 5, 9),
    jump(15, 13, 14), jump(15, 6, 10),
];

/// A move, identified by its index into [JUMP_TABLE].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Move(u8);

impl Move {
    pub fn new(index: usize) -> Option<Self> {
        (index < NR_JUMPS).then_some(Move(index as u8))
    }

    /// Find the move that starts at `from` and lands on `to`, if the two holes
    /// are two steps apart on a line.
    pub fn from_pair(from: Hole, to: Hole) -> Option<Self> {
        JUMP_TABLE
            .iter()
            .position(|j| j.from == from && j.to == to)
            .map(|index| Move(index as u8))
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..NR_JUMPS as u8).map(Move)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn jump(self) -> &'static Jump {
        &JUMP_TABLE[self.index()]
    }

    pub fn from(self) -> Hole {
        self.jump().from
    }

    pub fn to(self) -> Hole {
        self.jump().to
    }

    pub fn jumped(self) -> Hole {
        self.jump().jumped
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from(), self.to())
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((from, to)) = s.trim().split_once('-') else {
            return Err(ParseError::Malformed(s.to_string()));
        };
        let from: Hole = from.parse()?;
        let to: Hole = to.parse()?;
        Move::from_pair(from, to).ok_or(ParseError::NoSuchJump { from, to })
    }
}

/// Render a sequence of moves as space separated `from-to` tokens.
pub fn format_path(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|mv| mv.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inverse of [format_path].
pub fn parse_path(s: &str) -> Result<Vec<Move>, ParseError> {
    s.split_whitespace().map(str::parse).collect()
}

#[cfg(test)]
fn compute_all_jumps() -> Vec<Jump> {
    const DIRECTIONS: [(i8, i8); 6] = [(0, 1), (0, -1), (1, 0), (1, 1), (-1, 0), (-1, -1)];

    let mut v = Vec::new();
    for from in Hole::all() {
        for (drow, dcol) in DIRECTIONS {
            let jumped = from.shift(drow, dcol);
            let to = from.shift(2 * drow, 2 * dcol);
            if let (Some(jumped), Some(to)) = (jumped, to) {
                v.push(Jump { from, to, jumped });
            }
        }
    }
    v
}
