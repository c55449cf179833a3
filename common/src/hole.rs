use std::{fmt, str::FromStr};

use crate::error::ParseError;

pub const NR_HOLES: usize = 15;
pub const NR_ROWS: u8 = 5;

/// A hole on the triangular board, numbered 1 to 15 row by row starting at
/// the apex:
///
/// ```text
///         1
///       2   3
///     4   5   6
///   7   8   9  10
/// 11  12  13  14  15
/// ```
///
/// Invariant: can only represent valid holes
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub struct Hole(u8);

impl Hole {
    pub const APEX: Hole = Hole(1);

    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && number as usize <= NR_HOLES {
            Some(Hole(number))
        } else {
            None
        }
    }

    /// Like [Hole::new], but for compiled-in tables where an invalid number
    /// is a bug.
    pub const fn must(number: u8) -> Self {
        match Self::new(number) {
            Some(hole) => hole,
            None => panic!("hole number out of range"),
        }
    }

    /// Row `0..5` counted from the apex, column `0..=row` counted from the left.
    pub fn from_row_col(row: u8, col: u8) -> Option<Self> {
        if row >= NR_ROWS || col > row {
            return None;
        }
        Some(Hole(row * (row + 1) / 2 + col + 1))
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    /// Zero-based index, for array storage.
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    pub fn row(self) -> u8 {
        let mut row = 0;
        while (row + 1) * (row + 2) / 2 < self.0 {
            row += 1;
        }
        row
    }

    pub fn col(self) -> u8 {
        let row = self.row();
        self.0 - row * (row + 1) / 2 - 1
    }

    pub fn shift(self, drow: i8, dcol: i8) -> Option<Hole> {
        let row = self.row() as i8 + drow;
        let col = self.col() as i8 + dcol;
        if row < 0 || col < 0 {
            return None;
        }
        Self::from_row_col(row as u8, col as u8)
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (1..=NR_HOLES as u8).map(Hole)
    }
}

impl fmt::Display for Hole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Hole {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u32 = s
            .trim()
            .parse()
            .map_err(|_| ParseError::NotANumber(s.to_string()))?;
        u8::try_from(number)
            .ok()
            .and_then(Hole::new)
            .ok_or(ParseError::OutOfRange(number))
    }
}
