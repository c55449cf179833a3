use std::fmt;

use bitvec::{BitArr, prelude::Lsb0};

use crate::{
    hole::{Hole, NR_HOLES, NR_ROWS},
    jumps::Move,
};

type Occupancy = BitArr!(for NR_HOLES, in u16, Lsb0);

/// Peg occupancy of the fifteen holes together with the path of moves that
/// led here.
///
/// Invariant: `peg_count` equals the number of occupied holes, and replaying
/// `history` from the starting configuration gives the current occupancy.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    pegs: Occupancy,
    peg_count: u8,
    history: Vec<Move>,
}

impl Board {
    /// A board with a peg in every hole. Not playable until a peg is removed.
    pub fn full() -> Self {
        let mut pegs = Occupancy::default();
        for i in 0..NR_HOLES {
            pegs.set(i, true);
        }
        Board {
            pegs,
            peg_count: NR_HOLES as u8,
            history: Vec::new(),
        }
    }

    /// Starting configuration with a single empty hole.
    pub fn new(empty: Hole) -> Self {
        let mut board = Self::full();
        board.remove_initial_peg(empty);
        board
    }

    /// The classic start, apex empty.
    pub fn default_start() -> Self {
        Self::new(Hole::APEX)
    }

    /// A board with pegs exactly in the given holes.
    pub fn from_pegs(holes: impl IntoIterator<Item = Hole>) -> Self {
        let mut board = Board {
            pegs: Occupancy::default(),
            peg_count: 0,
            history: Vec::new(),
        };
        for hole in holes {
            if !board.pegs[hole.index()] {
                board.pegs.set(hole.index(), true);
                board.peg_count += 1;
            }
        }
        board
    }

    /// Build a board from a drawing with one line per row, `#` for a peg and
    /// `.` for an empty hole. Spaces are ignored.
    pub fn from_ascii(lines: [&str; NR_ROWS as usize]) -> Self {
        let mut holes = Vec::new();
        let mut counted_chars = 0;
        for line in lines {
            for c in line.chars() {
                match c {
                    '#' => holes.push(counted_chars),
                    '.' => {}
                    ' ' => continue,
                    _ => panic!("invalid char in ascii"),
                }
                counted_chars += 1;
                if counted_chars > NR_HOLES {
                    panic!("too many chars in ascii");
                }
            }
        }
        if counted_chars < NR_HOLES {
            panic!("not enough chars in ascii");
        }

        Self::from_pegs(holes.into_iter().map(|i| Hole::must(i as u8 + 1)))
    }

    /// Take the peg out of `hole` before play begins.
    ///
    /// Panics if the hole is already empty, since the peg count would no
    /// longer match the occupancy.
    pub fn remove_initial_peg(&mut self, hole: Hole) {
        assert!(
            self.is_peg_present(hole),
            "hole {hole} is already empty, cannot remove its peg"
        );
        self.pegs.set(hole.index(), false);
        self.peg_count -= 1;
    }

    pub fn is_peg_present(&self, hole: Hole) -> bool {
        self.pegs[hole.index()]
    }

    pub fn peg_count(&self) -> u32 {
        self.peg_count as u32
    }

    /// Occupied holes in increasing order.
    pub fn pegs(&self) -> impl Iterator<Item = Hole> + '_ {
        Hole::all().filter(|&hole| self.is_peg_present(hole))
    }

    /// Occupancy packed into the low 15 bits, hole `n` at bit `n - 1`.
    pub fn mask(&self) -> u16 {
        self.pegs.as_raw_slice()[0]
    }

    /// Moves applied so far and not undone, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        let jump = mv.jump();
        self.is_peg_present(jump.from)
            && self.is_peg_present(jump.jumped)
            && !self.is_peg_present(jump.to)
    }

    /// Legal moves in jump table order.
    pub fn legal_moves(&self) -> impl Iterator<Item = Move> + '_ {
        Move::all().filter(|&mv| self.is_legal(mv))
    }

    /// Snapshot of [Board::legal_moves]. The list is detached from the board.
    pub fn generate_legal_moves(&self) -> Vec<Move> {
        self.legal_moves().collect()
    }

    pub fn is_won(&self) -> bool {
        self.peg_count == 1
    }

    /// Either won, or no jump is possible anymore.
    pub fn is_game_over(&self) -> bool {
        self.is_won() || self.legal_moves().next().is_none()
    }

    /// Game over with more than one peg left.
    pub fn is_stuck(&self) -> bool {
        !self.is_won() && self.is_game_over()
    }

    /// Perform the move if it is legal. Returns whether the board changed;
    /// illegal moves leave the board untouched.
    pub fn apply_move(&mut self, mv: Move) -> bool {
        if !self.is_legal(mv) {
            log::trace!("ignoring illegal move {mv}");
            return false;
        }
        let jump = mv.jump();
        self.pegs.set(jump.from.index(), false);
        self.pegs.set(jump.jumped.index(), false);
        self.pegs.set(jump.to.index(), true);
        self.peg_count -= 1;
        self.history.push(mv);
        true
    }

    /// Take back the most recent move.
    ///
    /// Panics if `mv` is not the move on top of the history, moves have to be
    /// undone in reverse order.
    pub fn undo_move(&mut self, mv: Move) {
        let last = self.history.pop();
        assert_eq!(last, Some(mv), "undo out of order");
        let jump = mv.jump();
        self.pegs.set(jump.from.index(), true);
        self.pegs.set(jump.jumped.index(), true);
        self.pegs.set(jump.to.index(), false);
        self.peg_count += 1;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..NR_ROWS {
            write!(f, "{}", " ".repeat((NR_ROWS - 1 - row) as usize))?;
            for col in 0..=row {
                if col > 0 {
                    write!(f, " ")?;
                }
                let Some(hole) = Hole::from_row_col(row, col) else {
                    continue;
                };
                write!(f, "{}", if self.is_peg_present(hole) { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn h(number: u8) -> Hole {
        Hole::must(number)
    }

    fn jump_move(from: u8, to: u8) -> Move {
        Move::from_pair(h(from), h(to)).unwrap()
    }

    #[test]
    fn test_default_start() {
        let board = Board::default_start();
        assert_eq!(board.peg_count(), 14);
        assert!(!board.is_peg_present(Hole::APEX));
        assert!(Hole::all().skip(1).all(|hole| board.is_peg_present(hole)));
        assert!(board.history().is_empty());
        assert!(!board.is_game_over());
    }

    #[test]
    fn test_opening_moves() {
        let board = Board::default_start();
        let moves = board.generate_legal_moves();

        // only the two pegs two rows down can reach the apex
        assert_eq!(moves, vec![jump_move(4, 1), jump_move(6, 1)]);
        assert!(moves.contains(&jump_move(4, 1)));
        assert!(!moves.contains(&jump_move(1, 4)));
    }

    #[test]
    fn test_apply_first_move() {
        let mut board = Board::default_start();
        assert!(board.apply_move(jump_move(4, 1)));

        assert_eq!(board.peg_count(), 13);
        let empty: Vec<_> = Hole::all().filter(|&x| !board.is_peg_present(x)).collect();
        assert_eq!(empty, vec![h(2), h(4)]);
        assert_eq!(board.history(), &[jump_move(4, 1)]);
    }

    #[test]
    fn test_illegal_move_is_ignored() {
        let mut board = Board::default_start();
        let before = board.clone();

        assert!(!board.apply_move(jump_move(1, 4)));
        assert!(!board.apply_move(jump_move(13, 4)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_dead_end() {
        let board = Board::from_ascii([
            "    #    ",
            "   . .   ",
            "  . . .  ",
            " . . . . ",
            ". . . . #",
        ]);
        assert_eq!(board.peg_count(), 2);
        assert!(board.generate_legal_moves().is_empty());
        assert!(board.is_game_over());
        assert!(board.is_stuck());
        assert!(!board.is_won());
    }

    #[test]
    fn test_neighbouring_pegs_are_not_stuck() {
        let board = Board::from_pegs([h(1), h(2)]);
        assert_eq!(board.generate_legal_moves(), vec![jump_move(1, 4)]);
        assert!(!board.is_game_over());
    }

    #[test]
    fn test_won() {
        let board = Board::from_pegs([h(13)]);
        assert!(board.is_won());
        assert!(board.is_game_over());
        assert!(!board.is_stuck());
    }

    #[test]
    fn test_from_ascii_matches_from_pegs() {
        let a = Board::from_ascii([
            "    .    ",
            "   # .   ",
            "  . # .  ",
            " . . . . ",
            ". . . . #",
        ]);
        assert_eq!(a, Board::from_pegs([h(2), h(5), h(15)]));
        assert_eq!(a.mask(), 0b100_0000_0001_0010);
    }

    #[test]
    #[should_panic(expected = "not enough chars")]
    fn test_from_ascii_rejects_short_drawing() {
        Board::from_ascii(["#", "##", "###", "####", "####"]);
    }

    #[test]
    #[should_panic(expected = "already empty")]
    fn test_remove_initial_peg_twice() {
        let mut board = Board::default_start();
        board.remove_initial_peg(Hole::APEX);
    }

    #[test]
    #[should_panic(expected = "undo out of order")]
    fn test_undo_out_of_order() {
        let mut board = Board::default_start();
        let first = jump_move(4, 1);
        assert!(board.apply_move(first));
        let second = board.generate_legal_moves()[0];
        assert!(board.apply_move(second));
        board.undo_move(first);
    }

    #[test]
    #[should_panic(expected = "undo out of order")]
    fn test_undo_without_history() {
        let mut board = Board::default_start();
        board.undo_move(jump_move(4, 1));
    }

    #[test]
    fn test_display() {
        let mut board = Board::default_start();
        assert!(board.apply_move(jump_move(6, 1)));
        assert_eq!(
            board.to_string(),
            "    #\n   # .\n  # # .\n # # # #\n# # # # #\n"
        );
    }

    /// Walk from the default start, using `choices` to pick among the legal
    /// moves at each step.
    fn walk(choices: &[usize]) -> Board {
        let mut board = Board::default_start();
        for &choice in choices {
            let moves = board.generate_legal_moves();
            if moves.is_empty() {
                break;
            }
            assert!(board.apply_move(moves[choice % moves.len()]));
        }
        board
    }

    proptest! {
        #[test]
        fn apply_then_undo_restores_board(choices in prop::collection::vec(0usize..32, 0..13)) {
            let board = walk(&choices);
            for mv in board.generate_legal_moves() {
                let mut next = board.clone();
                prop_assert!(next.apply_move(mv));
                prop_assert_eq!(next.peg_count() + 1, board.peg_count());
                prop_assert_eq!(next.history().len(), board.history().len() + 1);
                next.undo_move(mv);
                prop_assert_eq!(&next, &board);
            }
        }

        #[test]
        fn legal_moves_are_legal(choices in prop::collection::vec(0usize..32, 0..13)) {
            let board = walk(&choices);
            let legal = board.generate_legal_moves();
            for mv in Move::all() {
                let jump = mv.jump();
                let expected = board.is_peg_present(jump.from)
                    && board.is_peg_present(jump.jumped)
                    && !board.is_peg_present(jump.to);
                prop_assert_eq!(legal.contains(&mv), expected);
            }
            for &mv in &legal {
                let mut next = board.clone();
                prop_assert!(next.apply_move(mv));
                prop_assert!(!next.is_legal(mv));
            }
        }

        #[test]
        fn peg_count_matches_occupancy(choices in prop::collection::vec(0usize..32, 0..13)) {
            let board = walk(&choices);
            prop_assert_eq!(board.peg_count() as usize, board.pegs().count());
            prop_assert_eq!(board.peg_count(), board.mask().count_ones());
            prop_assert_eq!(board.peg_count() as usize + board.history().len(), 14);
        }
    }
}
