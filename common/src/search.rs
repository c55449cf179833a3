use crate::{
    board::Board,
    hole::{Hole, NR_HOLES},
};

/// Tallies of an exhaustive search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Paths that ended because no further jump was possible, solutions
    /// included.
    pub tries: u64,
    /// Paths that ended with a single peg.
    pub solutions: u64,
    /// Number of moves applied during the search.
    pub explored: u64,
    /// Number of solutions whose last peg ends up in each hole, indexed by
    /// [Hole::index].
    pub final_holes: [u64; NR_HOLES],
    /// Terminal paths by the number of pegs left on the board.
    pub leaves_by_pegs_left: [u64; NR_HOLES + 1],
}

impl SearchStats {
    /// Tries per solution, rounded down.
    pub fn ratio(&self) -> Option<u64> {
        self.tries.checked_div(self.solutions)
    }

    pub fn solutions_ending_in(&self, hole: Hole) -> u64 {
        self.final_holes[hole.index()]
    }
}

/// Depth-first enumeration of every game that can be played from a board.
///
/// Each move is applied, explored and undone again, so the board is handed
/// back unchanged. The recursion depth is bounded by the peg count.
#[derive(Debug, Default)]
pub struct Search {
    stats: SearchStats,
}

impl Search {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn run(&mut self, board: &mut Board) {
        self.run_with(board, |_, _| {});
    }

    /// Explore every game from `board`, calling `on_solution` whenever a
    /// single peg is left. The board passed to the callback carries the
    /// winning path in its history, and the stats already count the solution.
    pub fn run_with<F>(&mut self, board: &mut Board, mut on_solution: F)
    where
        F: FnMut(&SearchStats, &Board),
    {
        log::debug!(
            "starting search with {} pegs, {} moves deep",
            board.peg_count(),
            board.history().len()
        );
        let depth = board.history().len();

        self.expand(board, &mut on_solution);

        debug_assert_eq!(board.history().len(), depth);
        log::debug!(
            "search done: {} solutions in {} tries, {} moves explored",
            self.stats.solutions,
            self.stats.tries,
            self.stats.explored
        );
    }

    /// Returns whether any move was possible.
    fn expand<F>(&mut self, board: &mut Board, on_solution: &mut F) -> bool
    where
        F: FnMut(&SearchStats, &Board),
    {
        let moves = board.generate_legal_moves();

        for &mv in &moves {
            let applied = board.apply_move(mv);
            debug_assert!(applied, "generated move {mv} should be legal");
            self.stats.explored += 1;

            if board.is_won() {
                self.stats.solutions += 1;
                self.stats.tries += 1;
                self.stats.final_holes[mv.to().index()] += 1;
                self.stats.leaves_by_pegs_left[1] += 1;
                on_solution(&self.stats, board);
            } else if !self.expand(board, on_solution) {
                self.stats.tries += 1;
                self.stats.leaves_by_pegs_left[board.peg_count() as usize] += 1;
            }

            board.undo_move(mv);
        }

        !moves.is_empty()
    }
}

/// Run a fresh search from the start with `empty` as the only empty hole.
pub fn search_from(empty: Hole) -> SearchStats {
    let mut board = Board::new(empty);
    let mut search = Search::new();
    search.run(&mut board);
    search.stats
}
