use rand::{Rng, SeedableRng, seq::IndexedRandom};
use rand_pcg::Pcg64Mcg;
use rustc_hash::FxHashSet;

use crate::{
    board::Board,
    hole::{Hole, NR_HOLES},
    jumps::Move,
};

/// Play from `board` until the game is over, picking each move uniformly
/// among the legal ones. Returns the moves played.
pub fn random_playout<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Vec<Move> {
    let mut played = Vec::new();
    while !board.is_game_over() {
        let moves = board.generate_legal_moves();
        let Some(&mv) = moves.choose(rng) else {
            break;
        };
        board.apply_move(mv);
        played.push(mv);
    }
    played
}

/// Outcome of a batch of random games.
#[derive(Debug, Clone, Default)]
pub struct PlayoutSummary {
    pub games: u64,
    pub wins: u64,
    /// Finished games by the number of pegs left.
    pub pegs_left: [u64; NR_HOLES + 1],
    /// Distinct winning move sequences.
    pub winning_lines: FxHashSet<Vec<Move>>,
}

impl PlayoutSummary {
    pub fn record(&mut self, board: &Board, line: Vec<Move>) {
        self.games += 1;
        self.pegs_left[board.peg_count() as usize] += 1;
        if board.is_won() {
            self.wins += 1;
            self.winning_lines.insert(line);
        }
    }

    /// Winning lines in a stable order, for display.
    pub fn sorted_winning_lines(&self) -> Vec<&[Move]> {
        let mut lines: Vec<_> = self.winning_lines.iter().map(Vec::as_slice).collect();
        lines.sort();
        lines
    }
}

/// Play `games` random games from the start with `empty` as the empty hole.
/// The same seed always gives the same summary.
pub fn run_playouts(empty: Hole, games: u64, seed: u64) -> PlayoutSummary {
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    let mut summary = PlayoutSummary::default();

    for _ in 0..games {
        let mut board = Board::new(empty);
        let line = random_playout(&mut board, &mut rng);
        summary.record(&board, line);
    }

    log::debug!(
        "{} of {} random games won, {} distinct winning lines",
        summary.wins,
        summary.games,
        summary.winning_lines.len()
    );
    summary
}
