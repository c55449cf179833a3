use bitvec::{bitbox, boxed::BitBox, prelude::Lsb0};

use crate::{
    board::Board,
    hole::{Hole, NR_HOLES},
};

/// One bit per possible occupancy of the board.
pub struct VisitMap(BitBox<u32>);

impl VisitMap {
    pub fn new() -> Self {
        Self(bitbox![u32, Lsb0; 0; 1usize << NR_HOLES])
    }

    pub fn visit(&mut self, board: &Board) {
        self.0.set(board.mask() as usize, true);
    }

    pub fn is_visited(&self, board: &Board) -> bool {
        self.0[board.mask() as usize]
    }

    /// Number of visited positions
    pub fn count(&self) -> usize {
        self.0.count_ones()
    }
}

impl Default for VisitMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Distinct positions reachable from a start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Census {
    /// Distinct positions, the start included.
    pub positions: u64,
    pub by_peg_count: [u64; NR_HOLES + 1],
    /// Holes in which a lone last peg can end up, in increasing order.
    pub single_peg_holes: Vec<Hole>,
}

impl Census {
    fn record(&mut self, board: &Board) {
        self.positions += 1;
        self.by_peg_count[board.peg_count() as usize] += 1;
        if board.is_won() {
            self.single_peg_holes.extend(board.pegs());
        }
    }
}

/// Enumerate every position that can be reached from `start`. Unlike the
/// exhaustive [Search](crate::search::Search), positions reached along
/// different paths are only expanded once.
pub fn census(start: &Board) -> Census {
    let mut board = start.clone();
    let mut visited = VisitMap::new();
    let mut census = Census {
        positions: 0,
        by_peg_count: [0; NR_HOLES + 1],
        single_peg_holes: Vec::new(),
    };

    visited.visit(&board);
    census.record(&board);
    step(&mut board, &mut visited, &mut census);

    census.single_peg_holes.sort();
    log::debug!(
        "{} distinct positions reachable with {} pegs at the start",
        census.positions,
        start.peg_count()
    );
    debug_assert_eq!(visited.count() as u64, census.positions);
    census
}

fn step(board: &mut Board, visited: &mut VisitMap, census: &mut Census) {
    for mv in board.generate_legal_moves() {
        board.apply_move(mv);
        if !visited.is_visited(board) {
            visited.visit(board);
            census.record(board);
            step(board, visited, census);
        }
        board.undo_move(mv);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(number: u8) -> Hole {
        Hole::must(number)
    }

    #[test]
    fn test_default_start_census() {
        let census = census(&Board::default_start());
        assert_eq!(census.positions, 3016);
        assert_eq!(census.single_peg_holes, vec![h(1), h(7), h(10), h(13)]);
        assert_eq!(census.by_peg_count[14], 1);
        assert_eq!(census.by_peg_count[13], 2);
        assert_eq!(census.by_peg_count[1], 4);
        assert_eq!(census.by_peg_count.iter().sum::<u64>(), census.positions);
    }

    #[test]
    // agrees with the exhaustive search, which finds every solution from
    // hole 5 ending on hole 13
    fn test_census_from_middle_hole() {
        let census = census(&Board::new(h(5)));
        assert_eq!(census.single_peg_holes, vec![h(13)]);
        assert_eq!(census.by_peg_count[14], 1);
    }

    #[test]
    fn test_visit_map() {
        let mut map = VisitMap::new();
        let board = Board::default_start();
        assert!(!map.is_visited(&board));
        map.visit(&board);
        map.visit(&board);
        assert!(map.is_visited(&board));
        assert!(!map.is_visited(&Board::full()));
        assert_eq!(map.count(), 1);
    }

    #[test]
    fn test_stuck_board() {
        let census = census(&Board::from_pegs([h(1), h(15)]));
        assert_eq!(census.positions, 1);
        assert!(census.single_peg_holes.is_empty());
    }
}
