use colored::Colorize;
use common::{Board, Hole, Move, SearchStats, format_path, hole::NR_ROWS, playout::PlayoutSummary};

/// Draw the board as a triangle. If `last` is given, the hole the peg landed
/// in is shown on blue and the hole of the removed peg on red.
pub fn draw(board: &Board, last: Option<Move>) -> String {
    let mut out = String::new();
    for row in 0..NR_ROWS {
        out.push_str(&" ".repeat((NR_ROWS - 1 - row) as usize));
        for col in 0..=row {
            if col > 0 {
                out.push(' ');
            }
            let Some(hole) = Hole::from_row_col(row, col) else {
                continue;
            };

            let c = if board.is_peg_present(hole) { "#" } else { "." };
            let cell = match last {
                Some(mv) if mv.to() == hole => c.on_blue().to_string(),
                Some(mv) if mv.jumped() == hole => c.on_red().to_string(),
                _ => c.to_string(),
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out
}

/// One line of search progress: the current solution followed by the
/// running tallies.
pub fn progress_line(stats: &SearchStats, path: &[Move]) -> String {
    format!(
        "{} #totalTries={}, solutions={}, ratio={}",
        format_path(path),
        stats.tries,
        stats.solutions,
        stats.ratio().unwrap_or_default()
    )
}

pub fn search_summary(stats: &SearchStats) -> String {
    let mut out = format!(
        "explored {} moves. {} games, {} solutions\n",
        stats.explored, stats.tries, stats.solutions
    );
    for hole in Hole::all() {
        let n = stats.solutions_ending_in(hole);
        if n > 0 {
            out.push_str(&format!("  last peg in hole {hole:>2}: {n}\n"));
        }
    }
    for (pegs, &n) in stats.leaves_by_pegs_left.iter().enumerate() {
        if n > 0 {
            out.push_str(&format!("  games ending with {pegs:>2} pegs: {n}\n"));
        }
    }
    out
}

pub fn playout_summary(summary: &PlayoutSummary, show_winners: usize) -> String {
    let mut out = format!(
        "won {} of {} random games, {} distinct winning lines\n",
        summary.wins,
        summary.games,
        summary.winning_lines.len()
    );
    for line in summary.sorted_winning_lines().into_iter().take(show_winners) {
        out.push_str(&format!("  {}\n", format_path(line)));
    }
    out
}
