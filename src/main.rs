mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use common::{
    Board, Hole, Search, format_path, parse_path, playout::run_playouts, reachable::census,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Random and exhaustive play of the 15-hole triangular peg solitaire"
)]
struct Cli {
    /// Hole that starts out empty (1 to 15, numbered row by row from the apex)
    #[arg(long, default_value_t = Hole::APEX)]
    hole: Hole,

    /// Number of random games to play before the exhaustive search
    #[arg(long, default_value_t = 2000)]
    playouts: u64,

    /// Seed for the random games
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print this many of the distinct winning random games
    #[arg(long, default_value_t = 0)]
    show_winners: usize,

    /// Print a progress line every this many solutions (0 disables)
    #[arg(long, default_value_t = 1000)]
    report_every: u64,

    /// Don't run the exhaustive search
    #[arg(long)]
    skip_search: bool,

    /// Count the distinct positions reachable from the start
    #[arg(long)]
    census: bool,

    /// Replay a game given as `from-to` moves, e.g. "4-1 6-4", and draw
    /// every position
    #[arg(long)]
    replay: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Some(line) = &cli.replay {
        return replay(cli.hole, line);
    }

    if cli.playouts > 0 {
        log::info!("playing {} random games from hole {}", cli.playouts, cli.hole);
        let summary = run_playouts(cli.hole, cli.playouts, cli.seed);
        print!("{}", cli::playout_summary(&summary, cli.show_winners));
    }

    if cli.census {
        let census = census(&Board::new(cli.hole));
        println!(
            "{} distinct positions reachable, a single peg can end in holes {}",
            census.positions,
            census
                .single_peg_holes
                .iter()
                .map(|h| h.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    if !cli.skip_search {
        search(cli.hole, cli.report_every);
    }

    Ok(())
}

fn search(empty: Hole, report_every: u64) {
    log::info!("searching all games from hole {empty}");

    let mut board = Board::new(empty);
    print!("{}", cli::draw(&board, None));

    let mut search = Search::new();
    search.run_with(&mut board, |stats, board| {
        if report_every > 0 && stats.solutions % report_every == 0 {
            println!("{}", cli::progress_line(stats, board.history()));
        }
    });

    print!("{}", cli::search_summary(search.stats()));
}

fn replay(empty: Hole, line: &str) -> Result<()> {
    let moves = parse_path(line).with_context(|| format!("Cannot read moves from `{line}`"))?;

    let mut board = Board::new(empty);
    print!("{}", cli::draw(&board, None));

    for mv in moves {
        if !board.apply_move(mv) {
            log::warn!("rejecting move {mv}");
            bail!(
                "Move {mv} is not possible after `{}`",
                format_path(board.history())
            );
        }
        println!("{mv}");
        print!("{}", cli::draw(&board, Some(mv)));
    }

    if board.is_won() {
        println!("solved");
    } else if board.is_stuck() {
        println!("stuck with {} pegs", board.peg_count());
    } else {
        println!("{} pegs left", board.peg_count());
    }
    Ok(())
}
