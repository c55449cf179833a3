pub mod board;
pub mod error;
pub mod hole;
pub mod jumps;
pub mod playout;
pub mod reachable;
pub mod search;

pub use board::Board;
pub use error::ParseError;
pub use hole::{Hole, NR_HOLES};
pub use jumps::{JUMP_TABLE, Jump, Move, format_path, parse_path};
pub use search::{Search, SearchStats};
