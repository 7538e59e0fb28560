pub mod board;
pub mod error;
pub mod game;
pub mod perft;
pub mod protocol;
pub mod rules;
pub mod search;

pub use board::{Board, Move, Piece, Player, Square, BOARD_SIZE, START_DIAGRAM};
pub use error::{BoardError, CommandError};
pub use game::{Game, MoveOutcome, PieceCounts, TurnRecord};

/// Installs the stderr `tracing` subscriber used by the binaries, filtered by
/// `RUST_LOG` (default `warn`). Safe to call more than once.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
