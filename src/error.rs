//! Error types for parsing boards, squares and protocol commands.
//!
//! Illegal moves are not errors: the rules engine answers them with `false`
//! and the game controller with `MoveOutcome::Rejected`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("invalid square: {0}")]
    InvalidSquare(String),
    #[error("invalid player: {0}")]
    InvalidPlayer(String),
    #[error("invalid piece character '{0}'")]
    InvalidPieceChar(char),
    #[error("diagram must have between 1 and 26 rows, got {0}")]
    BadRowCount(usize),
    #[error("row {row} has width {width}, expected the board size")]
    BadRowWidth { row: usize, width: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{command}: missing argument")]
    MissingArgument { command: &'static str },
    #[error("{command}: invalid argument '{value}'")]
    InvalidArgument { command: &'static str, value: String },
    #[error(transparent)]
    Board(#[from] BoardError),
}
