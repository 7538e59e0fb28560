//! Turn controller and move history.
//!
//! A turn is one step, or one jump followed by every further jump the same
//! piece is forced to make. Completed turns are stored as immutable
//! [`TurnRecord`]s; a chain still in progress is kept apart until it ends.

use crate::board::{Board, Move, Piece, Player, Square};
use crate::search::{Search, SearchParams, SearchStats};
use tracing::{info, trace};

/// One player's complete turn, in play order.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnRecord {
    pub player: Player,
    pub moves: Vec<Move>,
}

impl TurnRecord {
    /// Squares touched by the turn, start then every landing square.
    pub fn path(&self) -> Vec<Square> {
        let mut path = Vec::with_capacity(self.moves.len() + 1);
        if let Some(first) = self.moves.first() {
            path.push(first.start);
        }
        path.extend(self.moves.iter().map(|m| m.destination));
        path
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Illegal, or the game is over. Nothing changed.
    Rejected,
    /// Applied; the same piece must capture again.
    ContinueCapture,
    /// Applied and the turn passed to the opponent.
    TurnComplete,
}

impl MoveOutcome {
    pub fn accepted(self) -> bool {
        self != MoveOutcome::Rejected
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PieceCounts {
    pub black_pieces: u32,
    pub red_pieces: u32,
    pub black_kings: u32,
    pub red_kings: u32,
}

pub struct Game {
    board: Board,
    turn: Player,
    human: Player,
    required: Option<Square>,
    /// Moves of the chain currently being played by `turn`
    pending: Vec<Move>,
    history: Vec<TurnRecord>,
    /// Set when the side to move was found without a legal move
    stalemated_winner: Option<Player>,
    search: Search,
}

impl Game {
    /// New game in the standard layout, Black to move. The AI plays the
    /// colour opposite to `human`.
    pub fn new(human: Player, params: SearchParams) -> Self {
        Self::from_board(Board::new(), Player::Black, human, params)
    }

    /// Game starting from an arbitrary position.
    pub fn from_board(board: Board, turn: Player, human: Player, params: SearchParams) -> Self {
        let mut game = Self {
            board,
            turn,
            human,
            required: None,
            pending: Vec::new(),
            history: Vec::new(),
            stalemated_winner: None,
            search: Search::new(params),
        };
        game.check_moves_available();
        game
    }

    pub fn new_game(&mut self) {
        self.board.reset();
        self.turn = Player::Black;
        self.required = None;
        self.pending.clear();
        self.history.clear();
        self.stalemated_winner = None;
        info!("new game");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn human(&self) -> Player {
        self.human
    }

    pub fn ai(&self) -> Player {
        self.human.opponent()
    }

    /// Square of the piece that must keep capturing, if a chain is in progress.
    pub fn required_piece(&self) -> Option<Square> {
        self.required
    }

    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// The most recent completed AI turn, for highlighting.
    pub fn last_ai_turn(&self) -> Option<&TurnRecord> {
        self.history.iter().rev().find(|t| t.player == self.ai())
    }

    pub fn search_params(&self) -> &SearchParams {
        self.search.params()
    }

    pub fn set_search_params(&mut self, params: SearchParams) {
        self.search.set_params(params);
    }

    pub fn search_stats(&self) -> &SearchStats {
        self.search.stats()
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    /// Legal destinations for the piece on `sq` given whose turn it is and any
    /// pending chain. Empty for out-of-bounds squares or the opponent's pieces.
    pub fn legal_destinations(&self, sq: Square) -> Vec<Square> {
        if self.is_game_over().is_some() {
            return Vec::new();
        }
        self.board.legal_destinations(sq, self.turn, self.required)
    }

    pub fn piece_counts(&self) -> PieceCounts {
        PieceCounts {
            black_pieces: self.board.piece_count(Player::Black),
            red_pieces: self.board.piece_count(Player::Red),
            black_kings: self.board.king_count(Player::Black),
            red_kings: self.board.king_count(Player::Red),
        }
    }

    /// Winner, if the game has ended. A side with no pieces left loses
    /// immediately; a side to move with no legal move loses as well.
    pub fn is_game_over(&self) -> Option<Player> {
        if self.board.piece_count(Player::Black) == 0 {
            return Some(Player::Red);
        }
        if self.board.piece_count(Player::Red) == 0 {
            return Some(Player::Black);
        }
        self.stalemated_winner
    }

    /// Validates and plays a move for the side to move.
    pub fn attempt_move(&mut self, start: Square, destination: Square) -> MoveOutcome {
        if self.is_game_over().is_some()
            || !self
                .board
                .is_legal_move(start, destination, self.turn, self.required)
        {
            return MoveOutcome::Rejected;
        }

        let mut mv = Move::new(start, destination);
        self.board.make_move(&mut mv, self.turn);
        trace!(side = %self.turn, mv = %mv, "move applied");
        self.pending.push(mv);

        if mv.is_capture() && self.board.any_captures_for_piece(destination) {
            self.required = Some(destination);
            MoveOutcome::ContinueCapture
        } else {
            self.finish_turn();
            MoveOutcome::TurnComplete
        }
    }

    /// Lets the engine play `player`'s whole turn. Does nothing unless it is
    /// that player's turn, no chain is pending and the game is still on.
    pub fn request_ai_move(&mut self, player: Player) -> Option<TurnRecord> {
        if player != self.turn || self.required.is_some() || self.is_game_over().is_some() {
            return None;
        }

        let moves = self.search.make_ai_move(&mut self.board, player);
        if moves.is_empty() {
            self.stalemated_winner = Some(player.opponent());
            return None;
        }
        self.pending = moves;
        self.finish_turn();
        self.history.last().cloned()
    }

    /// Takes back the last human turn together with every AI turn played after
    /// it. Mid-chain, only the partial turn is taken back. Returns `false`
    /// when there is nothing to undo.
    pub fn undo_last_turn(&mut self) -> bool {
        if !self.pending.is_empty() {
            let moves = std::mem::take(&mut self.pending);
            self.unwind(self.turn, &moves);
            self.required = None;
            info!(side = %self.turn, "partial turn undone");
            return true;
        }

        if self.history.is_empty() {
            return false;
        }

        while let Some(record) = self.history.pop() {
            self.unwind(record.player, &record.moves);
            self.turn = record.player;
            if record.player == self.human {
                break;
            }
        }
        self.stalemated_winner = None;
        info!(side = %self.turn, remaining = self.history.len(), "turn undone");
        true
    }

    fn unwind(&mut self, player: Player, moves: &[Move]) {
        for mv in moves.iter().rev() {
            self.board.unmake_move(mv, player);
        }
    }

    fn finish_turn(&mut self) {
        let record = TurnRecord {
            player: self.turn,
            moves: std::mem::take(&mut self.pending),
        };
        info!(side = %record.player, moves = record.moves.len(), "turn complete");
        self.history.push(record);
        self.required = None;
        self.turn = self.turn.opponent();
        self.check_moves_available();
    }

    fn check_moves_available(&mut self) {
        if !self.board.any_moves_possible(self.turn) {
            self.stalemated_winner = Some(self.turn.opponent());
        }
        if let Some(winner) = self.is_game_over() {
            info!(%winner, "game over");
        }
    }
}
