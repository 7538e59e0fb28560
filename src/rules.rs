//! Move legality and move generation.
//!
//! Men step and jump along their two forward diagonals, kings along all four.
//! Capturing is mandatory, and a piece that has just captured must keep
//! capturing while it can: the caller passes that piece's square as
//! `required`.

use crate::board::{Board, Move, Piece, Player, Square};

/// Squares one diagonal step away in the piece's allowed directions.
/// Purely geometric: may contain squares off the board.
pub fn potential_steps(piece: Piece, from: Square) -> Vec<Square> {
    piece
        .directions()
        .into_iter()
        .map(|(dc, dr)| from.offset(dc, dr))
        .collect()
}

/// Squares two diagonal steps away in the piece's allowed directions.
pub fn potential_captures(piece: Piece, from: Square) -> Vec<Square> {
    piece
        .directions()
        .into_iter()
        .map(|(dc, dr)| from.offset(2 * dc, 2 * dr))
        .collect()
}

impl Board {
    /// Whether the piece on `from` may step to `dest`, ignoring turn order and
    /// the mandatory-capture rule.
    pub fn step_possible(&self, from: Square, dest: Square) -> bool {
        let Some(piece) = self.piece_at(from) else {
            return false;
        };
        potential_steps(piece, from).contains(&dest)
            && self.in_bounds(dest)
            && self.piece_at(dest).is_none()
    }

    /// Whether the piece on `from` may jump to `dest` over an opposing piece.
    pub fn capture_possible(&self, from: Square, dest: Square) -> bool {
        let Some(piece) = self.piece_at(from) else {
            return false;
        };
        if !potential_captures(piece, from).contains(&dest)
            || !self.in_bounds(dest)
            || self.piece_at(dest).is_some()
        {
            return false;
        }
        match self.piece_at(from.midpoint(dest)) {
            Some(jumped) => jumped.player != piece.player,
            None => false,
        }
    }

    pub fn legal_steps_for_piece(&self, from: Square) -> Vec<Square> {
        match self.piece_at(from) {
            Some(piece) => potential_steps(piece, from)
                .into_iter()
                .filter(|&dest| self.step_possible(from, dest))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn legal_captures_for_piece(&self, from: Square) -> Vec<Square> {
        match self.piece_at(from) {
            Some(piece) => potential_captures(piece, from)
                .into_iter()
                .filter(|&dest| self.capture_possible(from, dest))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn any_captures_for_piece(&self, from: Square) -> bool {
        !self.legal_captures_for_piece(from).is_empty()
    }

    pub fn any_moves_for_piece(&self, from: Square) -> bool {
        self.any_captures_for_piece(from) || !self.legal_steps_for_piece(from).is_empty()
    }

    /// Board-wide scan; recomputed on every call since any mutation can change it.
    pub fn any_captures_possible(&self, turn: Player) -> bool {
        self.pieces()
            .filter(|(_, p)| p.player == turn)
            .any(|(sq, _)| self.any_captures_for_piece(sq))
    }

    /// `false` for the side to move means that side has lost.
    pub fn any_moves_possible(&self, turn: Player) -> bool {
        self.pieces()
            .filter(|(_, p)| p.player == turn)
            .any(|(sq, _)| self.any_moves_for_piece(sq))
    }

    /// Full legality check for a move by `turn`.
    ///
    /// With `required` set (a capture chain is in progress) only further jumps
    /// by the piece on that square are legal. Otherwise any available capture
    /// anywhere on the board makes every step illegal.
    pub fn is_legal_move(
        &self,
        start: Square,
        dest: Square,
        turn: Player,
        required: Option<Square>,
    ) -> bool {
        if !self.in_bounds(start) || !self.in_bounds(dest) {
            return false;
        }
        match self.piece_at(start) {
            Some(piece) if piece.player == turn => {}
            _ => return false,
        }

        if let Some(req) = required {
            return req == start && self.capture_possible(start, dest);
        }

        if self.any_captures_possible(turn) {
            self.capture_possible(start, dest)
        } else {
            self.step_possible(start, dest)
        }
    }

    /// All legal jumps for `turn`, limited to the piece on `required` if set.
    pub fn legal_captures(&self, turn: Player, required: Option<Square>) -> Vec<Move> {
        let mut out = Vec::new();
        for (sq, piece) in self.pieces() {
            if piece.player != turn || required.is_some_and(|r| r != sq) {
                continue;
            }
            out.extend(
                self.legal_captures_for_piece(sq)
                    .into_iter()
                    .map(|dest| Move::new(sq, dest)),
            );
        }
        out
    }

    /// All legal single steps for `turn`. Only meaningful when no capture exists.
    pub fn legal_steps(&self, turn: Player) -> Vec<Move> {
        let mut out = Vec::new();
        for (sq, piece) in self.pieces() {
            if piece.player != turn {
                continue;
            }
            out.extend(
                self.legal_steps_for_piece(sq)
                    .into_iter()
                    .map(|dest| Move::new(sq, dest)),
            );
        }
        out
    }

    /// Candidate moves for `turn` under the mandatory-capture rule.
    pub fn generate_moves(&self, turn: Player, required: Option<Square>) -> Vec<Move> {
        if required.is_some() || self.any_captures_possible(turn) {
            self.legal_captures(turn, required)
        } else {
            self.legal_steps(turn)
        }
    }

    /// Destinations the piece on `from` may legally move to right now.
    pub fn legal_destinations(
        &self,
        from: Square,
        turn: Player,
        required: Option<Square>,
    ) -> Vec<Square> {
        match self.piece_at(from) {
            Some(piece) if piece.player == turn => {}
            _ => return Vec::new(),
        }
        if required.is_some_and(|r| r != from) {
            return Vec::new();
        }
        if required.is_some() || self.any_captures_possible(turn) {
            self.legal_captures_for_piece(from)
        } else {
            self.legal_steps_for_piece(from)
        }
    }
}
