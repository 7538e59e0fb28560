//! Move-tree node counting.
//!
//! A leaf is a sequence of `depth` complete turns. A multi-jump counts as a
//! single turn, but every distinct jump path is counted separately.

use crate::board::{Board, Player, Square};

pub fn perft(board: &mut Board, turn: Player, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0;
    turns(board, turn, None, &mut |b: &mut Board| nodes += perft(b, turn.opponent(), depth - 1));
    nodes
}

/// Per-root-move breakdown at `depth`, keyed by the first move of each turn.
pub fn perft_divide(board: &mut Board, turn: Player, depth: u32) -> Vec<(String, u64)> {
    let mut out = Vec::new();
    if depth == 0 {
        return out;
    }
    for mut mv in board.generate_moves(turn, None) {
        board.make_move(&mut mv, turn);
        let mut nodes = 0;
        if mv.is_capture() && board.any_captures_for_piece(mv.destination) {
            turns(board, turn, Some(mv.destination), &mut |b: &mut Board| {
                nodes += perft(b, turn.opponent(), depth - 1)
            });
        } else {
            nodes = perft(board, turn.opponent(), depth - 1);
        }
        board.unmake_move(&mv, turn);
        out.push((mv.to_string(), nodes));
    }
    out
}

// Calls `visit` once for every position reached at the end of a complete turn.
fn turns(
    board: &mut Board,
    turn: Player,
    required: Option<Square>,
    visit: &mut dyn FnMut(&mut Board),
) {
    for mut mv in board.generate_moves(turn, required) {
        board.make_move(&mut mv, turn);
        if mv.is_capture() && board.any_captures_for_piece(mv.destination) {
            turns(board, turn, Some(mv.destination), visit);
        } else {
            visit(board);
        }
        board.unmake_move(&mv, turn);
    }
}
