//! Main search engine implementation for Damista
//!
//! Plain depth-limited minimax. Every candidate is applied to the board in
//! place, explored, then undone, so no board copies are made below the root.
//! Red maximises the score and Black minimises it.

use super::params::SearchParams;
use super::stats::SearchStats;
use crate::board::{Board, Move, Player, Square};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use tracing::{debug, trace};

/// Score of a position where Red has no legal move.
pub const LOSS_FOR_RED: f64 = f64::NEG_INFINITY;
/// Score of a position where Black has no legal move.
pub const LOSS_FOR_BLACK: f64 = f64::INFINITY;

const TIE_EPSILON: f64 = 1e-9;
const TIME_CHECK_INTERVAL: u64 = 1024;

/// Static evaluation: material from Red's point of view, kings worth 1.8 men.
pub fn evaluate(board: &Board) -> f64 {
    board.material()
}

/// Main search engine
pub struct Search {
    params: SearchParams,
    stats: SearchStats,
    /// Tie-break source, kept apart from scoring
    rng: StdRng,
}

impl Search {
    pub fn new(params: SearchParams) -> Self {
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            params,
            stats: SearchStats::new(),
            rng,
        }
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Replaces the parameters; a new seed reseeds the tie-break generator.
    pub fn set_params(&mut self, params: SearchParams) {
        if let Some(seed) = params.seed {
            if self.params.seed != Some(seed) {
                self.rng = StdRng::seed_from_u64(seed);
            }
        }
        self.params = params;
    }

    /// Statistics of the last top-level search
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best move for `turn` looking `depth` turns ahead.
    ///
    /// With `required` set only jumps by the piece on that square are
    /// considered. The returned move carries its minimax score; when there is
    /// nothing to play (or `depth` is 0) it is a sentinel for which
    /// [`Move::is_null`] holds and must not be applied.
    pub fn find_best_move(
        &mut self,
        board: &mut Board,
        turn: Player,
        depth: u8,
        required: Option<Square>,
    ) -> Move {
        self.stats.reset();
        self.stats.start_timing();

        let best = self.minimax(board, turn, depth, required);

        self.stats.update_timing();
        debug!(
            side = %turn,
            depth,
            best = %best,
            score = best.score,
            nodes = self.stats.nodes,
            elapsed_ms = self.stats.search_time.as_millis() as u64,
            "search finished"
        );
        best
    }

    /// Plays a full turn for `turn`: the best move, then the best continuation
    /// for as long as the moved piece can keep capturing. Returns the moves
    /// played, empty if `turn` had no move.
    pub fn make_ai_move(&mut self, board: &mut Board, turn: Player) -> Vec<Move> {
        let depth = self.params.max_depth.max(1);
        let mut chain = Vec::new();
        let mut required = None;

        loop {
            let mut mv = self.find_best_move(board, turn, depth, required);
            if mv.is_null() {
                break;
            }
            board.make_move(&mut mv, turn);
            trace!(side = %turn, mv = %mv, "ai move applied");
            chain.push(mv);

            if mv.is_capture() && board.any_captures_for_piece(mv.destination) {
                required = Some(mv.destination);
            } else {
                break;
            }
        }
        chain
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        turn: Player,
        depth: u8,
        required: Option<Square>,
    ) -> Move {
        self.stats.inc_node();

        // The root always expands, so a limit never leaves the caller without a move
        if depth == 0 || (self.stats.nodes > 1 && self.limit_reached()) {
            self.stats.inc_leaf();
            return Move::sentinel(evaluate(board));
        }

        let candidates = board.generate_moves(turn, required);
        if candidates.is_empty() {
            self.stats.inc_terminal();
            return Move::sentinel(match turn {
                Player::Red => LOSS_FOR_RED,
                Player::Black => LOSS_FOR_BLACK,
            });
        }

        let mut scored = Vec::with_capacity(candidates.len());
        for mut mv in candidates {
            board.make_move(&mut mv, turn);

            let reply = if mv.is_capture() && board.any_captures_for_piece(mv.destination) {
                self.stats.inc_chain_extension();
                self.minimax(board, turn, depth, Some(mv.destination))
            } else {
                self.minimax(board, turn.opponent(), depth - 1, None)
            };

            board.unmake_move(&mv, turn);
            mv.score = reply.score;
            scored.push(mv);
        }

        self.select(turn, &scored)
    }

    /// Best score for `turn`, chosen uniformly among exact ties.
    fn select(&mut self, turn: Player, scored: &[Move]) -> Move {
        let best = scored
            .iter()
            .map(|m| m.score)
            .fold(None, |acc: Option<f64>, s| match acc {
                None => Some(s),
                Some(b) if turn == Player::Red => Some(b.max(s)),
                Some(b) => Some(b.min(s)),
            })
            .unwrap_or(0.0);

        let ties: Vec<Move> = scored
            .iter()
            .filter(|m| m.score == best || (m.score - best).abs() < TIE_EPSILON)
            .copied()
            .collect();

        let chosen = if self.params.randomize {
            ties.choose(&mut self.rng).copied()
        } else {
            ties.first().copied()
        };
        let mut chosen = chosen.unwrap_or(scored[0]);
        chosen.score = best;
        chosen
    }

    fn limit_reached(&mut self) -> bool {
        if !self.params.is_limited() {
            return false;
        }
        if self.stats.limit_hit {
            return true;
        }
        if self.params.node_limit > 0 && self.stats.nodes > self.params.node_limit {
            self.stats.limit_hit = true;
        } else if self.params.time_limit_ms > 0
            && self.stats.nodes % TIME_CHECK_INTERVAL == 0
            && self.stats.elapsed_ms() >= self.params.time_limit_ms
        {
            self.stats.limit_hit = true;
        }
        self.stats.limit_hit
    }
}
