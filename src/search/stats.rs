//! Search statistics
//!
//! Tracks nodes visited, leaf evaluations, free capture-chain extensions
//! and timing for one top-level search.

use std::fmt;
use std::time::{Duration, Instant};

/// Search statistics
#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    /// Total nodes searched
    pub nodes: u64,

    /// Nodes scored by the material heuristic
    pub leaves: u64,

    /// Recursions that continued a capture chain without spending depth
    pub chain_extensions: u64,

    /// Nodes where the side to move had no legal move
    pub terminal_nodes: u64,

    /// Set once the node or time limit forced early evaluation
    pub limit_hit: bool,

    /// Search start time
    pub start_time: Option<Instant>,

    /// Time spent searching
    pub search_time: Duration,
}

impl SearchStats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Start timing
    pub fn start_timing(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Update elapsed search time
    pub fn update_timing(&mut self) {
        if let Some(start) = self.start_time {
            self.search_time = start.elapsed();
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start_time
            .map(|s| s.elapsed().as_millis() as u64)
            .unwrap_or(0)
    }

    pub fn inc_node(&mut self) {
        self.nodes += 1;
    }

    pub fn inc_leaf(&mut self) {
        self.leaves += 1;
    }

    pub fn inc_chain_extension(&mut self) {
        self.chain_extensions += 1;
    }

    pub fn inc_terminal(&mut self) {
        self.terminal_nodes += 1;
    }

    /// Nodes per second over the finished search
    pub fn nps(&self) -> u64 {
        let ms = self.search_time.as_millis() as u64;
        if ms > 0 {
            self.nodes * 1000 / ms
        } else {
            0
        }
    }

    /// Reset all statistics
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes {} leaves {} chains {} terminal {} time {}ms nps {}{}",
            self.nodes,
            self.leaves,
            self.chain_extensions,
            self.terminal_nodes,
            self.search_time.as_millis(),
            self.nps(),
            if self.limit_hit { " (limit hit)" } else { "" }
        )
    }
}
