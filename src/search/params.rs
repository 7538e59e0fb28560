//! Search parameters and configuration
//!
//! Controls the depth budget, optional node/time cutoffs and the
//! tie-break randomness of the engine.

/// Search parameters for the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Number of turn switches explored below the root. Capture chains are free.
    pub max_depth: u8,

    /// Node limit (0 = unlimited)
    pub node_limit: u64,

    /// Time limit in milliseconds (0 = unlimited)
    pub time_limit_ms: u64,

    /// Seed for the tie-break generator (None = seeded from the OS)
    pub seed: Option<u64>,

    /// Pick uniformly among equally scored moves; when disabled the first
    /// tied candidate in generation order wins
    pub randomize: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_depth: 3,
            node_limit: 0,
            time_limit_ms: 0,
            seed: None,
            randomize: true,
        }
    }
}

impl SearchParams {
    /// Create new search params with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum depth in turns
    pub fn max_depth(mut self, depth: u8) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set node limit
    pub fn node_limit(mut self, limit: u64) -> Self {
        self.node_limit = limit;
        self
    }

    /// Set time limit in milliseconds
    pub fn time_limit(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// Fix the tie-break seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable random tie-breaking
    pub fn randomize(mut self, enable: bool) -> Self {
        self.randomize = enable;
        self
    }

    pub fn is_limited(&self) -> bool {
        self.node_limit > 0 || self.time_limit_ms > 0
    }
}
