//! Minimax opponent for Damista
//!
//! Depth-bounded search over the in-place make/unmake engine, with
//! capture chains explored at no depth cost.

pub mod params;
pub mod search;
pub mod stats;

pub use self::params::SearchParams;
pub use self::search::{evaluate, Search, LOSS_FOR_BLACK, LOSS_FOR_RED};
pub use self::stats::SearchStats;
pub use crate::board::Move;
