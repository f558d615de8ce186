//! Fixed-depth minimax with alpha-beta pruning and a capture-only
//! quiescence extension, scored by material.

use rand::Rng;

pub mod alphabeta;
pub mod eval;
pub mod ordering;
pub mod qsearch;
pub mod stats;

pub use stats::SearchStats;

/// Absolute score in pawns; positive favors White.
pub type Score = i32;

/// Unbounded window edge. Never produced by the evaluator.
pub const INFINITY: Score = i32::MAX;

pub const DEFAULT_DEPTH: u32 = 4;
pub const DEFAULT_QUIESCENCE_DEPTH: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    pub depth: u32,
    pub quiescence_depth: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { depth: DEFAULT_DEPTH, quiescence_depth: DEFAULT_QUIESCENCE_DEPTH }
    }
}

/// Search state for one engine: the tie-break RNG, the quiescence horizon
/// and the counters of the current search.
pub struct Searcher<R> {
    rng: R,
    quiescence_depth: u32,
    stats: SearchStats,
}

impl<R: Rng> Searcher<R> {
    pub fn new(rng: R, quiescence_depth: u32) -> Self {
        Self { rng, quiescence_depth, stats: SearchStats::default() }
    }
}

impl<R> Searcher<R> {
    pub fn stats(&self) -> SearchStats { self.stats }

    pub fn reset_stats(&mut self) { self.stats = SearchStats::default(); }
}
