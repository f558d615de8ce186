use serde::Serialize;

/// Counters for a single search, owned by the searcher.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Full-width nodes entered, leaves included.
    pub nodes: u64,
    pub quiescence_nodes: u64,
    /// Static evaluations at quiescence leaves.
    pub evaluations: u64,
    /// Branches abandoned on `alpha >= beta`.
    pub cutoffs: u64,
}

impl SearchStats {
    pub fn total_nodes(&self) -> u64 { self.nodes + self.quiescence_nodes }
}
