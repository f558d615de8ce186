use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{Position, Side};
use crate::engine::{Decision, Engine};
use crate::error::SearchError;
use crate::search::{SearchParams, Searcher, INFINITY};

/// Fixed-depth alpha-beta player: the top-level search entry point.
pub struct AlphaBetaEngine<R = SmallRng> {
    searcher: Searcher<R>,
    depth: u32,
}

impl AlphaBetaEngine<SmallRng> {
    pub fn seeded(seed: u64, params: SearchParams) -> Self {
        Self::new(SmallRng::seed_from_u64(seed), params)
    }
}

impl Default for AlphaBetaEngine<SmallRng> {
    fn default() -> Self { Self::new(SmallRng::from_entropy(), SearchParams::default()) }
}

impl<R: Rng> AlphaBetaEngine<R> {
    pub fn new(rng: R, params: SearchParams) -> Self {
        Self { searcher: Searcher::new(rng, params.quiescence_depth), depth: params.depth.max(1) }
    }

    pub fn depth(&self) -> u32 { self.depth }
}

impl<P: Position, R: Rng> Engine<P> for AlphaBetaEngine<R> {
    fn name(&self) -> &str { "alphabeta" }

    fn decide(&mut self, pos: &mut P) -> Result<Decision<P::Move>, SearchError> {
        let legal = pos.legal_moves();
        if legal.is_empty() { return Err(SearchError::NoLegalMoves); }
        let outcome = pos.outcome();
        if outcome.is_terminal() { return Err(SearchError::GameOver(outcome)); }

        self.searcher.reset_stats();
        let maximizing = pos.side_to_move() == Side::White;
        let (best, score) = self.searcher.search(pos, self.depth, maximizing, -INFINITY, INFINITY);
        let stats = self.searcher.stats();
        let best = match best {
            Some(m) if legal.contains(&m) => m,
            Some(m) => return Err(SearchError::InvariantViolation { mv: pos.uci(m) }),
            None => return Err(SearchError::InvariantViolation { mv: "(none)".to_string() }),
        };
        log::debug!(
            "depth {} bestmove {} score {} nodes {} qnodes {} cutoffs {}",
            self.depth, pos.uci(best), score, stats.nodes, stats.quiescence_nodes, stats.cutoffs
        );
        Ok(Decision { best, score: Some(score), stats })
    }
}
