use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::board::Position;
use crate::engine::{Decision, Engine};
use crate::error::SearchError;

/// Plays a uniformly random legal move.
pub struct RandomMove<R = SmallRng> {
    rng: R,
}

impl RandomMove<SmallRng> {
    pub fn seeded(seed: u64) -> Self { Self::new(SmallRng::seed_from_u64(seed)) }
}

impl<R: Rng> RandomMove<R> {
    pub fn new(rng: R) -> Self { Self { rng } }
}

impl<P: Position, R: Rng> Engine<P> for RandomMove<R> {
    fn name(&self) -> &str { "random" }

    fn decide(&mut self, pos: &mut P) -> Result<Decision<P::Move>, SearchError> {
        let moves = pos.legal_moves();
        moves.choose(&mut self.rng).copied().map(Decision::unscored).ok_or(SearchError::NoLegalMoves)
    }
}

/// Plays the first legal move in UCI text order.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstMove;

impl<P: Position> Engine<P> for FirstMove {
    fn name(&self) -> &str { "first-move" }

    fn decide(&mut self, pos: &mut P) -> Result<Decision<P::Move>, SearchError> {
        first_by_key(pos, |p, m| p.uci(m))
    }
}

/// Plays the first legal move in SAN text order.
#[derive(Debug, Default, Clone, Copy)]
pub struct Alphabetical;

impl<P: Position> Engine<P> for Alphabetical {
    fn name(&self) -> &str { "alphabetical" }

    fn decide(&mut self, pos: &mut P) -> Result<Decision<P::Move>, SearchError> {
        first_by_key(pos, |p, m| p.san(m))
    }
}

fn first_by_key<P: Position>(pos: &P, key: impl Fn(&P, P::Move) -> String) -> Result<Decision<P::Move>, SearchError> {
    pos.legal_moves()
        .into_iter()
        .map(|m| (key(pos, m), m))
        .min_by(|a, b| a.0.cmp(&b.0))
        .map(|(_, m)| Decision::unscored(m))
        .ok_or(SearchError::NoLegalMoves)
}
