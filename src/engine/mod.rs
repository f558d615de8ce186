//! Move-selection engines.
//!
//! Every engine implements [`Engine`]; which one plays is decided when it is
//! built (see [`crate::config::EngineConfig::build_engine`]).

use serde::Serialize;

use crate::board::Position;
use crate::error::SearchError;
use crate::search::{Score, SearchStats};

pub mod alphabeta;
pub mod simple;

pub use alphabeta::AlphaBetaEngine;
pub use simple::{Alphabetical, FirstMove, RandomMove};

/// A chosen move plus whatever the engine learned choosing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision<M> {
    pub best: M,
    /// Absent for engines that do not evaluate.
    pub score: Option<Score>,
    pub stats: SearchStats,
}

impl<M> Decision<M> {
    pub fn unscored(best: M) -> Self {
        Self { best, score: None, stats: SearchStats::default() }
    }
}

pub trait Engine<P: Position> {
    fn name(&self) -> &str;

    /// Picks a move for the side to move. `pos` is left as it was found.
    fn decide(&mut self, pos: &mut P) -> Result<Decision<P::Move>, SearchError>;

    fn select_move(&mut self, pos: &mut P) -> Result<P::Move, SearchError> {
        self.decide(pos).map(|d| d.best)
    }
}
