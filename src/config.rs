use std::path::Path;

use anyhow::Context;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::engine::{AlphaBetaEngine, Alphabetical, Engine, FirstMove, RandomMove};
use crate::search::{SearchParams, DEFAULT_DEPTH, DEFAULT_QUIESCENCE_DEPTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    AlphaBeta,
    Random,
    FirstMove,
    Alphabetical,
}

/// Engine settings, loadable from JSON. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub strategy: Strategy,
    pub depth: u32,
    pub quiescence_depth: u32,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::AlphaBeta,
            depth: DEFAULT_DEPTH,
            quiescence_depth: DEFAULT_QUIESCENCE_DEPTH,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> { serde_json::from_str(s) }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading engine config {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("parsing engine config {}", path.display()))
    }

    pub fn search_params(&self) -> SearchParams {
        SearchParams { depth: self.depth, quiescence_depth: self.quiescence_depth }
    }

    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        }
    }

    pub fn build_engine<P: Position + 'static>(&self) -> Box<dyn Engine<P>> {
        match self.strategy {
            Strategy::AlphaBeta => Box::new(AlphaBetaEngine::new(self.rng(), self.search_params())),
            Strategy::Random => Box::new(RandomMove::new(self.rng())),
            Strategy::FirstMove => Box::new(FirstMove),
            Strategy::Alphabetical => Box::new(Alphabetical),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_takes_defaults() {
        let cfg = EngineConfig::from_json_str("{}").expect("valid json");
        assert_eq!(cfg, EngineConfig::default());
        assert_eq!(cfg.search_params(), SearchParams::default());
    }

    #[test]
    fn strategy_names_are_kebab_case() {
        let cfg = EngineConfig::from_json_str(r#"{"strategy":"first-move","depth":2,"seed":9}"#).expect("valid json");
        assert_eq!(cfg.strategy, Strategy::FirstMove);
        assert_eq!(cfg.depth, 2);
        assert_eq!(cfg.quiescence_depth, DEFAULT_QUIESCENCE_DEPTH);
        assert_eq!(cfg.seed, Some(9));
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        assert!(EngineConfig::from_json_str(r#"{"strategy":"stockfish"}"#).is_err());
    }
}
