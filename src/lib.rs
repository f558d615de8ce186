// Material-only alpha-beta chess bot with a capture quiescence extension
pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod perft;
pub mod search;
pub mod selfplay;
pub mod uci;

pub use board::{Outcome, Position, Side};
pub use engine::{Decision, Engine};
pub use error::{PositionError, SearchError};
