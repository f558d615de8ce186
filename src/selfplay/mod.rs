use serde::Serialize;

use crate::board::cozy::ChessPosition;
use crate::board::{Outcome, Position, Side};
use crate::engine::Engine;
use crate::error::SearchError;

#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub moves: Vec<String>,
    /// `Ongoing` when the ply cap ended the game.
    pub outcome: Outcome,
}

/// Plays one game from `start` until it ends or `max_plies` moves are made.
pub fn play_game(
    white: &mut dyn Engine<ChessPosition>,
    black: &mut dyn Engine<ChessPosition>,
    start: ChessPosition,
    max_plies: usize,
) -> Result<GameRecord, SearchError> {
    let mut pos = start;
    let mut moves = Vec::new();
    loop {
        let outcome = pos.outcome();
        if outcome.is_terminal() || moves.len() >= max_plies {
            return Ok(GameRecord { moves, outcome });
        }
        let mv = match pos.side_to_move() {
            Side::White => white.select_move(&mut pos)?,
            Side::Black => black.select_move(&mut pos)?,
        };
        moves.push(pos.uci(mv));
        pos.push(mv);
    }
}

/// Match tally from the first engine's point of view.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub unfinished: u32,
}

impl MatchSummary {
    pub fn record(&mut self, outcome: Outcome, first_engine_side: Side) {
        match outcome {
            Outcome::Ongoing => self.unfinished += 1,
            Outcome::Draw => self.draws += 1,
            o if o == Outcome::win_for(first_engine_side) => self.wins += 1,
            _ => self.losses += 1,
        }
    }

    pub fn games(&self) -> u32 { self.wins + self.losses + self.draws + self.unfinished }

    /// Points per game with draws counted as half.
    pub fn score(&self) -> f64 {
        let decided = self.wins + self.losses + self.draws;
        if decided == 0 { return 0.0; }
        (self.wins as f64 + 0.5 * self.draws as f64) / decided as f64
    }
}

/// Plays `games` games between two engines, alternating colors; the first
/// engine takes White in even-numbered games.
pub fn play_match(
    first: &mut dyn Engine<ChessPosition>,
    second: &mut dyn Engine<ChessPosition>,
    games: usize,
    max_plies: usize,
    mut on_game: impl FnMut(usize, &GameRecord),
) -> Result<MatchSummary, SearchError> {
    let mut summary = MatchSummary::default();
    for gi in 0..games {
        let (record, first_side) = if gi % 2 == 0 {
            (play_game(first, second, ChessPosition::startpos(), max_plies)?, Side::White)
        } else {
            (play_game(second, first, ChessPosition::startpos(), max_plies)?, Side::Black)
        };
        summary.record(record.outcome, first_side);
        on_game(gi, &record);
    }
    Ok(summary)
}
