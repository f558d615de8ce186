use crate::board::{Outcome, PieceKind, Position, Side};
use crate::search::Score;

// Terminal scoring: a win must outrank any material sum (at most 103 with
// every pawn promoted to a queen).
pub const WIN_SCORE: Score = 300;
pub const DRAW_SCORE: Score = 0;

pub const fn piece_value(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

// Side-agnostic material in pawns: positive means White has more material.
pub fn material<P: Position>(pos: &P) -> Score {
    pos.pieces()
        .into_iter()
        .map(|(side, kind)| match side {
            Side::White => piece_value(kind),
            Side::Black => -piece_value(kind),
        })
        .sum()
}

/// Static evaluation on the absolute White-positive scale.
pub fn evaluate<P: Position>(pos: &P) -> Score {
    match pos.outcome() {
        Outcome::Ongoing => material(pos),
        Outcome::WhiteWins => WIN_SCORE,
        Outcome::BlackWins => -WIN_SCORE,
        Outcome::Draw => DRAW_SCORE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::cozy::ChessPosition;

    #[test]
    fn startpos_material_is_balanced() {
        assert_eq!(evaluate(&ChessPosition::startpos()), 0);
    }

    #[test]
    fn missing_black_queen_is_nine_pawns() {
        let pos = ChessPosition::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").expect("valid fen");
        assert_eq!(evaluate(&pos), 9);
    }
}
