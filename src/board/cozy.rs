use cozy_chess::{BitBoard, Board, Color, Move, Piece, Square};

use crate::board::{notation, Outcome, PieceKind, Position, Side};
use crate::error::PositionError;

/// Halfmove clock at which the game is drawn without a claim.
const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;
/// cozy-chess rejects and saturates clocks past this value.
const COZY_HALFMOVE_LIMIT: u32 = 100;
/// Occurrences of a position that draw without a claim.
const FIVEFOLD: usize = 5;

/// A `cozy_chess::Board` with a make/unmake stack.
///
/// cozy-chess boards are copy-make, so `push` stores the previous board and
/// `pop` restores it. The stack doubles as the repetition history.
///
/// The halfmove clock lives here rather than in the board since cozy-chess
/// stops counting at 100.
#[derive(Clone, Debug)]
pub struct ChessPosition {
    board: Board,
    halfmove: u32,
    stack: Vec<(Board, u32)>,
}

impl ChessPosition {
    pub fn startpos() -> Self {
        Self::from_board(Board::default())
    }

    pub fn from_board(board: Board) -> Self {
        let halfmove = u32::from(board.halfmove_clock());
        Self { board, halfmove, stack: Vec::with_capacity(128) }
    }

    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let halfmove = match fields.get(4) {
            Some(f) => f
                .parse::<u32>()
                .map_err(|_| PositionError::InvalidFen(format!("bad halfmove clock {f:?}")))?,
            None => 0,
        };
        let clamped = halfmove.min(COZY_HALFMOVE_LIMIT).to_string();
        let mut normalized = fields.clone();
        if let Some(f) = normalized.get_mut(4) { *f = clamped.as_str(); }
        let board = Board::from_fen(&normalized.join(" "), false)
            .map_err(|e| PositionError::InvalidFen(format!("{e:?}")))?;
        Ok(Self { board, halfmove, stack: Vec::with_capacity(128) })
    }

    pub fn from_fen_and_moves(fen: &str, moves: &[String]) -> Result<Self, PositionError> {
        let mut pos = Self::from_fen(fen)?;
        for m in moves { pos.make_move_uci(m)?; }
        Ok(pos)
    }

    pub fn set_from_start_and_moves(moves: &[String]) -> Result<Self, PositionError> {
        let mut pos = Self::startpos();
        for m in moves { pos.make_move_uci(m)?; }
        Ok(pos)
    }

    /// FEN with the uncapped halfmove clock.
    pub fn fen(&self) -> String {
        let board_fen = self.board.to_string();
        let mut fields: Vec<String> = board_fen.split(' ').map(str::to_string).collect();
        if let Some(f) = fields.get_mut(4) { *f = self.halfmove.to_string(); }
        fields.join(" ")
    }

    /// Plies since the last capture or pawn move.
    pub fn halfmove_clock(&self) -> u32 { self.halfmove }

    /// Plies pushed since construction.
    pub fn ply(&self) -> usize { self.stack.len() }

    /// Finds the legal move whose standard UCI text is `mv_uci`.
    pub fn parse_uci(&self, mv_uci: &str) -> Option<Move> {
        let mut found = None;
        self.board.generate_moves(|moves| {
            for m in moves {
                if notation::uci(&self.board, m) == mv_uci { found = Some(m); break; }
            }
            found.is_some()
        });
        found
    }

    pub fn make_move_uci(&mut self, mv_uci: &str) -> Result<(), PositionError> {
        match self.parse_uci(mv_uci) {
            Some(m) => { self.push(m); Ok(()) }
            None => Err(PositionError::IllegalMove(mv_uci.to_string())),
        }
    }

    fn has_legal_move(&self) -> bool {
        let mut any = false;
        self.board.generate_moves(|_| { any = true; true });
        any
    }

    fn repetitions(&self) -> usize {
        let key = repetition_key(&self.board);
        // Nothing before the last capture or pawn move can recur.
        1 + self
            .stack
            .iter()
            .rev()
            .take(self.halfmove as usize)
            .filter(|(b, _)| repetition_key(b) == key)
            .count()
    }
}

/// Position identity for repetition: the en passant file only counts when
/// the capture is actually available.
fn repetition_key(board: &Board) -> u64 {
    if board.en_passant().is_some() && has_en_passant_capture(board) {
        board.hash()
    } else {
        board.hash_without_ep()
    }
}

fn has_en_passant_capture(board: &Board) -> bool {
    let mut found = false;
    board.generate_moves(|moves| {
        found = moves.into_iter().any(|m| is_en_passant(board, m));
        found
    });
    found
}

fn is_en_passant(board: &Board, mv: Move) -> bool {
    board.piece_on(mv.from) == Some(Piece::Pawn)
        && mv.from.file() != mv.to.file()
        && board.piece_on(mv.to).is_none()
}

fn side_of(color: Color) -> Side {
    match color {
        Color::White => Side::White,
        Color::Black => Side::Black,
    }
}

fn color_of(side: Side) -> Color {
    match side {
        Side::White => Color::White,
        Side::Black => Color::Black,
    }
}

fn kind_of(piece: Piece) -> PieceKind {
    match piece {
        Piece::Pawn => PieceKind::Pawn,
        Piece::Knight => PieceKind::Knight,
        Piece::Bishop => PieceKind::Bishop,
        Piece::Rook => PieceKind::Rook,
        Piece::Queen => PieceKind::Queen,
        Piece::King => PieceKind::King,
    }
}

fn is_dark(sq: Square) -> bool {
    (sq.file() as usize + sq.rank() as usize) % 2 == 0
}

/// True if `color` cannot possibly deliver mate with the material it has.
fn insufficient_material(board: &Board, color: Color) -> bool {
    let ours = board.colors(color);
    let theirs = board.colors(color_of(side_of(color).opponent()));
    let heavy = board.pieces(Piece::Pawn) | board.pieces(Piece::Rook) | board.pieces(Piece::Queen);
    if !(ours & heavy).is_empty() { return false; }
    let knights = board.pieces(Piece::Knight);
    if !(ours & knights).is_empty() {
        let others = theirs & !board.pieces(Piece::King) & !board.pieces(Piece::Queen);
        return ours.len() <= 2 && others.is_empty();
    }
    let bishops = board.pieces(Piece::Bishop);
    if !(ours & bishops).is_empty() {
        let same_color = bishops.into_iter().all(is_dark) || bishops.into_iter().all(|sq| !is_dark(sq));
        return same_color && board.pieces(Piece::Pawn).is_empty() && knights.is_empty();
    }
    true
}

pub(crate) fn is_capture(board: &Board, mv: Move) -> bool {
    let them = color_of(side_of(board.side_to_move()).opponent());
    board.color_on(mv.to) == Some(them) || is_en_passant(board, mv)
}

impl Position for ChessPosition {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        let mut moves: Vec<Move> = Vec::with_capacity(64);
        self.board.generate_moves(|ml| { moves.extend(ml); false });
        moves
    }

    fn is_capture(&self, mv: Move) -> bool { is_capture(&self.board, mv) }

    fn push(&mut self, mv: Move) {
        let irreversible = self.board.piece_on(mv.from) == Some(Piece::Pawn) || is_capture(&self.board, mv);
        self.stack.push((self.board.clone(), self.halfmove));
        self.board.play(mv);
        self.halfmove = if irreversible { 0 } else { self.halfmove + 1 };
    }

    fn pop(&mut self) {
        if let Some((prev, halfmove)) = self.stack.pop() {
            self.board = prev;
            self.halfmove = halfmove;
        }
    }

    fn outcome(&self) -> Outcome {
        let stm = self.board.side_to_move();
        if !self.has_legal_move() {
            if self.board.checkers().is_empty() { return Outcome::Draw; }
            return Outcome::win_for(side_of(stm).opponent());
        }
        if insufficient_material(&self.board, Color::White) && insufficient_material(&self.board, Color::Black) {
            return Outcome::Draw;
        }
        if self.halfmove >= SEVENTY_FIVE_MOVE_PLIES { return Outcome::Draw; }
        if self.repetitions() >= FIVEFOLD { return Outcome::Draw; }
        Outcome::Ongoing
    }

    fn side_to_move(&self) -> Side { side_of(self.board.side_to_move()) }

    fn pieces(&self) -> Vec<(Side, PieceKind)> {
        let occupied: BitBoard = self.board.occupied();
        let mut out = Vec::with_capacity(32);
        for sq in occupied {
            if let (Some(piece), Some(color)) = (self.board.piece_on(sq), self.board.color_on(sq)) {
                out.push((side_of(color), kind_of(piece)));
            }
        }
        out
    }

    fn uci(&self, mv: Move) -> String { notation::uci(&self.board, mv) }

    fn san(&self, mv: Move) -> String { notation::san(&self.board, mv) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(fen: &str) -> ChessPosition { ChessPosition::from_fen(fen).expect("valid fen") }

    #[test]
    fn castling_is_not_a_capture() {
        let p = pos("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let castle = p.parse_uci("e1g1").expect("castling is legal");
        assert!(!p.is_capture(castle));
    }

    #[test]
    fn en_passant_is_a_capture() {
        let p = pos("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
        let ep = p.parse_uci("e5d6").expect("en passant is legal");
        assert!(p.is_capture(ep));
    }

    #[test]
    fn fivefold_repetition_is_a_draw() {
        let mut p = ChessPosition::startpos();
        assert_eq!(p.outcome(), Outcome::Ongoing);
        for _ in 0..4 {
            for m in ["g1f3", "g8f6", "f3g1", "f6g8"] { p.make_move_uci(m).expect("legal"); }
        }
        assert_eq!(p.outcome(), Outcome::Draw);
        p.pop();
        assert_eq!(p.outcome(), Outcome::Ongoing);
    }

    #[test]
    fn lone_minor_piece_cannot_win() {
        assert_eq!(pos("k7/8/8/8/8/8/8/5B1K w - - 0 1").outcome(), Outcome::Draw);
        assert_eq!(pos("k7/8/8/8/8/8/8/4RB1K w - - 0 1").outcome(), Outcome::Ongoing);
        assert_eq!(pos("kb6/8/8/8/8/8/8/5B1K w - - 0 1").outcome(), Outcome::Ongoing);
    }

    #[test]
    fn seventy_five_move_rule_draws() {
        let mut p = pos("n6k/8/8/8/8/8/8/N6K w - - 149 100");
        assert_eq!(p.outcome(), Outcome::Ongoing);
        p.make_move_uci("h1g1").expect("legal");
        assert_eq!(p.halfmove_clock(), 150);
        assert_eq!(p.outcome(), Outcome::Draw);
        p.pop();
        assert_eq!(p.halfmove_clock(), 149);
        assert_eq!(p.outcome(), Outcome::Ongoing);
    }

    #[test]
    fn pawn_moves_and_captures_reset_the_clock() {
        let mut p = pos("4k3/8/8/8/8/8/4P3/4K3 w - - 149 100");
        p.make_move_uci("e2e4").expect("legal");
        assert_eq!(p.halfmove_clock(), 0);
        assert_eq!(p.outcome(), Outcome::Ongoing);

        let mut p = pos("n6k/8/8/8/8/8/2n5/N6K w - - 149 100");
        p.make_move_uci("a1c2").expect("legal");
        assert_eq!(p.halfmove_clock(), 0);
        assert_eq!(p.outcome(), Outcome::Ongoing);
        p.pop();
        p.make_move_uci("a1b3").expect("legal");
        assert_eq!(p.outcome(), Outcome::Draw);
    }

    #[test]
    fn clock_past_one_hundred_survives_fen() {
        let fen = "n6k/8/8/8/8/8/8/N6K w - - 120 90";
        let p = pos(fen);
        assert_eq!(p.halfmove_clock(), 120);
        assert_eq!(p.fen(), fen);
        assert_eq!(p.outcome(), Outcome::Ongoing);
        assert_eq!(pos("n6k/8/8/8/8/8/8/N6K w - - 150 90").outcome(), Outcome::Draw);
        assert!(matches!(
            ChessPosition::from_fen("n6k/8/8/8/8/8/8/N6K w - - x 90"),
            Err(PositionError::InvalidFen(_))
        ));
    }

    #[test]
    fn unusable_en_passant_file_does_not_block_repetition() {
        let mut p = pos("4k1n1/8/8/8/8/8/4P3/4K1N1 w - - 0 1");
        p.make_move_uci("e2e4").expect("legal");
        for _ in 0..4 {
            assert_eq!(p.outcome(), Outcome::Ongoing);
            for m in ["g8f6", "g1f3", "f6g8", "f3g1"] { p.make_move_uci(m).expect("legal"); }
        }
        assert_eq!(p.outcome(), Outcome::Draw);
    }

    #[test]
    fn illegal_uci_move_is_rejected() {
        let mut p = ChessPosition::startpos();
        assert_eq!(p.make_move_uci("e2e5"), Err(PositionError::IllegalMove("e2e5".to_string())));
        assert_eq!(p.ply(), 0);
    }
}
