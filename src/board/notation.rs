use cozy_chess::{Board, File, Move, Piece, Square};

use crate::board::cozy::is_capture;

fn file_char(file: File) -> char { (b'a' + file as u8) as char }

fn rank_char(sq: Square) -> char { (b'1' + sq.rank() as u8) as char }

fn piece_letter(piece: Piece) -> char {
    match piece {
        Piece::Pawn => 'P',
        Piece::Knight => 'N',
        Piece::Bishop => 'B',
        Piece::Rook => 'R',
        Piece::Queen => 'Q',
        Piece::King => 'K',
    }
}

// cozy-chess encodes castling as the king capturing its own rook.
fn is_castle(board: &Board, mv: Move) -> bool {
    board.piece_on(mv.from) == Some(Piece::King) && board.color_on(mv.to) == Some(board.side_to_move())
}

fn is_kingside(mv: Move) -> bool { (mv.to.file() as u8) > (mv.from.file() as u8) }

/// Standard UCI text for a legal move (castling as `e1g1`, not `e1h1`).
pub fn uci(board: &Board, mv: Move) -> String {
    if is_castle(board, mv) {
        let file = if is_kingside(mv) { File::G } else { File::C };
        let to = Square::new(file, mv.from.rank());
        return format!("{}{}", mv.from, to);
    }
    format!("{}", mv)
}

/// Standard Algebraic Notation for a legal move.
pub fn san(board: &Board, mv: Move) -> String {
    let mut out = String::with_capacity(8);
    if is_castle(board, mv) {
        out.push_str(if is_kingside(mv) { "O-O" } else { "O-O-O" });
    } else {
        let piece = board.piece_on(mv.from).unwrap_or(Piece::Pawn);
        let capture = is_capture(board, mv);
        if piece == Piece::Pawn {
            if capture { out.push(file_char(mv.from.file())); }
        } else {
            out.push(piece_letter(piece));
            let mut rivals: Vec<Square> = Vec::new();
            board.generate_moves(|ml| {
                if ml.piece == piece {
                    for m in ml {
                        if m.to == mv.to && m.from != mv.from { rivals.push(m.from); }
                    }
                }
                false
            });
            if !rivals.is_empty() {
                let same_file = rivals.iter().any(|sq| sq.file() == mv.from.file());
                let same_rank = rivals.iter().any(|sq| sq.rank() == mv.from.rank());
                if !same_file {
                    out.push(file_char(mv.from.file()));
                } else if !same_rank {
                    out.push(rank_char(mv.from));
                } else {
                    out.push(file_char(mv.from.file()));
                    out.push(rank_char(mv.from));
                }
            }
        }
        if capture { out.push('x'); }
        out.push_str(&format!("{}", mv.to));
        if let Some(promo) = mv.promotion {
            out.push('=');
            out.push(piece_letter(promo));
        }
    }

    let mut child = board.clone();
    child.play(mv);
    if !child.checkers().is_empty() {
        let mut escapes = false;
        child.generate_moves(|_| { escapes = true; true });
        out.push(if escapes { '+' } else { '#' });
    }
    out
}
