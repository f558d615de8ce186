use minibot::board::cozy::ChessPosition;
use minibot::board::Position;
use pretty_assertions::assert_eq;

fn san_of(fen: &str, uci: &str) -> String {
    let p = if fen == "startpos" { ChessPosition::startpos() } else { ChessPosition::from_fen(fen).expect("valid fen") };
    let mv = p.parse_uci(uci).unwrap_or_else(|| panic!("{uci} should be legal in {fen}"));
    assert_eq!(p.uci(mv), uci);
    p.san(mv)
}

#[test]
fn pawn_and_piece_moves() {
    assert_eq!(san_of("startpos", "e2e4"), "e4");
    assert_eq!(san_of("startpos", "g1f3"), "Nf3");
    assert_eq!(san_of("k7/8/8/3q4/4P3/8/8/7K w - - 0 1", "e4d5"), "exd5");
}

#[test]
fn castling_uses_king_destination_in_uci() {
    let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
    assert_eq!(san_of(fen, "e1g1"), "O-O");
    assert_eq!(san_of(fen, "e1c1"), "O-O-O");
    let p = ChessPosition::from_fen(fen).expect("valid fen");
    assert!(p.parse_uci("e1h1").is_none(), "king-takes-rook form is not standard UCI");
}

#[test]
fn ambiguous_moves_are_disambiguated() {
    assert_eq!(san_of("4k3/8/8/8/8/8/8/1N3N1K w - - 0 1", "b1d2"), "Nbd2");
    assert_eq!(san_of("4k3/8/8/8/8/8/8/1N3N1K w - - 0 1", "f1d2"), "Nfd2");
    assert_eq!(san_of("4k3/8/8/R7/8/8/8/R6K w - - 0 1", "a1a3"), "R1a3");
}

#[test]
fn promotion_check_and_mate_suffixes() {
    assert_eq!(san_of("8/4P3/8/8/8/8/k7/7K w - - 0 1", "e7e8q"), "e8=Q");
    assert_eq!(san_of("6k1/5ppp/8/8/8/8/8/R6K w - - 0 1", "a1a8"), "Ra8#");
    assert_eq!(san_of("6k1/8/8/8/8/8/8/R6K w - - 0 1", "a1a8"), "Ra8+");
}
