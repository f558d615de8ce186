use minibot::board::cozy::ChessPosition;
use minibot::perft::perft;

#[test]
fn perft_startpos_small_depths() {
    let mut p = ChessPosition::startpos();
    assert_eq!(perft(&mut p, 1), 20);
    assert_eq!(perft(&mut p, 2), 400);
    assert_eq!(perft(&mut p, 3), 8902);
    assert_eq!(p.ply(), 0);
}

#[test]
fn perft_kiwipete() {
    // Castling, en passant and promotions all show up by depth 2.
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    let mut p = ChessPosition::from_fen(fen).expect("valid fen");
    assert_eq!(perft(&mut p, 1), 48);
    assert_eq!(perft(&mut p, 2), 2039);
    assert_eq!(p.fen(), ChessPosition::from_fen(fen).expect("valid fen").fen());
}
