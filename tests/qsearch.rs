use minibot::board::cozy::ChessPosition;
use minibot::board::Position;
use minibot::search::eval::{evaluate, WIN_SCORE};
use minibot::search::{Searcher, INFINITY};
use pretty_assertions::assert_eq;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn searcher() -> Searcher<SmallRng> { Searcher::new(SmallRng::seed_from_u64(3), 3) }

fn pos(fen: &str) -> ChessPosition { ChessPosition::from_fen(fen).expect("valid fen") }

#[test]
fn qsearch_takes_hanging_queen() {
    // Black bishop takes the white queen; what is left is a dead draw.
    let mut p = pos("4k3/8/8/8/5Q2/8/8/2b4K b - - 0 1");
    let stand = evaluate(&p);
    let (mv, score) = searcher().quiescence(&mut p, false, -INFINITY, INFINITY, 3);
    assert_eq!(stand, 6);
    assert_eq!(mv.map(|m| p.uci(m)), Some("c1f4".to_string()));
    assert_eq!(score, 0);
}

#[test]
fn qsearch_equals_eval_without_captures() {
    let mut p = pos("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    let (mv, score) = searcher().quiescence(&mut p, true, -INFINITY, INFINITY, 3);
    assert!(mv.is_none());
    assert_eq!(score, evaluate(&p));
}

#[test]
fn exhausted_extension_returns_static_eval() {
    let mut p = pos("4k3/8/8/8/5Q2/8/8/2b4K b - - 0 1");
    let mut s = searcher();
    let (mv, score) = s.quiescence(&mut p, false, -INFINITY, INFINITY, 0);
    assert!(mv.is_none());
    assert_eq!(score, 6);
    assert_eq!(s.stats().evaluations, 1);
}

#[test]
fn terminal_position_is_evaluated_directly() {
    let mut p = pos("R5k1/5ppp/8/8/8/8/8/7K b - - 1 1");
    let (mv, score) = searcher().quiescence(&mut p, false, -INFINITY, INFINITY, 3);
    assert!(mv.is_none());
    assert_eq!(score, WIN_SCORE);
}

#[test]
fn captures_are_played_out_without_stand_pat() {
    // Qxd5 is the only capture and loses the queen to cxd5; quiescence has
    // no option to stop before it.
    let mut p = pos("k7/8/2p5/3p4/8/8/3Q4/7K w - - 0 1");
    assert_eq!(evaluate(&p), 7);
    let (mv, score) = searcher().quiescence(&mut p, true, -INFINITY, INFINITY, 3);
    assert_eq!(mv.map(|m| p.uci(m)), Some("d2d5".to_string()));
    assert_eq!(score, -1);
}

#[test]
fn qsearch_leaves_position_untouched() {
    let mut p = pos("r1bqkbnr/pppp1ppp/2n5/4p3/3PP3/5N2/PPP2PPP/RNBQKB1R b KQkq - 0 3");
    let before = p.fen();
    let _ = searcher().quiescence(&mut p, false, -INFINITY, INFINITY, 3);
    assert_eq!(p.fen(), before);
}
