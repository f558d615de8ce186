use crate::board::{MoveGuard, Position};

// Leaf count via push/pop on a single position (no cloning).
pub fn perft<P: Position>(pos: &mut P, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let moves = pos.legal_moves();
    if depth == 1 { return moves.len() as u64; }
    let mut nodes = 0u64;
    for mv in moves {
        let mut child = MoveGuard::new(pos, mv);
        nodes += perft(&mut *child, depth - 1);
    }
    nodes
}
