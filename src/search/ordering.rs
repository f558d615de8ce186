use crate::board::Position;

/// Legal moves with captures first, each group in generator order.
///
/// With `captures_only` the quiet moves are dropped, which is what the
/// quiescence search walks.
pub fn order_moves<P: Position>(pos: &P, captures_only: bool) -> Vec<P::Move> {
    let (mut captures, quiet): (Vec<P::Move>, Vec<P::Move>) =
        pos.legal_moves().into_iter().partition(|&m| pos.is_capture(m));
    if !captures_only {
        captures.extend(quiet);
    }
    captures
}
