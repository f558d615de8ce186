use crate::board::{MoveGuard, Position};
use crate::search::eval::evaluate;
use crate::search::ordering::order_moves;
use crate::search::{Score, Searcher, INFINITY};

impl<R> Searcher<R> {
    /// Capture-only alpha-beta below the main search horizon.
    ///
    /// Stops at terminal positions, quiet positions (no captures) and when
    /// `remaining` extension plies are used up; those leaves are scored by
    /// [`evaluate`] with no move.
    pub fn quiescence<P: Position>(
        &mut self,
        pos: &mut P,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
        remaining: u32,
    ) -> (Option<P::Move>, Score) {
        self.stats.quiescence_nodes += 1;
        let captures = if remaining == 0 || pos.is_terminal() { Vec::new() } else { order_moves(pos, true) };
        if captures.is_empty() {
            self.stats.evaluations += 1;
            return (None, evaluate(pos));
        }

        let mut best = if maximizing { -INFINITY } else { INFINITY };
        let mut best_move: Option<P::Move> = None;
        for m in captures {
            let score = {
                let mut child = MoveGuard::new(pos, m);
                self.quiescence(&mut *child, !maximizing, alpha, beta, remaining - 1).1
            };
            if maximizing {
                if best_move.is_none() || score > best { best = score; best_move = Some(m); }
                alpha = alpha.max(score);
            } else {
                if best_move.is_none() || score < best { best = score; best_move = Some(m); }
                beta = beta.min(score);
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }
        (best_move, best)
    }
}
