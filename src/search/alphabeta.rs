use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{MoveGuard, Position};
use crate::search::eval::evaluate;
use crate::search::ordering::order_moves;
use crate::search::{Score, Searcher, INFINITY};

impl<R: Rng> Searcher<R> {
    /// Full-width alpha-beta to `depth` plies, White maximizing.
    ///
    /// Moves are ordered captures-first and then shuffled, so among moves
    /// with equal scores the reported one is random; the score itself does
    /// not depend on the shuffle. Leaves hand over to [`Searcher::quiescence`].
    pub fn search<P: Position>(
        &mut self,
        pos: &mut P,
        depth: u32,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> (Option<P::Move>, Score) {
        self.stats.nodes += 1;
        if depth == 0 || pos.is_terminal() {
            let quiescence_depth = self.quiescence_depth;
            let (_, score) = self.quiescence(pos, maximizing, alpha, beta, quiescence_depth);
            return (None, score);
        }

        let mut moves = order_moves(pos, false);
        if moves.is_empty() {
            // Ongoing yet moveless: the position model broke its contract.
            return (None, evaluate(pos));
        }
        moves.shuffle(&mut self.rng);

        let mut best = if maximizing { -INFINITY } else { INFINITY };
        let mut best_move: Option<P::Move> = None;
        for m in moves {
            let score = {
                let mut child = MoveGuard::new(pos, m);
                self.search(&mut *child, depth - 1, !maximizing, alpha, beta).1
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
