//! Negamax alpha-beta search implementation.
//!
//! Depth-limited negamax with alpha-beta pruning over the shared position.
//! Moves are searched in move generator order; there is no move ordering,
//! no transposition table and no iterative deepening.

use super::qsearch::quiescence;
use super::Context;
use crate::eval;
use crate::position::Position;
use crate::types::{Depth, Ply, Score};

/// Negamax search returning a score for the side to move at `pos`.
///
/// Each child is visited through a `MoveGuard`, so `pos` is restored when this
/// returns, including on a beta cutoff.
pub(crate) fn negamax(
    pos: &mut Position,
    ctx: &mut Context<'_>,
    depth: Depth,
    ply: Ply,
    mut alpha: Score,
    beta: Score,
) -> Score {
    let terminal = pos.is_terminal();

    // Quiescence counts the horizon node itself
    if depth.is_leaf() && ctx.options.quiescence && !terminal {
        return quiescence(pos, ctx, ply, alpha, beta);
    }

    ctx.inc_nodes();
    ctx.update_seldepth(ply);

    // Finished games score the same at every depth
    if terminal || depth.is_leaf() {
        return eval::evaluate(pos, ctx.options.eval);
    }

    let mut best_score = Score::neg_infinity();

    for m in pos.legal_moves() {
        let score = {
            let mut child = pos.make_move(m);
            -negamax(&mut child, ctx, depth - 1, ply.next(), -beta, -alpha)
        };

        if score >= beta {
            return score;
        }
        if score > best_score {
            best_score = score;
        }
        if score > alpha {
            alpha = score;
        }
    }

    best_score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::EvalKind;
    use crate::search::{SearchOptions, SearchStats};

    /// Plain minimax without pruning, same leaf and terminal rules
    fn minimax(pos: &mut Position, depth: i32) -> Score {
        if pos.is_terminal() || depth == 0 {
            return eval::evaluate(pos, EvalKind::PieceSquare);
        }
        let mut best = Score::neg_infinity();
        for m in pos.legal_moves() {
            let mut child = pos.make_move(m);
            best = best.max(-minimax(&mut child, depth - 1));
        }
        best
    }

    fn search_fen(fen: &str, depth: i32) -> (Score, Score, SearchStats) {
        let mut pos = Position::from_fen(fen).unwrap();
        let options = SearchOptions::depth(depth).unwrap();
        let mut stats = SearchStats::default();

        let pruned = {
            let mut ctx = Context::new(&options, &mut stats);
            negamax(
                &mut pos,
                &mut ctx,
                Depth::new(depth),
                Ply::ZERO,
                Score::neg_infinity(),
                Score::infinity(),
            )
        };
        let exhaustive = minimax(&mut pos, depth);
        (pruned, exhaustive, stats)
    }

    #[test]
    fn test_alpha_beta_matches_minimax() {
        let cases = [
            // King and pawn against king
            ("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1", 3),
            // White in check; the knight can take the checking queen
            ("4k3/8/4q3/8/3N4/8/8/4K3 w - - 0 1", 3),
            // Rooks on an open board
            ("r3k3/8/8/8/8/8/8/R3K3 w - - 0 1", 2),
            // Mate in one available
            ("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", 2),
        ];
        for (fen, depth) in cases {
            let (pruned, exhaustive, _) = search_fen(fen, depth);
            assert_eq!(pruned, exhaustive, "{} at depth {}", fen, depth);
        }
    }

    #[test]
    fn test_depth_zero_is_static_eval() {
        let fen = "4k3/8/4q3/8/3N4/8/8/4K3 w - - 0 1";
        let (pruned, _, stats) = search_fen(fen, 0);
        let pos = Position::from_fen(fen).unwrap();
        assert_eq!(pruned, eval::evaluate(&pos, EvalKind::PieceSquare));
        assert_eq!(stats.nodes, 1);
    }

    #[test]
    fn test_horizon_node_counted_once() {
        let fen = "4k3/8/4p3/3p4/8/8/3Q4/4K3 w - - 0 1";
        let mut pos = Position::from_fen(fen).unwrap();
        let options = SearchOptions::depth(1).unwrap().with_quiescence(true);
        let mut stats = SearchStats::default();
        let mut ctx = Context::new(&options, &mut stats);

        negamax(&mut pos, &mut ctx, Depth::new(0), Ply::ZERO, Score::neg_infinity(), Score::infinity());

        assert_eq!(stats.nodes, 0);
        assert!(stats.qnodes >= 1);
    }

    #[test]
    fn test_finds_mate_score() {
        // Ra8 is mate
        let (score, _, _) = search_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", 1);
        assert_eq!(score, Score::infinity());
    }

    #[test]
    fn test_stalemate_inside_tree_is_draw() {
        // A stalemated node has no moves but must not score as a loss
        let (score, _, _) = search_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1", 3);
        assert_eq!(score, Score::draw());
    }

    #[test]
    fn test_position_restored() {
        let fen = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";
        let mut pos = Position::from_fen(fen).unwrap();
        let snapshot = pos.clone();
        let options = SearchOptions::depth(2).unwrap();
        let mut stats = SearchStats::default();
        let mut ctx = Context::new(&options, &mut stats);

        // A narrow window forces cutoffs on the way out
        negamax(&mut pos, &mut ctx, Depth::new(2), Ply::ZERO, Score::cp(-10), Score::cp(10));

        assert_eq!(pos, snapshot);
    }
}
