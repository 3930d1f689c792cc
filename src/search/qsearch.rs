//! Quiescence search - search captures only to avoid horizon effect.
//!
//! When the main search reaches depth 0 with quiescence enabled, captures are
//! played out until the position is quiet, so the static evaluation is not
//! taken in the middle of an exchange.

use super::Context;
use crate::eval;
use crate::position::Position;
use crate::types::{Move, Ply, Score};

/// Fail-hard capture search returning a score within `[alpha, beta]`.
pub(crate) fn quiescence(
    pos: &mut Position,
    ctx: &mut Context<'_>,
    ply: Ply,
    mut alpha: Score,
    beta: Score,
) -> Score {
    ctx.inc_qnodes();
    ctx.update_seldepth(ply);

    // Stand-pat evaluation
    let stand_pat = eval::evaluate(pos, ctx.options.eval);

    if stand_pat >= beta {
        return beta;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    // Drawn positions may still have captures; they are not searched through
    if pos.is_terminal() {
        return alpha;
    }

    let captures: Vec<Move> = pos
        .legal_moves()
        .into_iter()
        .filter(|&m| pos.is_capture(m))
        .collect();

    for m in captures {
        let score = {
            let mut child = pos.make_move(m);
            -quiescence(&mut child, ctx, ply.next(), -beta, -alpha)
        };

        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}
