//! Search module for the engine.
//!
//! # Architecture
//! - `Searcher`: search session owning the one mutable `Position`
//! - `negamax`: alpha-beta search with negamax framework
//! - `qsearch`: capture-only extension used at the horizon when enabled
//! - `options`: fixed depth, leaf policy and evaluation strategy
//!
//! The position is never copied during search: moves are applied in place
//! and undone by a `MoveGuard` when each recursive call returns.

mod negamax;
mod options;
mod qsearch;

pub use options::{SearchOptions, DEFAULT_SEARCH_DEPTH};

use crate::error::{EngineError, EngineResult};
use crate::eval;
use crate::position::Position;
use crate::types::{format_move, Depth, Move, NodeCount, Ply, Score};
use std::time::Instant;
use tracing::{debug, trace};

/// Search statistics collected during search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Main search nodes
    pub nodes: NodeCount,
    /// Quiescence nodes
    pub qnodes: NodeCount,
    /// Deepest ply reached
    pub seldepth: Ply,
    pub time_ms: u64,
}

impl SearchStats {
    pub fn nps(&self) -> u64 {
        if self.time_ms > 0 {
            (self.nodes + self.qnodes) * 1000 / self.time_ms
        } else {
            0
        }
    }
}

/// Result of a root search
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Move,
    pub score: Score,
    pub stats: SearchStats,
}

/// Per-call search state threaded through the recursion
pub(crate) struct Context<'a> {
    pub options: &'a SearchOptions,
    pub stats: &'a mut SearchStats,
}

impl<'a> Context<'a> {
    pub fn new(options: &'a SearchOptions, stats: &'a mut SearchStats) -> Self {
        Self { options, stats }
    }

    #[inline]
    pub fn inc_nodes(&mut self) {
        self.stats.nodes += 1;
    }

    #[inline]
    pub fn inc_qnodes(&mut self) {
        self.stats.qnodes += 1;
    }

    /// Update selective depth
    #[inline]
    pub fn update_seldepth(&mut self, ply: Ply) {
        if ply > self.stats.seldepth {
            self.stats.seldepth = ply;
        }
    }
}

/// Search session
///
/// Exclusively owns the position it searches. Build one per request.
pub struct Searcher {
    position: Position,
    options: SearchOptions,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(position: Position, options: SearchOptions) -> Self {
        Self {
            position,
            options,
            stats: SearchStats::default(),
        }
    }

    /// Current position
    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn into_position(self) -> Position {
        self.position
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Statistics of the last search
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Static evaluation of the current position for the side to move
    pub fn evaluate(&self) -> Score {
        eval::evaluate(&self.position, self.options.eval)
    }

    /// Negamax search of the current position with the given window
    pub fn negamax(&mut self, depth: Depth, alpha: Score, beta: Score) -> Score {
        self.stats = SearchStats::default();
        let mut ctx = Context::new(&self.options, &mut self.stats);
        negamax::negamax(&mut self.position, &mut ctx, depth, Ply::ZERO, alpha, beta)
    }

    /// Capture-only search of the current position with the given window
    pub fn quiescence(&mut self, alpha: Score, beta: Score) -> Score {
        self.stats = SearchStats::default();
        let mut ctx = Context::new(&self.options, &mut self.stats);
        qsearch::quiescence(&mut self.position, &mut ctx, Ply::ZERO, alpha, beta)
    }

    /// Pick the move with the highest negamax score.
    ///
    /// Ties go to the earliest move in generator order. Fails with
    /// `EngineError::GameOver` if the position is already decided.
    pub fn best_move(&mut self) -> EngineResult<SearchResult> {
        if let Some(outcome) = self.position.outcome() {
            return Err(EngineError::GameOver(outcome));
        }

        let start = Instant::now();
        self.stats = SearchStats::default();

        // A position that is not over always has a legal move
        let moves = self.position.legal_moves();
        let mut chosen = moves[0];
        let mut best_score = Score::neg_infinity();
        let mut alpha = Score::neg_infinity();
        let beta = Score::infinity();

        {
            let mut ctx = Context::new(&self.options, &mut self.stats);
            let depth = ctx.options.depth;

            for m in moves {
                let score = {
                    let mut child = self.position.make_move(m);
                    -negamax::negamax(&mut child, &mut ctx, depth, Ply::new(1), -beta, -alpha)
                };
                trace!(mv = %format_move(m), %score, "root move");

                if score > best_score {
                    best_score = score;
                    chosen = m;
                }
                if score > alpha {
                    alpha = score;
                }
            }
        }

        self.stats.time_ms = start.elapsed().as_millis() as u64;
        debug!(
            best = %format_move(chosen),
            score = %best_score,
            depth = self.options.depth.raw(),
            nodes = self.stats.nodes,
            qnodes = self.stats.qnodes,
            seldepth = self.stats.seldepth.raw(),
            nps = self.stats.nps(),
            "search finished"
        );

        Ok(SearchResult {
            best_move: chosen,
            score: best_score,
            stats: self.stats.clone(),
        })
    }
}
