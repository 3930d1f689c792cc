//! Search configuration.
//!
//! The engine searches to a fixed depth; the only other knobs are the leaf
//! policy (static evaluation or quiescence) and the evaluation strategy.

use crate::error::{EngineError, EngineResult};
use crate::eval::EvalKind;
use crate::types::{Depth, MAX_DEPTH};

/// Plies searched below each root move unless configured otherwise
pub const DEFAULT_SEARCH_DEPTH: i32 = 4;

/// Search configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Depth passed to the search below each root move
    pub depth: Depth,
    /// Resolve captures at the horizon instead of evaluating statically
    pub quiescence: bool,
    /// Evaluation strategy used at leaves
    pub eval: EvalKind,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            depth: Depth::new(DEFAULT_SEARCH_DEPTH),
            quiescence: false,
            eval: EvalKind::default(),
        }
    }
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options for a fixed depth search
    pub fn depth(depth: i32) -> EngineResult<Self> {
        Self::default().with_depth(depth)
    }

    pub fn with_depth(mut self, depth: i32) -> EngineResult<Self> {
        if !(0..=MAX_DEPTH).contains(&depth) {
            return Err(EngineError::InvalidDepth(depth));
        }
        self.depth = Depth::new(depth);
        Ok(self)
    }

    pub fn with_quiescence(mut self, on: bool) -> Self {
        self.quiescence = on;
        self
    }

    pub fn with_eval(mut self, eval: EvalKind) -> Self {
        self.eval = eval;
        self
    }
}
