//! Score type for search.
//!
//! Handles regular centipawn scores and the two infinite sentinels used for
//! decided games and as the initial alpha-beta window.

use std::fmt;
use std::ops::Neg;

/// Special score values
pub const SCORE_INFINITY: i32 = 32000;
pub const SCORE_DRAW: i32 = 0;

/// A chess engine score, always relative to the side to move.
///
/// Stored as centipawns. `SCORE_INFINITY` and its negation stand for a
/// forced win and a forced loss; no evaluation can reach them otherwise.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Score(pub i32);

impl Score {
    /// Create a new score from centipawns
    #[inline]
    pub const fn cp(centipawns: i32) -> Self {
        Score(centipawns)
    }

    /// Draw score
    #[inline]
    pub const fn draw() -> Self {
        Score(SCORE_DRAW)
    }

    /// Infinity (won game, upper alpha-beta bound)
    #[inline]
    pub const fn infinity() -> Self {
        Score(SCORE_INFINITY)
    }

    /// Negative infinity (lost game, lower alpha-beta bound)
    #[inline]
    pub const fn neg_infinity() -> Self {
        Score(-SCORE_INFINITY)
    }

    /// Get the raw value
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl Neg for Score {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Score(-self.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 >= SCORE_INFINITY {
            write!(f, "+inf")
        } else if self.0 <= -SCORE_INFINITY {
            write!(f, "-inf")
        } else {
            write!(f, "cp {}", self.0)
        }
    }
}

impl fmt::Debug for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score({})", self)
    }
}
