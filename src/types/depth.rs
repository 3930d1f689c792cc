//! Depth and Ply types for search.
//!
//! Provides type-safe wrappers for search depth and ply count.

use std::ops::Sub;

/// Maximum search depth accepted by the engine
pub const MAX_DEPTH: i32 = 32;

/// Search depth (plies remaining below the current node).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
#[repr(transparent)]
pub struct Depth(pub i32);

impl Depth {
    #[inline]
    pub const fn new(d: i32) -> Self {
        Depth(d)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Check if the search horizon has been reached
    #[inline]
    pub const fn is_leaf(self) -> bool {
        self.0 <= 0
    }
}

impl Sub<i32> for Depth {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: i32) -> Self {
        Depth(self.0 - rhs)
    }
}

/// Ply count (half-moves from the root position).
///
/// Only used for statistics (selective depth reached by quiescence).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
#[repr(transparent)]
pub struct Ply(pub i32);

impl Ply {
    pub const ZERO: Ply = Ply(0);

    #[inline]
    pub const fn new(p: i32) -> Self {
        Ply(p)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Increment ply (for going deeper in search)
    #[inline]
    pub const fn next(self) -> Self {
        Ply(self.0 + 1)
    }
}
