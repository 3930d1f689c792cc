//! Core types for the engine.
//!
//! This module provides the types shared by evaluation, search and the
//! HTTP front end:
//! - `chess` crate types (board representation, move generation)
//! - Engine-specific value types (Score, Depth, Ply)
//!
//! # Design Principles
//! - Re-export chess crate types as the canonical source for board/move types
//! - Define engine-specific types optimized for search

mod score;
mod depth;

pub use score::{Score, SCORE_INFINITY, SCORE_DRAW};
pub use depth::{Depth, Ply, MAX_DEPTH};

// Re-export chess crate types as canonical types
pub use chess::{
    Board,
    ChessMove as Move,
    Square,
    Piece,
    Color,
    BitBoard,
    Rank,
    MoveGen,
    BoardStatus,
    EMPTY,
};

/// Node count type
pub type NodeCount = u64;

/// Centipawn value type (for piece values, etc.)
pub type Value = i32;

// Piece values in centipawns
pub const PAWN_VALUE: Value = 100;
pub const KNIGHT_VALUE: Value = 320;
pub const BISHOP_VALUE: Value = 330;
pub const ROOK_VALUE: Value = 500;
pub const QUEEN_VALUE: Value = 900;
/// Declared for completeness; kings never enter the material sum.
pub const KING_VALUE: Value = 20000;

/// Get the material value of a piece in centipawns
#[inline]
pub const fn piece_value(piece: Piece) -> Value {
    match piece {
        Piece::Pawn => PAWN_VALUE,
        Piece::Knight => KNIGHT_VALUE,
        Piece::Bishop => BISHOP_VALUE,
        Piece::Rook => ROOK_VALUE,
        Piece::Queen => QUEEN_VALUE,
        Piece::King => KING_VALUE,
    }
}

/// Format a move in the rules engine's coordinate notation (e.g., "e2e4", "e7e8q")
pub fn format_move(m: Move) -> String {
    let mut s = format!("{}{}", m.get_source(), m.get_dest());
    if let Some(promo) = m.get_promotion() {
        let c = match promo {
            Piece::Queen => 'q',
            Piece::Rook => 'r',
            Piece::Bishop => 'b',
            Piece::Knight => 'n',
            Piece::Pawn => 'p',
            Piece::King => 'k',
        };
        s.push(c);
    }
    s
}
