//! Piece-square tables (Simplified Evaluation Function).
//!
//! One table per piece kind plus middlegame and endgame king tables. Tables are
//! indexed by square index (a1 = 0, h8 = 63) for White; Black pieces read the
//! table at the mirrored square and count negatively.
//!
//! The game phase is not detected: callers pick which king table applies.

use crate::position::{mirror, Position};
use crate::types::{Color, Piece, Value};

// ============================================================================
// PIECE-SQUARE TABLES
// ============================================================================

#[rustfmt::skip]
const PAWN_TABLE: [Value; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [Value; 64] = [
   -50,-40,-30,-30,-30,-30,-40,-50,
   -40,-20,  0,  0,  0,  0,-20,-40,
   -30,  0, 10, 15, 15, 10,  0,-30,
   -30,  5, 15, 20, 20, 15,  5,-30,
   -30,  0, 15, 20, 20, 15,  0,-30,
   -30,  5, 10, 15, 15, 10,  5,-30,
   -40,-20,  0,  5,  5,  0,-20,-40,
   -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [Value; 64] = [
   -20,-10,-10,-10,-10,-10,-10,-20,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -10,  0,  5, 10, 10,  5,  0,-10,
   -10,  5,  5, 10, 10,  5,  5,-10,
   -10,  0, 10, 10, 10, 10,  0,-10,
   -10, 10, 10, 10, 10, 10, 10,-10,
   -10,  5,  0,  0,  0,  0,  5,-10,
   -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_TABLE: [Value; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [Value; 64] = [
   -20,-10,-10, -5, -5,-10,-10,-20,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -10,  0,  5,  5,  5,  5,  0,-10,
    -5,  0,  5,  5,  5,  5,  0, -5,
     0,  0,  5,  5,  5,  5,  0, -5,
   -10,  5,  5,  5,  5,  5,  0,-10,
   -10,  0,  5,  0,  0,  0,  0,-10,
   -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_MID_TABLE: [Value; 64] = [
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -20,-30,-30,-40,-40,-30,-30,-20,
   -10,-20,-20,-20,-20,-20,-20,-10,
    20, 20,  0,  0,  0,  0, 20, 20,
    20, 30, 10,  0,  0, 10, 30, 20,
];

#[rustfmt::skip]
const KING_END_TABLE: [Value; 64] = [
   -50,-40,-30,-20,-20,-30,-40,-50,
   -30,-20,-10,  0,  0,-10,-20,-30,
   -30,-10, 20, 30, 30, 20,-10,-30,
   -30,-10, 30, 40, 40, 30,-10,-30,
   -30,-10, 30, 40, 40, 30,-10,-30,
   -30,-10, 20, 30, 30, 20,-10,-30,
   -30,-30,  0,  0,  0,  0,-30,-30,
   -50,-30,-30,-30,-30,-30,-30,-50,
];

/// Which king table applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Middlegame,
    Endgame,
}

/// Get the table for a piece kind
#[inline]
const fn table(piece: Piece, phase: Phase) -> &'static [Value; 64] {
    match (piece, phase) {
        (Piece::Pawn, _) => &PAWN_TABLE,
        (Piece::Knight, _) => &KNIGHT_TABLE,
        (Piece::Bishop, _) => &BISHOP_TABLE,
        (Piece::Rook, _) => &ROOK_TABLE,
        (Piece::Queen, _) => &QUEEN_TABLE,
        (Piece::King, Phase::Middlegame) => &KING_MID_TABLE,
        (Piece::King, Phase::Endgame) => &KING_END_TABLE,
    }
}

const ALL_PIECES: [Piece; 6] = [
    Piece::Pawn,
    Piece::Knight,
    Piece::Bishop,
    Piece::Rook,
    Piece::Queen,
    Piece::King,
];

/// Positional score from White's perspective
pub fn positional(pos: &Position, phase: Phase) -> Value {
    let mut score: Value = 0;

    for &piece in &ALL_PIECES {
        let t = table(piece, phase);

        for sq in pos.pieces(piece, Color::White) {
            score += t[sq.to_index()];
        }
        for sq in pos.pieces(piece, Color::Black) {
            score -= t[mirror(sq).to_index()];
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position_is_balanced() {
        assert_eq!(positional(&Position::startpos(), Phase::Middlegame), 0);
    }

    #[test]
    fn test_lookup_uses_square_index_for_white() {
        // Lone white knight on a1 (index 0), kings cancel out
        let pos = Position::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1").unwrap();
        assert_eq!(positional(&pos, Phase::Middlegame), KNIGHT_TABLE[0]);
    }

    #[test]
    fn test_lookup_mirrors_for_black() {
        // Black knight on b8 reads b1's entry (index 1) and counts against White
        let pos = Position::from_fen("1n2k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(positional(&pos, Phase::Middlegame), -KNIGHT_TABLE[1]);
    }

    #[test]
    fn test_starting_position_is_balanced_in_endgame() {
        assert_eq!(positional(&Position::startpos(), Phase::Endgame), 0);
    }

    #[test]
    fn test_phase_selects_king_table() {
        // White king on d4 (index 27), black king on h8 reads h1 (index 7)
        let pos = Position::from_fen("7k/8/8/8/3K4/8/8/8 w - - 0 1").unwrap();
        assert_eq!(
            positional(&pos, Phase::Middlegame),
            KING_MID_TABLE[27] - KING_MID_TABLE[7]
        );
        assert_eq!(
            positional(&pos, Phase::Endgame),
            KING_END_TABLE[27] - KING_END_TABLE[7]
        );
    }
}
