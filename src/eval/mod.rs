//! Board evaluation module.
//!
//! Static evaluation relative to the side to move: material plus
//! piece-square tables (middlegame or endgame king), or material alone. Finished games score as a
//! forced win (+inf), forced loss (-inf) or draw (0).

use crate::position::{Outcome, Position};
use crate::types::{piece_value, Color, Piece, Score, Value};
use std::fmt;
use std::str::FromStr;

pub mod pst;

/// Selectable evaluation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvalKind {
    /// Material plus piece-square tables
    #[default]
    PieceSquare,
    /// Piece-square tables with the endgame king table
    Endgame,
    /// Material only
    Material,
}

impl FromStr for EvalKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pst" | "piece-square" => Ok(EvalKind::PieceSquare),
            "endgame" => Ok(EvalKind::Endgame),
            "material" => Ok(EvalKind::Material),
            other => Err(format!(
                "unknown evaluation '{}' (expected 'pst', 'endgame' or 'material')",
                other
            )),
        }
    }
}

impl fmt::Display for EvalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalKind::PieceSquare => write!(f, "pst"),
            EvalKind::Endgame => write!(f, "endgame"),
            EvalKind::Material => write!(f, "material"),
        }
    }
}

/// Evaluate the position for the side to move.
pub fn evaluate(pos: &Position, kind: EvalKind) -> Score {
    if let Some(outcome) = pos.outcome() {
        return terminal_score(outcome, pos.side_to_move());
    }

    let score = material_eval(pos)
        + match kind {
            EvalKind::PieceSquare => pst::positional(pos, pst::Phase::Middlegame),
            EvalKind::Endgame => pst::positional(pos, pst::Phase::Endgame),
            EvalKind::Material => 0,
        };

    if pos.side_to_move() == Color::White {
        Score::cp(score)
    } else {
        Score::cp(-score)
    }
}

/// Score of a finished game for `side_to_move`
#[inline]
pub fn terminal_score(outcome: Outcome, side_to_move: Color) -> Score {
    match outcome.winner() {
        Some(winner) if winner == side_to_move => Score::infinity(),
        Some(_) => Score::neg_infinity(),
        None => Score::draw(),
    }
}

/// Simple material evaluation (white's perspective)
fn material_eval(pos: &Position) -> Value {
    let mut score: Value = 0;

    for piece in &[Piece::Pawn, Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen] {
        let white_count = pos.pieces(*piece, Color::White).popcnt() as Value;
        let black_count = pos.pieces(*piece, Color::Black).popcnt() as Value;

        score += piece_value(*piece) * (white_count - black_count);
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Colour-flip a FEN: mirror ranks, swap piece colours and side to move.
    fn flip_fen(fen: &str) -> String {
        let fields: Vec<&str> = fen.split_whitespace().collect();

        let placement = fields[0]
            .split('/')
            .rev()
            .map(swap_case)
            .collect::<Vec<_>>()
            .join("/");
        let side = if fields[1] == "w" { "b" } else { "w" };

        let mut castling: Vec<char> = swap_case(fields[2]).chars().collect();
        castling.sort_by_key(|c| (c.is_ascii_lowercase(), "KQkq".find(c.to_ascii_uppercase())));
        let castling: String = castling.into_iter().collect();

        let ep = match fields[3] {
            "-" => "-".to_string(),
            sq => {
                let (file, rank) = sq.split_at(1);
                let rank = if rank == "3" { "6" } else { "3" };
                format!("{}{}", file, rank)
            }
        };

        format!("{} {} {} {} {} {}", placement, side, castling, ep, fields[4], fields[5])
    }

    fn swap_case(s: &str) -> String {
        s.chars()
            .map(|c| {
                if c.is_ascii_uppercase() {
                    c.to_ascii_lowercase()
                } else {
                    c.to_ascii_uppercase()
                }
            })
            .collect()
    }

    fn eval_fen(fen: &str) -> Score {
        evaluate(&Position::from_fen(fen).unwrap(), EvalKind::PieceSquare)
    }

    #[test]
    fn test_starting_position_is_zero() {
        assert_eq!(evaluate(&Position::startpos(), EvalKind::PieceSquare), Score::cp(0));
        assert_eq!(evaluate(&Position::startpos(), EvalKind::Material), Score::cp(0));
        assert_eq!(evaluate(&Position::startpos(), EvalKind::Endgame), Score::cp(0));
    }

    #[test]
    fn test_material_advantage() {
        // White has an extra queen on d4 and Black's queen is gone
        let fen = "rnb1kbnr/pppppppp/8/8/3Q4/8/PPPPPPPP/RNB1KBNR w KQkq - 0 1";
        assert!(eval_fen(fen).raw() >= 900);

        // Same position with Black to move is just as bad for Black
        let fen = "rnb1kbnr/pppppppp/8/8/3Q4/8/PPPPPPPP/RNB1KBNR b KQkq - 0 1";
        assert!(eval_fen(fen).raw() <= -900);
    }

    #[test]
    fn test_material_only() {
        let pos = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 b - - 0 1").unwrap();
        assert_eq!(evaluate(&pos, EvalKind::Material), Score::cp(-500));
    }

    #[test]
    fn test_endgame_king_prefers_centre() {
        // Rook on a1 scores 0 in its table; only the king tables differ
        let pos = Position::from_fen("7k/8/8/8/3K4/8/8/R7 w - - 0 1").unwrap();
        let material = evaluate(&pos, EvalKind::Material);
        let middlegame = evaluate(&pos, EvalKind::PieceSquare);
        let endgame = evaluate(&pos, EvalKind::Endgame);

        assert_eq!(material, Score::cp(500));
        assert!(middlegame < material);
        assert!(endgame > material);
    }

    #[test]
    fn test_score_symmetry() {
        let fens = [
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
            "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
            "rnb1kbnr/pppppppp/8/8/3Q4/8/PPPPPPPP/RNB1KBNR w KQkq - 0 1",
            "4k3/8/3q4/8/3N4/2P5/8/4K2R w K - 0 1",
        ];
        for fen in fens {
            let flipped = flip_fen(fen);
            assert_eq!(eval_fen(fen), eval_fen(&flipped), "{} vs {}", fen, flipped);
        }
    }

    #[test]
    fn test_flip_fen() {
        assert_eq!(
            flip_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"),
            "rnbqkbnr/pppp1ppp/8/4p3/8/8/PPPPPPPP/RNBQKBNR w KQkq e6 0 1"
        );
    }

    #[test]
    fn test_checkmate_is_loss_for_side_to_move() {
        // Fool's mate: White to move and mated
        let fen = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";
        assert_eq!(eval_fen(fen), Score::neg_infinity());

        // Back-rank mate: Black to move and mated
        let fen = "R5k1/5ppp/8/8/8/8/8/6K1 b - - 1 1";
        assert_eq!(eval_fen(fen), Score::neg_infinity());
    }

    #[test]
    fn test_draws_are_zero() {
        // Stalemate with White a queen up
        assert_eq!(eval_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1"), Score::draw());
        // King and knight against king
        assert_eq!(eval_fen("8/8/4k3/8/8/3KN3/8/8 w - - 0 1"), Score::draw());
        // Seventy-five-move rule with a rook up
        assert_eq!(eval_fen("4k3/8/8/8/8/8/8/R3K3 w - - 150 120"), Score::draw());
    }

    #[test]
    fn test_terminal_score() {
        let white_wins = Outcome::Decisive { winner: Color::White };
        assert_eq!(terminal_score(white_wins, Color::White), Score::infinity());
        assert_eq!(terminal_score(white_wins, Color::Black), Score::neg_infinity());
    }

    #[test]
    fn test_eval_kind_from_str() {
        assert_eq!("pst".parse::<EvalKind>(), Ok(EvalKind::PieceSquare));
        assert_eq!("Material".parse::<EvalKind>(), Ok(EvalKind::Material));
        assert_eq!("endgame".parse::<EvalKind>(), Ok(EvalKind::Endgame));
        assert_eq!(EvalKind::Endgame.to_string(), "endgame");
        assert!("nnue".parse::<EvalKind>().is_err());
    }
}
