//! Rules-engine adapter.
//!
//! `chess::Board` is an immutable value: moves produce a new board. The search
//! instead works on one mutable `Position` that is changed in place and
//! restored after every recursive call. `Position` keeps an undo stack of the
//! boards it replaced, which also feeds repetition detection.
//!
//! All chess rules (move generation, check, mate) come from the `chess` crate.
//! This module only adds the game-over conditions that crate does not track:
//! insufficient material, the seventy-five-move rule and fivefold repetition.

use crate::error::{EngineError, EngineResult};
use crate::types::{BitBoard, Board, BoardStatus, Color, Move, MoveGen, Piece, Rank, Square, EMPTY};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

/// Halfmove clock value at which the game is drawn automatically
const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// Occurrences of one position that end the game automatically
const FIVEFOLD: usize = 5;

/// Why a finished game was drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoves,
    FivefoldRepetition,
}

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Decisive { winner: Color },
    Draw(DrawReason),
}

impl Outcome {
    /// The winning side, if any
    #[inline]
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Decisive { winner } => Some(winner),
            Outcome::Draw(_) => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Decisive { winner: Color::White } => write!(f, "white wins by checkmate"),
            Outcome::Decisive { winner: Color::Black } => write!(f, "black wins by checkmate"),
            Outcome::Draw(DrawReason::Stalemate) => write!(f, "draw by stalemate"),
            Outcome::Draw(DrawReason::InsufficientMaterial) => {
                write!(f, "draw by insufficient material")
            }
            Outcome::Draw(DrawReason::SeventyFiveMoves) => write!(f, "draw by seventy-five-move rule"),
            Outcome::Draw(DrawReason::FivefoldRepetition) => write!(f, "draw by fivefold repetition"),
        }
    }
}

/// State replaced by `apply`, restored by `undo`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Undo {
    board: Board,
    halfmove_clock: u32,
}

/// A mutable game position with in-place apply/undo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: Board,
    halfmove_clock: u32,
    stack: Vec<Undo>,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    /// The standard initial setup
    pub fn startpos() -> Self {
        Self::from_board(Board::default())
    }

    /// Wrap an existing board (halfmove clock 0, no history)
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            halfmove_clock: 0,
            stack: Vec::new(),
        }
    }

    /// Parse a position from FEN.
    ///
    /// The halfmove clock field is optional; the fullmove number is ignored.
    pub fn from_fen(fen: &str) -> EngineResult<Self> {
        let fen = fen.trim();
        let invalid = |reason: String| EngineError::InvalidPosition {
            fen: fen.to_string(),
            reason,
        };

        check_fen_layout(fen).map_err(invalid)?;
        let board = Board::from_str(fen).map_err(|e| invalid(e.to_string()))?;

        let halfmove_clock = match fen.split_whitespace().nth(4) {
            Some(field) => field
                .parse::<u32>()
                .map_err(|_| invalid(format!("bad halfmove clock '{}'", field)))?,
            None => 0,
        };

        Ok(Self {
            board,
            halfmove_clock,
            stack: Vec::new(),
        })
    }

    /// Current board
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Number of moves applied and not yet undone
    #[inline]
    pub fn ply(&self) -> usize {
        self.stack.len()
    }

    /// Legal moves in move generator order.
    ///
    /// The order is significant: it is the search order and the root tie-break.
    pub fn legal_moves(&self) -> Vec<Move> {
        MoveGen::new_legal(&self.board).collect()
    }

    /// Apply a legal move in place
    pub fn apply(&mut self, m: Move) {
        let irreversible = self.is_capture(m) || self.board.piece_on(m.get_source()) == Some(Piece::Pawn);

        self.stack.push(Undo {
            board: self.board,
            halfmove_clock: self.halfmove_clock,
        });

        self.board = self.board.make_move_new(m);
        self.halfmove_clock = if irreversible { 0 } else { self.halfmove_clock + 1 };
    }

    /// Undo the most recent `apply`. Returns false if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.stack.pop() {
            Some(undo) => {
                self.board = undo.board;
                self.halfmove_clock = undo.halfmove_clock;
                true
            }
            None => false,
        }
    }

    /// Apply a move and get a guard that undoes it when dropped
    #[inline]
    pub fn make_move(&mut self, m: Move) -> MoveGuard<'_> {
        self.apply(m);
        MoveGuard { position: self }
    }

    /// Captures include en passant (a pawn moving diagonally onto an empty square)
    pub fn is_capture(&self, m: Move) -> bool {
        if self.board.piece_on(m.get_dest()).is_some() {
            return true;
        }
        self.board.piece_on(m.get_source()) == Some(Piece::Pawn)
            && m.get_source().get_file() != m.get_dest().get_file()
    }

    /// Squares occupied by `kind` pieces of `color`
    #[inline]
    pub fn pieces(&self, kind: Piece, color: Color) -> BitBoard {
        *self.board.pieces(kind) & *self.board.color_combined(color)
    }

    /// How the game ended, or `None` while it is still going.
    pub fn outcome(&self) -> Option<Outcome> {
        let status = self.board.status();

        if status == BoardStatus::Checkmate {
            return Some(Outcome::Decisive {
                winner: !self.side_to_move(),
            });
        }
        if self.is_insufficient_material() {
            return Some(Outcome::Draw(DrawReason::InsufficientMaterial));
        }
        if status == BoardStatus::Stalemate {
            return Some(Outcome::Draw(DrawReason::Stalemate));
        }
        if self.halfmove_clock >= SEVENTY_FIVE_MOVE_PLIES {
            return Some(Outcome::Draw(DrawReason::SeventyFiveMoves));
        }
        if self.repetitions() >= FIVEFOLD {
            return Some(Outcome::Draw(DrawReason::FivefoldRepetition));
        }

        None
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// Times the current position has occurred since the last irreversible move
    pub fn repetitions(&self) -> usize {
        let hash = self.board.get_hash();
        let earlier = self
            .stack
            .iter()
            .rev()
            .take(self.halfmove_clock as usize)
            .filter(|undo| undo.board.get_hash() == hash)
            .count();
        earlier + 1
    }

    /// Neither side can ever deliver mate.
    ///
    /// True with no pawns, rooks or queens left and either at most one minor
    /// piece, or only bishops that all stand on one square colour.
    fn is_insufficient_material(&self) -> bool {
        let heavy = *self.board.pieces(Piece::Pawn)
            | *self.board.pieces(Piece::Rook)
            | *self.board.pieces(Piece::Queen);
        if heavy != EMPTY {
            return false;
        }

        let knights = *self.board.pieces(Piece::Knight);
        let bishops = *self.board.pieces(Piece::Bishop);
        if (knights | bishops).popcnt() <= 1 {
            return true;
        }
        if knights != EMPTY {
            return false;
        }

        let mut colours = bishops.map(square_colour);
        match colours.next() {
            Some(first) => colours.all(|c| c == first),
            None => true,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

/// Reject placement and en passant fields the board parser would silently wrap.
///
/// The placement must hold exactly eight ranks of eight files each. The en
/// passant field, when present, is `-` or a square on the third or sixth rank.
fn check_fen_layout(fen: &str) -> Result<(), String> {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().ok_or_else(|| "empty FEN".to_string())?;

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(format!("expected 8 ranks, found {}", ranks.len()));
    }

    for (i, rank) in ranks.iter().enumerate() {
        let mut files = 0;
        for c in rank.chars() {
            files += match c {
                '1'..='8' => c as u32 - '0' as u32,
                'p' | 'n' | 'b' | 'r' | 'q' | 'k' | 'P' | 'N' | 'B' | 'R' | 'Q' | 'K' => 1,
                _ => return Err(format!("unexpected '{}' in piece placement", c)),
            };
        }
        if files != 8 {
            return Err(format!("rank {} spans {} files", 8 - i, files));
        }
    }

    if let Some(ep) = fields.nth(2) {
        let mut chars = ep.chars();
        let valid = ep == "-"
            || (ep.len() == 2
                && matches!(chars.next(), Some('a'..='h'))
                && matches!(chars.next(), Some('3') | Some('6')));
        if !valid {
            return Err(format!("bad en passant square '{}'", ep));
        }
    }

    Ok(())
}

/// Light (1) or dark (0) square
#[inline]
fn square_colour(sq: Square) -> usize {
    (sq.get_rank().to_index() + sq.get_file().to_index()) % 2
}

/// Reflect a square across the board's horizontal midline (a1 <-> a8).
#[inline]
pub fn mirror(sq: Square) -> Square {
    Square::make_square(Rank::from_index(7 - sq.get_rank().to_index()), sq.get_file())
}

/// Scoped apply/undo.
///
/// Dereferences to the position with the move applied; dropping it undoes the
/// move, so every exit path of a recursive search call restores the board.
pub struct MoveGuard<'a> {
    position: &'a mut Position,
}

impl Deref for MoveGuard<'_> {
    type Target = Position;

    #[inline]
    fn deref(&self) -> &Position {
        self.position
    }
}

impl DerefMut for MoveGuard<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Position {
        self.position
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        let undone = self.position.undo();
        debug_assert!(undone, "move guard dropped with empty undo stack");
    }
}
