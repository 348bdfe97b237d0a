use std::fmt;

use crate::board::Board;
use crate::core::direction::Direction;
use crate::core::piece::Piece;
use crate::core::square::{Square, BOARD_SIZE};
use crate::error::{LoaError, LoaResult};

/// A single move, together with a snapshot of the pieces it touches.
///
/// `moved` and `replaced` are sampled from the board the move was built against, so a
/// `Move` only makes sense on that position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    moved: Piece,
    replaced: Piece,
    length: u8,
    direction: Direction,
}

impl Move {
    /// The move of the piece on `from`, `length` squares towards `direction`.
    ///
    /// `None` if `length` is 0 or the destination is off the board.
    pub fn along(board: &Board, from: Square, length: u8, direction: Direction) -> Option<Move> {
        if length == 0 || length >= BOARD_SIZE {
            return None;
        }
        let to = from.offset(direction.delta() * length as i8)?;
        Some(Move {
            from,
            to,
            moved: board.get_square(from),
            replaced: board.get_square(to),
            length,
            direction,
        })
    }

    /// The move from `from` to `to` on `board`.
    pub fn between(board: &Board, from: Square, to: Square) -> LoaResult<Move> {
        let delta = from.delta_to(to);
        if !delta.is_line() {
            return Err(LoaError::NotALine { from, to });
        }
        let direction = Direction::of_delta(delta).ok_or(LoaError::NotALine { from, to })?;
        Move::along(board, from, delta.chebyshev_norm() as u8, direction)
            .ok_or(LoaError::NotALine { from, to })
    }

    /// Parse `"b1-d3"` notation against `board`.
    pub fn parse(text: &str, board: &Board) -> LoaResult<Move> {
        let (from, to) = text
            .split_once('-')
            .ok_or_else(|| LoaError::InvalidNotation(text.to_string()))?;
        Move::between(board, from.parse()?, to.parse()?)
    }

    #[inline]
    pub fn from(&self) -> Square {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Square {
        self.to
    }

    /// The piece that moves.
    #[inline]
    pub fn moved(&self) -> Piece {
        self.moved
    }

    /// Whatever stood on the destination when the move was built.
    #[inline]
    pub fn replaced(&self) -> Piece {
        self.replaced
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.replaced.is_empty()
    }

    #[inline]
    pub fn length(&self) -> u8 {
        self.length
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Squares strictly between origin and destination.
    pub fn path(&self) -> impl Iterator<Item = Square> + '_ {
        let step = self.direction.delta();
        (1..self.length as i8).filter_map(move |i| self.from.offset(step * i))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}
