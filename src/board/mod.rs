//! Grid state: the 8×8 cells, the side to move and the history of applied moves.
//!
//! Move legality, application and move generation live in [`crate::rules`] as further
//! `impl Board` blocks.

pub mod layout;

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::board::layout::{Contents, INITIAL_PIECES};
use crate::core::piece::{Piece, Side};
use crate::core::square::{Square, BOARD_SIZE};
use crate::error::LoaResult;
use crate::rules::moves::Move;

const CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// A Lines of Action position plus the moves that led to it.
///
/// Equality and hashing only look at the cells and the side to move; the history is not
/// part of a position's identity.
#[derive(Debug, Clone)]
pub struct Board {
    pub(crate) cells: [Piece; CELLS],
    pub(crate) turn: Side,
    pub(crate) history: Vec<Move>,
}

impl Board {
    /// A board in the standard starting position, Black to move.
    pub fn new() -> Self {
        Self::from_contents(&INITIAL_PIECES, Side::Black)
    }

    /// A board with `contents` and `turn` to move.
    ///
    /// `get(col, row) == contents[row - 1][col - 1]`.
    pub fn from_contents(contents: &Contents, turn: Side) -> Self {
        let mut board = Self {
            cells: [Piece::Empty; CELLS],
            turn,
            history: Vec::new(),
        };
        board.initialize(contents, turn);
        board
    }

    /// Replace the whole position with `contents` and `turn` to move, clearing the history.
    pub fn initialize(&mut self, contents: &Contents, turn: Side) {
        self.history.clear();
        for (r, row) in contents.iter().enumerate() {
            for (c, &piece) in row.iter().enumerate() {
                self.cells[Square::at(c as u8 + 1, r as u8 + 1).index()] = piece;
            }
        }
        self.turn = turn;
    }

    /// Reset to the standard starting position.
    pub fn clear(&mut self) {
        self.initialize(&INITIAL_PIECES, Side::Black);
    }

    /// Make `self` a full copy of `other`, history included.
    pub fn copy_from(&mut self, other: &Board) {
        self.clone_from(other);
    }

    /// Contents of column `col`, row `row` (both `1..=8`).
    #[inline]
    pub fn get(&self, col: u8, row: u8) -> Piece {
        self.cells[Square::at(col, row).index()]
    }

    #[inline]
    pub fn get_square(&self, sq: Square) -> Piece {
        self.cells[sq.index()]
    }

    /// Contents of the square named by an `a1`-style designator.
    pub fn get_str(&self, designator: &str) -> LoaResult<Piece> {
        Ok(self.get_square(designator.parse()?))
    }

    #[inline]
    pub fn set(&mut self, col: u8, row: u8, piece: Piece) {
        self.cells[Square::at(col, row).index()] = piece;
    }

    #[inline]
    pub fn set_square(&mut self, sq: Square, piece: Piece) {
        self.cells[sq.index()] = piece;
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Number of moves made and not retracted.
    #[inline]
    pub fn moves_made(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Squares holding `side`'s pieces, ascending column then row.
    pub fn piece_squares(&self, side: Side) -> Vec<Square> {
        Square::all()
            .filter(|&sq| self.get_square(sq).belongs_to(side))
            .collect()
    }

    pub fn piece_count(&self, piece: Piece) -> usize {
        self.cells.iter().filter(|&&p| p == piece).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.turn == other.turn && self.cells == other.cells
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
        self.turn.hash(state);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===")?;
        for row in (1..=BOARD_SIZE).rev() {
            write!(f, "    ")?;
            for col in 1..=BOARD_SIZE {
                write!(f, "{} ", self.get(col, row))?;
            }
            writeln!(f)?;
        }
        write!(f, "Next move: {}\n===", self.turn)
    }
}
