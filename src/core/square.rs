use std::fmt;
use std::str::FromStr;

use crate::core::coord::Coord;
use crate::error::LoaError;

/// Number of columns (and rows) on the board.
pub const BOARD_SIZE: u8 = 8;

/// A board square packed into a single `u8`.
///
/// Columns and rows are 1-indexed (`a1` is column 1, row 1). The packing is
/// `(col - 1) * 8 + (row - 1)`, so the derived ordering is "column first, then row".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// The square at column `col`, row `row`, or `None` if either is outside `1..=8`.
    pub fn new(col: i8, row: i8) -> Option<Square> {
        if in_range(col) && in_range(row) {
            Some(Square(((col - 1) as u8) * BOARD_SIZE + (row - 1) as u8))
        } else {
            None
        }
    }

    /// Like [`Square::new`], but out-of-range coordinates are a caller bug.
    pub fn at(col: u8, row: u8) -> Square {
        assert!(
            (1..=BOARD_SIZE).contains(&col) && (1..=BOARD_SIZE).contains(&row),
            "square ({col},{row}) is off the board"
        );
        Square((col - 1) * BOARD_SIZE + (row - 1))
    }

    /// The square with packed index `index`, if `index < 64`.
    #[inline]
    pub fn from_index(index: usize) -> Option<Square> {
        (index < (BOARD_SIZE * BOARD_SIZE) as usize).then(|| Square(index as u8))
    }

    /// Raw packed representation (`0..64`).
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.0 / BOARD_SIZE + 1
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.0 % BOARD_SIZE + 1
    }

    /// The square `delta` away, if it is still on the board.
    #[inline]
    pub fn offset(self, delta: Coord) -> Option<Square> {
        Square::new(self.col() as i8 + delta.dc, self.row() as i8 + delta.dr)
    }

    /// Signed offset from `self` to `to`.
    #[inline]
    pub fn delta_to(self, to: Square) -> Coord {
        Coord::new(
            to.col() as i8 - self.col() as i8,
            to.row() as i8 - self.row() as i8,
        )
    }

    /// All 64 squares, ascending column then ascending row.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Square)
    }
}

#[inline]
fn in_range(v: i8) -> bool {
    v >= 1 && v <= BOARD_SIZE as i8
}

impl FromStr for Square {
    type Err = LoaError;

    /// Parse a `[a-h][1-8]` designator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            &[c @ b'a'..=b'h', r @ b'1'..=b'8'] => Ok(Square::at(c - b'a' + 1, r - b'0')),
            _ => Err(LoaError::InvalidDesignator(s.to_string())),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = (b'a' + self.col() - 1) as char;
        write!(f, "{c}{}", self.row())
    }
}
