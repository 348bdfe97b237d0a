use std::fmt;

/// A player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
}

impl Side {
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    pub fn full_name(self) -> &'static str {
        match self {
            Side::Black => "black",
            Side::White => "white",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    Black,
    White,
    #[default]
    Empty,
}

impl Piece {
    /// Owner of the piece, `None` for an empty cell.
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Piece::Black => Some(Side::Black),
            Piece::White => Some(Side::White),
            Piece::Empty => None,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }

    #[inline]
    pub fn belongs_to(self, side: Side) -> bool {
        self.side() == Some(side)
    }

    /// One-character marker used by board diagrams.
    pub fn abbrev(self) -> char {
        match self {
            Piece::Black => 'b',
            Piece::White => 'w',
            Piece::Empty => '-',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}
