use crate::core::coord::Coord;
use crate::core::square::Square;

/// One of the eight compass directions a piece can move along.
///
/// North is increasing row, east is increasing column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    N,
    S,
    W,
    E,
    NE,
    NW,
    SE,
    SW,
}

impl Direction {
    /// Fixed order in which move generation tries directions.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::W,
        Direction::E,
        Direction::NE,
        Direction::NW,
        Direction::SE,
        Direction::SW,
    ];

    /// Unit step for this direction.
    #[inline]
    pub fn delta(self) -> Coord {
        use Direction::*;
        match self {
            N => Coord::new(0, 1),
            S => Coord::new(0, -1),
            W => Coord::new(-1, 0),
            E => Coord::new(1, 0),
            NE => Coord::new(1, 1),
            NW => Coord::new(-1, 1),
            SE => Coord::new(1, -1),
            SW => Coord::new(-1, -1),
        }
    }

    #[inline]
    pub fn reverse(self) -> Direction {
        use Direction::*;
        match self {
            N => S,
            S => N,
            W => E,
            E => W,
            NE => SW,
            SW => NE,
            NW => SE,
            SE => NW,
        }
    }

    /// Direction of travel for an offset, decided by the signs of its components.
    ///
    /// `None` only for the zero offset. The offset does not have to be a straight line.
    pub fn of_delta(d: Coord) -> Option<Direction> {
        use Direction::*;
        match (d.dc.signum(), d.dr.signum()) {
            (0, 1) => Some(N),
            (0, -1) => Some(S),
            (-1, 0) => Some(W),
            (1, 0) => Some(E),
            (1, 1) => Some(NE),
            (-1, 1) => Some(NW),
            (1, -1) => Some(SE),
            (-1, -1) => Some(SW),
            _ => None,
        }
    }

    /// Direction from `from` to `to`.
    #[inline]
    pub fn classify(from: Square, to: Square) -> Option<Direction> {
        Direction::of_delta(from.delta_to(to))
    }
}
