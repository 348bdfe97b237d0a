use std::ops::{Mul, Neg};

/// A signed column/row offset between two squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub dc: i8,
    pub dr: i8,
}

impl Coord {
    pub const ZERO: Coord = Coord { dc: 0, dr: 0 };

    #[inline]
    pub const fn new(dc: i8, dr: i8) -> Self {
        Self { dc, dr }
    }

    #[inline]
    pub fn chebyshev_norm(self) -> i8 {
        self.dc.abs().max(self.dr.abs())
    }

    /// True iff the offset runs along a rank, file or diagonal.
    #[inline]
    pub fn is_line(self) -> bool {
        self != Coord::ZERO && (self.dc == 0 || self.dr == 0 || self.dc.abs() == self.dr.abs())
    }
}

impl Neg for Coord {
    type Output = Coord;

    #[inline]
    fn neg(self) -> Self::Output {
        Coord::new(-self.dc, -self.dr)
    }
}

impl Mul<i8> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i8) -> Coord {
        Coord {
            dc: self.dc * rhs,
            dr: self.dr * rhs,
        }
    }
}

/// The 8 king steps around a square.
pub const KING_STEPS: [Coord; 8] = [
    Coord { dc: -1, dr: -1 },
    Coord { dc: -1, dr: 0 },
    Coord { dc: -1, dr: 1 },
    Coord { dc: 0, dr: -1 },
    Coord { dc: 0, dr: 1 },
    Coord { dc: 1, dr: -1 },
    Coord { dc: 1, dr: 0 },
    Coord { dc: 1, dr: 1 },
];
