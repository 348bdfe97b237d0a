//! Win detection: is one side's material a single king-connected group?

use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::core::coord::KING_STEPS;
use crate::core::piece::Side;
use crate::core::square::Square;

impl Board {
    /// The set of `side`'s pieces reachable from `start` by king steps over `side`'s pieces.
    pub fn connected_group(&self, start: Square) -> FxHashSet<Square> {
        let mut seen: FxHashSet<Square> = FxHashSet::default();
        let Some(side) = self.get_square(start).side() else {
            return seen;
        };

        let mut stack = vec![start];
        seen.insert(start);
        while let Some(sq) = stack.pop() {
            for &step in &KING_STEPS {
                let Some(next) = sq.offset(step) else {
                    continue;
                };
                if self.get_square(next).belongs_to(side) && seen.insert(next) {
                    stack.push(next);
                }
            }
        }
        seen
    }

    /// True iff all of `side`'s pieces form one group under king-move adjacency.
    ///
    /// A side with no pieces is not contiguous.
    pub fn pieces_contiguous(&self, side: Side) -> bool {
        let squares = self.piece_squares(side);
        match squares.first() {
            None => false,
            Some(&start) => self.connected_group(start).len() == squares.len(),
        }
    }

    /// True iff either side has connected all of its pieces.
    pub fn game_over(&self) -> bool {
        self.pieces_contiguous(Side::Black) || self.pieces_contiguous(Side::White)
    }
}
