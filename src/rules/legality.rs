//! Lines of action: in-line piece counts, blocking and move legality.

use crate::board::Board;
use crate::core::direction::Direction;
use crate::core::square::Square;
use crate::rules::moves::Move;

impl Board {
    /// Number of pieces anywhere on the line through `sq` along `direction` (both ways),
    /// `sq` itself included once if occupied.
    ///
    /// A piece must move exactly this many squares along that line.
    pub fn line_count(&self, sq: Square, direction: Direction) -> u8 {
        let mut count = u8::from(!self.get_square(sq).is_empty());
        for d in [direction, direction.reverse()] {
            let step = d.delta();
            let mut cur = sq.offset(step);
            while let Some(s) = cur {
                if !self.get_square(s).is_empty() {
                    count += 1;
                }
                cur = s.offset(step);
            }
        }
        count
    }

    /// True iff `mv` may not be played because of what is in its way: a piece of the moving
    /// side on the destination, or an opposing piece strictly between origin and destination.
    ///
    /// Pieces of the moving side along the path do not block.
    pub fn blocked(&self, mv: &Move) -> bool {
        let Some(mover) = self.get_square(mv.from()).side() else {
            return true;
        };
        if self.get_square(mv.to()).belongs_to(mover) {
            return true;
        }
        let enemy = mover.opposite();
        mv.path().any(|sq| self.get_square(sq).belongs_to(enemy))
    }

    /// True iff `mv` is legal for the side to move.
    ///
    /// Besides the rules of the game this requires the move's snapshot (moving piece and
    /// destination contents) to still match the board.
    pub fn is_legal(&self, mv: &Move) -> bool {
        let piece = self.get_square(mv.from());
        if !piece.belongs_to(self.turn) {
            return false;
        }
        if piece != mv.moved() || self.get_square(mv.to()) != mv.replaced() {
            return false;
        }
        if mv.length() != self.line_count(mv.from(), mv.direction()) {
            return false;
        }
        !self.blocked(mv)
    }
}
