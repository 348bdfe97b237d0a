//! Making and retracting moves.

use crate::board::Board;
use crate::core::piece::Piece;
use crate::rules::moves::Move;

impl Board {
    /// Play `mv`, capturing whatever opposing piece is on the destination.
    ///
    /// Panics if `mv` is not legal.
    pub fn make_move(&mut self, mv: Move) {
        assert!(self.is_legal(&mv), "illegal move {mv} for {}", self.turn);
        self.set_square(mv.to(), mv.moved());
        self.set_square(mv.from(), Piece::Empty);
        self.turn = self.turn.opposite();
        self.history.push(mv);
    }

    /// Take back the most recent move, restoring any captured piece.
    ///
    /// Panics if no move has been made.
    pub fn retract(&mut self) -> Move {
        let mv = self
            .history
            .pop()
            .unwrap_or_else(|| panic!("retract with no moves made"));
        self.set_square(mv.to(), mv.replaced());
        self.set_square(mv.from(), mv.moved());
        self.turn = self.turn.opposite();
        mv
    }
}
