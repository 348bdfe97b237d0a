//! Move choice for automated players.
//!
//! The engine only promises "here is a board, propose one legal move"; how a strategy picks
//! (and how deep it looks) is up to the implementation.

use crate::board::Board;
use crate::rules::moves::Move;

/// An automated player.
pub trait Strategy {
    /// Short human-readable name, used in logs.
    fn name(&self) -> &str;

    /// A legal move for `board.turn()`, or `None` if there is none.
    fn choose(&mut self, board: &Board) -> Option<Move>;
}

/// Always plays the first move in generation order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstLegal;

impl Strategy for FirstLegal {
    fn name(&self) -> &str {
        "first-legal"
    }

    fn choose(&mut self, board: &Board) -> Option<Move> {
        board.legal_moves().next()
    }
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn choose(&mut self, board: &Board) -> Option<Move> {
        (**self).choose(board)
    }
}
