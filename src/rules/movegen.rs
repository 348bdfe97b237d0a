use std::iter::FusedIterator;

use crate::board::Board;
use crate::core::direction::Direction;
use crate::core::square::Square;
use crate::rules::moves::Move;

/// Lazy traversal of every legal move for the side to move.
///
/// Origins are visited by ascending column then ascending row, and each origin tries
/// [`Direction::ALL`] in order. The iterator borrows the board, so the position cannot
/// change under it; create a new one to restart.
#[derive(Debug, Clone)]
pub struct LegalMoves<'a> {
    board: &'a Board,
    square: usize,
    dir: usize,
}

impl<'a> LegalMoves<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            square: 0,
            dir: 0,
        }
    }
}

impl Iterator for LegalMoves<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        let turn = self.board.turn();
        while let Some(from) = Square::from_index(self.square) {
            if self.board.get_square(from).belongs_to(turn) {
                while let Some(&dir) = Direction::ALL.get(self.dir) {
                    self.dir += 1;
                    let length = self.board.line_count(from, dir);
                    if let Some(mv) = Move::along(self.board, from, length, dir) {
                        if self.board.is_legal(&mv) {
                            return Some(mv);
                        }
                    }
                }
            }
            self.square += 1;
            self.dir = 0;
        }
        None
    }
}

impl FusedIterator for LegalMoves<'_> {}

impl Board {
    /// Every legal move for the side to move, lazily.
    pub fn legal_moves(&self) -> LegalMoves<'_> {
        LegalMoves::new(self)
    }

    /// True iff the side to move has at least one legal move.
    pub fn has_legal_move(&self) -> bool {
        self.legal_moves().next().is_some()
    }
}
