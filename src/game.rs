use tracing::{debug, info};

use crate::board::Board;
use crate::core::piece::Side;
use crate::error::{LoaError, LoaResult};
use crate::rules::moves::Move;
use crate::search::strategy::Strategy;

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Over { winner: Side },
}

/// A game session: a [`Board`] plus the InProgress/Over state machine.
///
/// Unlike the raw board, every operation here checks its preconditions and reports a
/// [`LoaError`] instead of panicking.
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
}

impl Game {
    /// A game from the standard starting position.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// A game continuing from `board`.
    pub fn from_board(board: Board) -> Self {
        Self { board }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// The winner if the game is over.
    ///
    /// When both sides are connected at once, the side that just moved wins; with no move
    /// on record the side to move is credited.
    pub fn winner(&self) -> Option<Side> {
        let black = self.board.pieces_contiguous(Side::Black);
        let white = self.board.pieces_contiguous(Side::White);
        match (black, white) {
            (true, true) => Some(match self.board.last_move() {
                Some(_) => self.board.turn().opposite(),
                None => self.board.turn(),
            }),
            (true, false) => Some(Side::Black),
            (false, true) => Some(Side::White),
            (false, false) => None,
        }
    }

    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(winner) => GameStatus::Over { winner },
            None => GameStatus::InProgress,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.board.game_over()
    }

    /// Play `mv` if the game is still running and the move is legal.
    pub fn play(&mut self, mv: &Move) -> LoaResult<GameStatus> {
        if self.is_over() {
            return Err(LoaError::GameOver);
        }
        if !self.board.is_legal(mv) {
            return Err(LoaError::IllegalMove(mv.to_string()));
        }

        let side = self.board.turn();
        self.board.make_move(*mv);
        debug!(%side, %mv, ply = self.board.moves_made(), "move played");

        let status = self.status();
        if let GameStatus::Over { winner } = status {
            info!(%winner, plies = self.board.moves_made(), "game over");
        }
        Ok(status)
    }

    /// Parse `"b1-d3"` notation and play it.
    pub fn play_notation(&mut self, text: &str) -> LoaResult<GameStatus> {
        let mv = Move::parse(text.trim(), &self.board)?;
        self.play(&mv)
    }

    /// Ask `strategy` for a move and play it.
    pub fn step<S: Strategy + ?Sized>(&mut self, strategy: &mut S) -> LoaResult<(Move, GameStatus)> {
        if self.is_over() {
            return Err(LoaError::GameOver);
        }
        let mv = strategy.choose(&self.board).ok_or(LoaError::NoLegalMoves)?;
        debug!(strategy = strategy.name(), %mv, "strategy proposed move");
        let status = self.play(&mv)?;
        Ok((mv, status))
    }

    /// Take back the last move. This may turn a finished game back into a running one.
    pub fn undo(&mut self) -> LoaResult<Move> {
        if self.board.moves_made() == 0 {
            return Err(LoaError::NothingToUndo);
        }
        let mv = self.board.retract();
        debug!(%mv, "move retracted");
        Ok(mv)
    }
}
