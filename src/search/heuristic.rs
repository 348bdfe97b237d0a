//! A one-ply greedy player that tries to pull its own pieces together and keep the
//! opponent's spread out.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::board::Board;
use crate::core::piece::Side;
use crate::core::square::Square;
use crate::rules::moves::Move;
use crate::search::strategy::Strategy;

/// Score of a move that connects the mover's pieces.
pub const WIN_SCORE: i64 = i64::MAX;
/// Score of a move after which only the opponent is connected.
pub const LOSS_SCORE: i64 = i64::MIN;

/// Sum of truncated Euclidean distances over all ordered pairs of `squares`.
pub fn spread(squares: &[Square]) -> i64 {
    let mut sum = 0i64;
    for (i, a) in squares.iter().enumerate() {
        for (j, b) in squares.iter().enumerate() {
            if i == j {
                continue;
            }
            let d = a.delta_to(*b);
            let dist = f64::from(d.dc).hypot(f64::from(d.dr));
            sum += dist as i64;
        }
    }
    sum
}

/// How good `mv` is for the side to move on `board`: higher is better.
pub fn score_move(board: &Board, mv: Move) -> i64 {
    let mover: Side = board.turn();
    let mut after = board.clone();
    after.make_move(mv);

    if after.pieces_contiguous(mover) {
        return WIN_SCORE;
    }
    if after.pieces_contiguous(mover.opposite()) {
        return LOSS_SCORE;
    }
    spread(&after.piece_squares(mover.opposite())) - spread(&after.piece_squares(mover))
}

/// Greedy distance heuristic with a short memory of its own moves.
///
/// Moves it already played are skipped (unless nothing else is legal), which keeps two
/// greedy players from shuffling the same piece back and forth forever. The memory is
/// wiped every `memory_reset` choices; 0 disables the wipe.
#[derive(Debug, Clone, Default)]
pub struct DistanceHeuristic {
    played: FxHashSet<Move>,
    choices: usize,
    memory_reset: usize,
}

impl DistanceHeuristic {
    pub fn new(memory_reset: usize) -> Self {
        Self {
            played: FxHashSet::default(),
            choices: 0,
            memory_reset,
        }
    }

    /// Number of moves currently remembered.
    pub fn remembered(&self) -> usize {
        self.played.len()
    }

    fn best(&self, board: &Board, skip_played: bool) -> Option<(Move, i64)> {
        let mut best: Option<(Move, i64)> = None;
        for mv in board.legal_moves() {
            if skip_played && self.played.contains(&mv) {
                continue;
            }
            let score = score_move(board, mv);
            trace!(%mv, score, "scored move");
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mv, score));
            }
        }
        best
    }
}

impl Strategy for DistanceHeuristic {
    fn name(&self) -> &str {
        "distance"
    }

    fn choose(&mut self, board: &Board) -> Option<Move> {
        if self.memory_reset > 0 && self.choices % self.memory_reset == 0 {
            self.played.clear();
            self.choices = 0;
        }
        self.choices += 1;

        let (mv, score) = self
            .best(board, true)
            .or_else(|| self.best(board, false))?;
        debug!(side = %board.turn(), %mv, score, "distance heuristic choice");
        self.played.insert(mv);
        Some(mv)
    }
}
