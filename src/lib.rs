//! A Lines of Action engine: board state, move legality and generation, win detection,
//! plus a small game-session layer and pluggable automated players.

pub mod board;
pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;
pub mod search;

pub use crate::board::Board;
pub use crate::core::direction::Direction;
pub use crate::core::piece::{Piece, Side};
pub use crate::core::square::Square;
pub use crate::error::{LoaError, LoaResult};
pub use crate::game::{Game, GameStatus};
pub use crate::rules::moves::Move;
