//! Lines of Action rules on top of [`Board`](crate::board::Board).
//!
//! - [`moves`]: the immutable [`Move`](moves::Move) descriptor and `b1-d3` notation.
//! - [`legality`]: in-line piece counts, blocking and the legality test.
//! - [`play`]: making and retracting moves.
//! - [`movegen`]: the lazy legal-move iterator.
//! - [`contiguity`]: connectivity of a side's pieces and game-over detection.

pub mod contiguity;
pub mod legality;
pub mod movegen;
pub mod moves;
pub mod play;
