//! Low-level, allocation-free primitives.
//!
//! - [`coord`]: signed column/row offsets and the king-step set.
//! - [`square`]: 1-indexed board squares packed into a `u8`, plus `a1`-style designators.
//! - [`piece`]: cell contents and the two sides.
//! - [`direction`]: the eight compass directions and offset classification.

pub mod coord;
pub mod direction;
pub mod piece;
pub mod square;
