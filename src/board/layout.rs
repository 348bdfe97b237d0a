use crate::core::piece::Piece;
use crate::core::square::BOARD_SIZE;
use crate::error::{LoaError, LoaResult};

use crate::core::piece::Piece::{Black as BP, Empty as EMP, White as WP};

/// Full board contents, indexed `contents[row - 1][col - 1]`.
///
/// Written as an array literal the *bottom* row (row 1) comes first.
pub type Contents = [[Piece; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// The standard starting position: Black on rows 1 and 8, White on columns a and h,
/// corners empty.
pub const INITIAL_PIECES: Contents = [
    [EMP, BP, BP, BP, BP, BP, BP, EMP],
    [WP, EMP, EMP, EMP, EMP, EMP, EMP, WP],
    [WP, EMP, EMP, EMP, EMP, EMP, EMP, WP],
    [WP, EMP, EMP, EMP, EMP, EMP, EMP, WP],
    [WP, EMP, EMP, EMP, EMP, EMP, EMP, WP],
    [WP, EMP, EMP, EMP, EMP, EMP, EMP, WP],
    [WP, EMP, EMP, EMP, EMP, EMP, EMP, WP],
    [EMP, BP, BP, BP, BP, BP, BP, EMP],
];

/// An all-empty board.
pub const EMPTY: Contents = [[EMP; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// Build contents from a diagram, top row (row 8) first, the way boards are printed.
///
/// Each row holds eight markers (`b`, `w` or `-`); whitespace is ignored.
pub fn from_diagram(rows: [&str; BOARD_SIZE as usize]) -> LoaResult<Contents> {
    let mut contents = EMPTY;
    for (i, text) in rows.iter().enumerate() {
        let row = BOARD_SIZE - i as u8;
        let bad = || LoaError::InvalidDiagram {
            row,
            text: text.to_string(),
        };

        let markers: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
        if markers.len() != BOARD_SIZE as usize {
            return Err(bad());
        }
        for (c, m) in markers.into_iter().enumerate() {
            contents[(row - 1) as usize][c] = match m {
                'b' => BP,
                'w' => WP,
                '-' => EMP,
                _ => return Err(bad()),
            };
        }
    }
    Ok(contents)
}
