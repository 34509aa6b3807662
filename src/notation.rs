//! Letter coordinates for text input and move annotations
//!
//! Rows and columns are each written as one letter, `a` through `o` for
//! indices 0 through 14, row first: `hh` is the centre.

use derive_more::{Display, Error};

use crate::board::{Pos, BOARD_SIZE};

/// Malformed coordinate text
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CoordError {
    #[display("expected two letters, got {len}")]
    WrongLength { len: usize },
    #[display("'{letter}' is not a coordinate letter (a-o)")]
    InvalidLetter { letter: char },
}

/// Index of a coordinate letter. Case-insensitive.
pub fn letter_index(letter: char) -> Result<i32, CoordError> {
    let lower = letter.to_ascii_lowercase();
    if !lower.is_ascii_lowercase() {
        return Err(CoordError::InvalidLetter { letter });
    }
    let idx = (lower as u8 - b'a') as usize;
    if idx >= BOARD_SIZE {
        return Err(CoordError::InvalidLetter { letter });
    }
    Ok(idx as i32)
}

/// Letter for a row or column index. Only meaningful for `0..BOARD_SIZE`.
#[inline]
pub fn index_letter(idx: i32) -> char {
    debug_assert!((0..BOARD_SIZE as i32).contains(&idx));
    (b'a' + idx as u8) as char
}

/// Parse a two-letter coordinate such as `"hh"`.
///
/// Surrounding whitespace is ignored. Anything that is not exactly two
/// letters in `a..=o` is rejected, so the result is always on the board.
pub fn parse_pos(text: &str) -> Result<Pos, CoordError> {
    let letters: Vec<char> = text.trim().chars().collect();
    let &[row, col] = letters.as_slice() else {
        return Err(CoordError::WrongLength { len: letters.len() });
    };
    Ok(Pos::new(letter_index(row)?, letter_index(col)?))
}

/// Annotation form of a position, `[row,col]`
pub fn format_pos(pos: Pos) -> String {
    format!("[{},{}]", index_letter(pos.row), index_letter(pos.col))
}
