//! Five-in-a-row detection through a just-played cell
//!
//! A placement can only complete a line that passes through itself, so the
//! check walks the four orientations from that one cell instead of scanning
//! the whole board.

use crate::board::{Board, Pos, Stone};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Direction vectors for line checking (4 orientations)
/// Each orientation is walked both ways, so the other 4 directions are covered.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Length of the run of `stone` through `pos` along `(dr, dc)`.
///
/// Walks forward starting at `pos` itself, then backward starting one step
/// before it, so `pos` is counted once.
#[inline]
fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> (usize, usize) {
    let forward = (0..)
        .take_while(|&i| board.is(pos.offset(dr, dc, i), stone))
        .count();
    let backward = (1..)
        .take_while(|&i| board.is(pos.offset(dr, dc, -i), stone))
        .count();
    (forward, backward)
}

/// Check whether the stone at `pos` sits on a line of 5 or more.
///
/// An empty or off-board `pos` never wins.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos) -> bool {
    let stone = match board.get(pos) {
        Some(Stone::Empty) | None => return false,
        Some(stone) => stone,
    };

    DIRECTIONS.iter().any(|&(dr, dc)| {
        let (forward, backward) = run_length(board, pos, dr, dc, stone);
        forward + backward >= WIN_LENGTH
    })
}

/// Positions of the winning run through `pos`, ordered along the line.
///
/// Returns the whole run (an overline yields more than 5 positions), or
/// `None` if no orientation through `pos` reaches five.
pub fn find_five_line_at_pos(board: &Board, pos: Pos) -> Option<Vec<Pos>> {
    let stone = board.get(pos).filter(|&s| s != Stone::Empty)?;

    DIRECTIONS.iter().find_map(|&(dr, dc)| {
        let (forward, backward) = run_length(board, pos, dr, dc, stone);
        if forward + backward < WIN_LENGTH {
            return None;
        }
        let start = pos.offset(dr, dc, -(backward as i32));
        Some(
            (0..(forward + backward) as i32)
                .map(|i| start.offset(dr, dc, i))
                .collect(),
        )
    })
}
