//! Per-cell heuristic scoring for the machine's move
//!
//! Every five-cell window of every orientation is scored from its stone
//! counts, and that score is added to each empty cell inside the window.
//! Windows overlap, so a cell's total is the sum over every window that
//! contains it: up to 5 windows per orientation, 20 in all.

use crate::board::{Board, Pos, Stone, BOARD_SIZE};

use super::patterns::window_score;

/// Cells in one scan window
pub const WINDOW_LEN: usize = 5;

/// Last start index that keeps a forward window on the board
const LAST_START: i32 = (BOARD_SIZE - WINDOW_LEN) as i32; // 10

/// Line orientations scanned by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Along a row
    Horizontal,
    /// Down a column
    Vertical,
    /// Down and to the right
    Diagonal,
    /// Down and to the left
    AntiDiagonal,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::Diagonal,
        Orientation::AntiDiagonal,
    ];

    /// Step between consecutive cells of a window
    #[inline]
    pub fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::Diagonal => (1, 1),
            Orientation::AntiDiagonal => (1, -1),
        }
    }

    /// First cell of every window that fits on the board
    pub fn window_starts(self) -> impl Iterator<Item = Pos> {
        let last = BOARD_SIZE as i32 - 1;
        let (rows, cols) = match self {
            Orientation::Horizontal => (0..=last, 0..=LAST_START),
            Orientation::Vertical => (0..=LAST_START, 0..=last),
            Orientation::Diagonal => (0..=LAST_START, 0..=LAST_START),
            Orientation::AntiDiagonal => (0..=LAST_START, (WINDOW_LEN as i32 - 1)..=last),
        };
        rows.flat_map(move |r| cols.clone().map(move |c| Pos::new(r, c)))
    }

    /// The cells of the window starting at `start`
    #[inline]
    pub fn window(self, start: Pos) -> [Pos; WINDOW_LEN] {
        let (dr, dc) = self.step();
        std::array::from_fn(|i| start.offset(dr, dc, i as i32))
    }
}

/// Accumulated scores for one machine turn.
///
/// Built from scratch by [`score_board`] and dropped once the best cell
/// has been read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreGrid {
    scores: [[i64; BOARD_SIZE]; BOARD_SIZE],
}

impl ScoreGrid {
    pub fn new() -> Self {
        Self {
            scores: [[0; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Score at `pos`, 0 off the board
    #[inline]
    pub fn get(&self, pos: Pos) -> i64 {
        if !pos.is_valid() {
            return 0;
        }
        self.scores[pos.row as usize][pos.col as usize]
    }

    #[inline]
    fn add(&mut self, pos: Pos, score: i64) {
        self.scores[pos.row as usize][pos.col as usize] += score;
    }

    /// Highest-scoring empty cell.
    ///
    /// Scans row-major and only replaces the best on a strictly greater
    /// score, so ties go to the lowest row, then the lowest column. Returns
    /// `None` only when the board has no empty cell.
    pub fn best(&self, board: &Board) -> Option<(Pos, i64)> {
        (0..BOARD_SIZE * BOARD_SIZE)
            .map(Pos::from_index)
            .filter(|&pos| board.is_empty(pos))
            .fold(None, |best, pos| {
                let score = self.get(pos);
                match best {
                    Some((_, best_score)) if score <= best_score => best,
                    _ => Some((pos, score)),
                }
            })
    }
}

impl Default for ScoreGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one orientation's pass, adding each window's score to its empty cells
pub fn scan(board: &Board, orientation: Orientation, grid: &mut ScoreGrid) {
    for start in orientation.window_starts() {
        let cells = orientation.window(start);

        let human = cells.iter().filter(|&&p| board.is(p, Stone::Human)).count();
        let machine = cells.iter().filter(|&&p| board.is(p, Stone::Machine)).count();
        let score = window_score(human, machine);

        for &pos in cells.iter().filter(|&&p| board.is_empty(p)) {
            grid.add(pos, score);
        }
    }
}

/// Score every empty cell for the machine to move into
#[must_use]
pub fn score_board(board: &Board) -> ScoreGrid {
    let mut grid = ScoreGrid::new();
    for orientation in Orientation::ALL {
        scan(board, orientation, &mut grid);
    }
    grid
}
