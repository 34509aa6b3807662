//! Board structure with checked placement

use super::{Pos, Side, Stone, BOARD_SIZE, TOTAL_CELLS};

/// Game board: a 15x15 grid of cells, row-major.
///
/// Cells change only through [`Board::place`] and [`Board::clear`]; every
/// query treats an off-board position as absent instead of indexing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Stone; BOARD_SIZE]; BOARD_SIZE],
    /// Non-empty cells, kept in step with `cells`
    stone_count: u32,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Stone::Empty; BOARD_SIZE]; BOARD_SIZE],
            stone_count: 0,
        }
    }

    #[inline]
    pub fn is_in_bounds(&self, pos: Pos) -> bool {
        pos.is_valid()
    }

    /// Get stone at position, `None` when off the board
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Stone> {
        pos.is_valid()
            .then(|| self.cells[pos.row as usize][pos.col as usize])
    }

    /// Check if an on-board position holds `stone`. Always false off the board.
    #[inline]
    pub fn is(&self, pos: Pos, stone: Stone) -> bool {
        self.get(pos) == Some(stone)
    }

    /// Check if position is on the board and empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.is(pos, Stone::Empty)
    }

    /// Place a stone for `side`.
    ///
    /// Returns false without touching the board if the cell is occupied or
    /// off the board.
    #[inline]
    pub fn place(&mut self, pos: Pos, side: Side) -> bool {
        if !self.is_empty(pos) {
            return false;
        }
        self.cells[pos.row as usize][pos.col as usize] = side.stone();
        self.stone_count += 1;
        true
    }

    /// Reset a cell to empty. No-op off the board.
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        if !pos.is_valid() {
            return;
        }
        let cell = &mut self.cells[pos.row as usize][pos.col as usize];
        if *cell != Stone::Empty {
            *cell = Stone::Empty;
            self.stone_count -= 1;
        }
    }

    /// Every stone on the board with its owner, in row-major order
    pub fn stones(&self) -> impl Iterator<Item = (Pos, Side)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, stone)| Some((Pos::new(r as i32, c as i32), stone.side()?)))
        })
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.stone_count
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stone_count == 0
    }

    /// No empty cell left
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count as usize == TOTAL_CELLS
    }

    /// Row-major copy of every cell, for renderers
    #[inline]
    pub fn snapshot(&self) -> [[Stone; BOARD_SIZE]; BOARD_SIZE] {
        self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
