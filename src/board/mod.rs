//! Board representation for Gobang

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Board size (15x15)
pub const BOARD_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 225

/// The two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Machine,
}

impl Side {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Machine,
            Side::Machine => Side::Human,
        }
    }

    /// Stone this side puts on the board
    #[inline]
    pub fn stone(self) -> Stone {
        match self {
            Side::Human => Stone::Human,
            Side::Machine => Stone::Machine,
        }
    }
}

/// Cell values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Human,
    Machine,
}

impl Stone {
    /// Side owning this stone (None for Empty)
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Stone::Human => Some(Side::Human),
            Stone::Machine => Some(Side::Machine),
            Stone::Empty => None,
        }
    }
}

/// Position on the board.
///
/// Coordinates are signed so that a step off any edge is still a
/// representable position; [`Pos::is_valid`] tells whether it is on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Board centre, where the machine opens
    pub const CENTER: Pos = Pos::new(7, 7);

    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// True iff both coordinates lie in `0..BOARD_SIZE`
    #[inline]
    pub fn is_valid(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE as i32 && self.col >= 0 && self.col < BOARD_SIZE as i32
    }

    /// Row-major index. Only meaningful for valid positions.
    #[inline]
    pub fn to_index(self) -> usize {
        debug_assert!(self.is_valid());
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as i32,
            col: (idx % BOARD_SIZE) as i32,
        }
    }

    /// Position `steps` cells away along `(dr, dc)`
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, steps: i32) -> Self {
        Self {
            row: self.row + dr * steps,
            col: self.col + dc * steps,
        }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
