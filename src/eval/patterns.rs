//! Window scores for the five-cell scan
//!
//! A window is five consecutive cells along one orientation. Its score
//! depends only on how many stones each side has inside it.

/// Score table for a five-cell window.
///
/// Machine runs are weighted above human runs of the same length, so the
/// engine prefers extending its own line to blocking one of equal size.
pub struct WindowScore;

impl WindowScore {
    /// Both sides present: nobody can complete five here
    pub const BLOCKED: i64 = 0;
    /// No stones at all
    pub const OPEN: i64 = 7;

    pub const HUMAN_ONE: i64 = 15;
    pub const HUMAN_TWO: i64 = 400;
    pub const HUMAN_THREE: i64 = 1_800;
    /// Human needs one more stone here to win
    pub const HUMAN_FOUR: i64 = 100_000;

    pub const MACHINE_ONE: i64 = 35;
    pub const MACHINE_TWO: i64 = 800;
    pub const MACHINE_THREE: i64 = 15_000;
    /// Machine wins by filling the last cell
    pub const MACHINE_FOUR: i64 = 800_000;
}

/// Score of a window holding `human` human stones and `machine` machine
/// stones.
///
/// A window of five with five stones of one side is a finished game and
/// never reaches the scan, so it scores like a blocked window.
#[inline]
pub fn window_score(human: usize, machine: usize) -> i64 {
    match (human, machine) {
        (0, 0) => WindowScore::OPEN,
        (1, 0) => WindowScore::HUMAN_ONE,
        (2, 0) => WindowScore::HUMAN_TWO,
        (3, 0) => WindowScore::HUMAN_THREE,
        (4, 0) => WindowScore::HUMAN_FOUR,
        (0, 1) => WindowScore::MACHINE_ONE,
        (0, 2) => WindowScore::MACHINE_TWO,
        (0, 3) => WindowScore::MACHINE_THREE,
        (0, 4) => WindowScore::MACHINE_FOUR,
        _ => WindowScore::BLOCKED,
    }
}
