//! Game rules for Gobang
//!
//! Five or more stones of one side in an unbroken line wins. Overlines
//! count; there are no forbidden moves and no captures.

pub mod win;

// Re-exports for convenient access
pub use win::{find_five_line_at_pos, has_five_at_pos, DIRECTIONS, WIN_LENGTH};
