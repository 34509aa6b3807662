//! Board art for the terminal

use crate::board::{Board, Side, Stone, BOARD_SIZE};
use crate::notation::{format_pos, index_letter};
use crate::Pos;

pub const EMPTY_CHAR: char = '.';
pub const HUMAN_CHAR: char = 'o';
pub const MACHINE_CHAR: char = 'x';

fn stone_char(stone: Stone) -> char {
    match stone {
        Stone::Empty => EMPTY_CHAR,
        Stone::Human => HUMAN_CHAR,
        Stone::Machine => MACHINE_CHAR,
    }
}

fn ruler() -> String {
    let letters: Vec<String> = (0..BOARD_SIZE as i32).map(|i| index_letter(i).to_string()).collect();
    format!("     {}", letters.join(" "))
}

fn border() -> String {
    format!("   |{}|", "-".repeat(BOARD_SIZE * 2 + 1))
}

/// Full board with letter rulers on all four sides
pub fn render_board(board: &Board) -> String {
    let cells = board.snapshot();
    let mut lines = Vec::with_capacity(BOARD_SIZE + 4);

    lines.push(ruler());
    lines.push(border());
    for (r, row) in cells.iter().enumerate() {
        let letter = index_letter(r as i32);
        let stones: Vec<String> = row.iter().map(|&s| stone_char(s).to_string()).collect();
        lines.push(format!(" {} | {} | {}", letter, stones.join(" "), letter));
    }
    lines.push(border());
    lines.push(ruler());

    lines.join("\n")
}

/// Line naming the latest move, e.g. `Machine : [h,h]`
pub fn annotation(last_move: Option<(Side, Pos)>) -> Option<String> {
    let (side, pos) = last_move?;
    let who = match side {
        Side::Human => "Human",
        Side::Machine => "Machine",
    };
    Some(format!("{} : {}", who, format_pos(pos)))
}
