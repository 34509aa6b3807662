//! Terminal frontend
//!
//! Prints the board as text and reads moves line by line: two letters
//! (`hh`) to place a stone, `back` or `undo` to take back a round.

pub mod render;

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::game::{Command, GameConfig, GameController, GameState};
use crate::notation::{parse_pos, CoordError};

pub use render::{annotation, render_board};

/// Words accepted as an undo request
pub const UNDO_WORDS: [&str; 2] = ["back", "undo"];

/// Turn one input line into a command
pub fn parse_command(line: &str) -> Result<Command, CoordError> {
    let line = line.trim();
    if UNDO_WORDS.iter().any(|w| line.eq_ignore_ascii_case(w)) {
        return Ok(Command::Undo);
    }
    parse_pos(line).map(Command::Place)
}

fn show<W: Write>(out: &mut W, game: &GameController) -> io::Result<()> {
    writeln!(out, "{}", render_board(game.board()))?;
    if let Some(line) = annotation(game.last_move()) {
        writeln!(out, "\n{}", line)?;
    }
    Ok(())
}

/// Play one game over text streams.
///
/// Keeps asking for a move until a valid one arrives. Returns the final
/// state, or the current one if input runs out first.
pub fn run<R: BufRead, W: Write>(config: GameConfig, input: R, mut out: W) -> io::Result<GameState> {
    let mut game = GameController::new(config);
    let mut lines = input.lines();

    show(&mut out, &game)?;

    loop {
        match game.state() {
            GameState::MachineTurn => {
                game.advance();
                show(&mut out, &game)?;
            }
            GameState::HumanTurn => {
                write!(out, "\nYour turn : ")?;
                out.flush()?;

                let Some(line) = lines.next().transpose()? else {
                    debug!("input closed");
                    writeln!(out)?;
                    return Ok(game.state());
                };

                let command = match parse_command(&line) {
                    Ok(command) => command,
                    Err(err) => {
                        writeln!(out, "Invalid coordinate: {}", err)?;
                        continue;
                    }
                };

                match game.handle(command) {
                    Ok(_) => show(&mut out, &game)?,
                    Err(err) => writeln!(out, "Rejected: {}", err)?,
                }
            }
            state @ (GameState::Won(_) | GameState::Draw) => {
                let text = state.result_text().unwrap_or_default();
                info!(result = text, "game over");
                writeln!(out, "\n{}.", text)?;
                return Ok(state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pos;
    use std::io::Cursor;

    fn play(config: GameConfig, input: &str) -> (GameState, String) {
        let mut out = Vec::new();
        let state = run(config, Cursor::new(input.to_string()), &mut out).unwrap();
        (state, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("back"), Ok(Command::Undo));
        assert_eq!(parse_command(" UNDO "), Ok(Command::Undo));
        assert_eq!(parse_command("hh"), Ok(Command::Place(Pos::CENTER)));
        assert!(parse_command("h").is_err());
        assert!(parse_command("backk").is_err());
    }

    #[test]
    fn test_machine_opens_in_text_game() {
        let (state, out) = play(GameConfig::machine_first(), "");
        assert_eq!(state, GameState::HumanTurn);
        assert!(out.contains("Machine : [h,h]"));
        assert!(out.contains(" h | . . . . . . . x . . . . . . . | h"));
    }

    #[test]
    fn test_human_move_gets_reply() {
        let (state, out) = play(GameConfig::human_first(), "hh\n");
        assert_eq!(state, GameState::HumanTurn);
        assert!(out.contains("Human : [h,h]"));
        assert!(out.contains("Machine : [g,g]"));
    }

    #[test]
    fn test_bad_input_is_reprompted() {
        let (state, out) = play(GameConfig::machine_first(), "zz\nhh\nq\n");
        assert_eq!(state, GameState::HumanTurn);
        assert!(out.contains("Invalid coordinate: 'z' is not a coordinate letter (a-o)"));
        assert!(out.contains("Rejected: cell (7, 7) is already occupied"));
        assert!(out.contains("Invalid coordinate: expected two letters, got 1"));
    }

    #[test]
    fn test_back_restores_previous_annotation() {
        let (_, out) = play(GameConfig::machine_first(), "aa\nback\n");
        let last_board = out.rsplit("Your turn").nth(1).unwrap();
        assert!(last_board.contains("Machine : [h,h]"));
        assert!(last_board.contains(" a | . . . . . . . . . . . . . . . | a"));
    }
}
