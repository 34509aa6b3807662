//! Turn state machine for human vs. machine play

use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

use super::config::GameConfig;
use super::history::RoundHistory;
use crate::board::{Board, Pos, Side};
use crate::engine::{MoveResult, ScoringEngine};
use crate::rules::{find_five_line_at_pos, has_five_at_pos};

/// Externally visible game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for a human move or undo
    HumanTurn,
    /// The machine moves next, with no outside input
    MachineTurn,
    /// Terminal: `side` has five in a row
    Won(Side),
    /// Terminal: board filled without a winner
    Draw,
}

impl GameState {
    /// Waiting state for `side` to move
    #[inline]
    pub fn turn_of(side: Side) -> Self {
        match side {
            Side::Human => GameState::HumanTurn,
            Side::Machine => GameState::MachineTurn,
        }
    }

    #[inline]
    pub fn is_over(self) -> bool {
        matches!(self, GameState::Won(_) | GameState::Draw)
    }

    /// Result line for a finished game
    pub fn result_text(self) -> Option<&'static str> {
        match self {
            GameState::Won(Side::Human) => Some("Human wins"),
            GameState::Won(Side::Machine) => Some("Machine wins"),
            GameState::Draw => Some("Draw"),
            GameState::HumanTurn | GameState::MachineTurn => None,
        }
    }
}

/// Input accepted on the human's turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(Pos),
    Undo,
}

/// Why a turn request was refused. All of these leave the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum TurnError {
    #[display("cell {pos} is off the board")]
    OutOfBounds { pos: Pos },
    #[display("cell {pos} is already occupied")]
    Occupied { pos: Pos },
    #[display("it is not the human's turn")]
    NotHumanTurn,
    #[display("it is not the machine's turn")]
    NotMachineTurn,
    #[display("the game is over")]
    GameOver,
}

/// Drives one game: validates human moves, asks the engine for replies,
/// keeps the round history and detects the result.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    engine: ScoringEngine,
    history: RoundHistory,
    state: GameState,
    config: GameConfig,
    /// Scripted machine opening, once played
    opening: Option<Pos>,
    last_move: Option<(Side, Pos)>,
    last_machine_result: Option<MoveResult>,
    winning_line: Option<Vec<Pos>>,
}

impl GameController {
    pub fn new(config: GameConfig) -> Self {
        let state = GameState::turn_of(config.opener);
        debug!(opener = ?config.opener, "new game");
        Self {
            board: Board::new(),
            engine: ScoringEngine::new(),
            history: RoundHistory::new(),
            state,
            config,
            opening: None,
            last_move: None,
            last_machine_result: None,
            winning_line: None,
        }
    }

    /// Start over with the same configuration
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    #[inline]
    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    /// Most recent stone still on the board, for the annotation line
    #[inline]
    pub fn last_move(&self) -> Option<(Side, Pos)> {
        self.last_move
    }

    /// Statistics of the latest machine move
    #[inline]
    pub fn last_machine_result(&self) -> Option<&MoveResult> {
        self.last_machine_result.as_ref()
    }

    /// The winning run, once somebody has won
    #[inline]
    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    /// Apply a human command
    pub fn handle(&mut self, command: Command) -> Result<GameState, TurnError> {
        match command {
            Command::Place(pos) => self.play_human(pos),
            Command::Undo => self.undo().map(|_| self.state),
        }
    }

    /// Place the human's stone at `pos`.
    ///
    /// On a rejected cell the state stays `HumanTurn` and the caller should
    /// ask again.
    #[instrument(skip(self), fields(row = pos.row, col = pos.col))]
    pub fn play_human(&mut self, pos: Pos) -> Result<GameState, TurnError> {
        self.expect_turn(GameState::HumanTurn, TurnError::NotHumanTurn)?;

        if !self.board.place(pos, Side::Human) {
            let err = if self.board.is_in_bounds(pos) {
                TurnError::Occupied { pos }
            } else {
                TurnError::OutOfBounds { pos }
            };
            debug!(%err, "human move rejected");
            return Err(err);
        }

        self.history.record_human(pos);
        Ok(self.finish_move(Side::Human, pos))
    }

    /// Play the machine's move.
    ///
    /// The first move of a machine-opened game is the board centre; every
    /// other move comes from the scoring engine.
    #[instrument(skip(self))]
    pub fn play_machine(&mut self) -> Result<GameState, TurnError> {
        self.expect_turn(GameState::MachineTurn, TurnError::NotMachineTurn)?;

        let opening = self.config.opener == Side::Machine
            && self.opening.is_none()
            && self.board.is_board_empty();

        let result = if opening {
            MoveResult::opening(Pos::CENTER)
        } else {
            self.engine.get_move_with_stats(&self.board)
        };

        let Some(pos) = result.best_move else {
            info!("no empty cell left, game drawn");
            self.state = GameState::Draw;
            return Ok(self.state);
        };

        let placed = self.board.place(pos, Side::Machine);
        debug_assert!(placed, "engine selected a non-empty cell");
        debug!(row = pos.row, col = pos.col, score = result.score, source = ?result.source, "machine move");

        if opening {
            // The opening pairs with no human move, so it stays out of the history
            self.opening = Some(pos);
        } else {
            self.history.record_machine(pos);
        }
        self.last_machine_result = Some(result);
        Ok(self.finish_move(Side::Machine, pos))
    }

    /// Take back the last human move and the machine reply to it.
    ///
    /// Returns the two cleared cells, or `None` when there is no complete
    /// round to undo. The state stays `HumanTurn` either way.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<Option<(Pos, Pos)>, TurnError> {
        self.expect_turn(GameState::HumanTurn, TurnError::NotHumanTurn)?;

        let Some((human, machine)) = self.history.undo_last_round() else {
            debug!("nothing to undo");
            return Ok(None);
        };

        self.board.clear(human);
        self.board.clear(machine);
        self.last_move = self
            .history
            .last_machine()
            .or(self.opening)
            .map(|pos| (Side::Machine, pos));

        debug!(%human, %machine, rounds = self.history.rounds(), "round undone");
        Ok(Some((human, machine)))
    }

    /// Run the machine if it is due. Frontends call this after every
    /// human command.
    ///
    /// A due machine turn cannot be refused: the state is `MachineTurn`,
    /// so the game is live and at least one cell is empty.
    pub fn advance(&mut self) -> GameState {
        if self.state == GameState::MachineTurn {
            let played = self.play_machine();
            debug_assert!(played.is_ok(), "due machine turn refused: {played:?}");
        }
        self.state
    }

    fn expect_turn(&self, wanted: GameState, wrong_turn: TurnError) -> Result<(), TurnError> {
        if self.state.is_over() {
            return Err(TurnError::GameOver);
        }
        if self.state != wanted {
            return Err(wrong_turn);
        }
        Ok(())
    }

    /// Win/draw check after a stone lands, then hand the turn over
    fn finish_move(&mut self, side: Side, pos: Pos) -> GameState {
        self.last_move = Some((side, pos));

        self.state = if has_five_at_pos(&self.board, pos) {
            self.winning_line = find_five_line_at_pos(&self.board, pos);
            info!(winner = ?side, "five in a row");
            GameState::Won(side)
        } else if self.board.is_full() {
            info!("board full, game drawn");
            GameState::Draw
        } else {
            GameState::turn_of(side.opponent())
        };
        self.state
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;
    use crate::engine::MoveSource;

    #[test]
    fn test_human_opens_by_default() {
        let game = GameController::default();
        assert_eq!(game.state(), GameState::HumanTurn);
        assert!(game.board().is_board_empty());
    }

    #[test]
    fn test_machine_opens_at_center() {
        let mut game = GameController::new(GameConfig::machine_first());
        assert_eq!(game.state(), GameState::MachineTurn);

        assert_eq!(game.play_machine(), Ok(GameState::HumanTurn));
        assert_eq!(game.board().get(Pos::CENTER), Some(Stone::Machine));
        assert_eq!(game.board().stone_count(), 1);
        assert_eq!(game.last_move(), Some((Side::Machine, Pos::CENTER)));

        let result = game.last_machine_result().unwrap();
        assert_eq!(result.source, MoveSource::Opening);
        assert_eq!(result.best_move, Some(Pos::CENTER));
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_round_alternates_turns() {
        let mut game = GameController::default();
        assert_eq!(game.play_human(Pos::new(7, 7)), Ok(GameState::MachineTurn));
        assert_eq!(game.play_machine(), Ok(GameState::HumanTurn));

        assert_eq!(game.board().stone_count(), 2);
        assert_eq!(game.history().rounds(), 1);
        let (side, pos) = game.last_move().unwrap();
        assert_eq!(side, Side::Machine);
        assert_eq!(game.board().get(pos), Some(Stone::Machine));
        assert_eq!(game.last_machine_result().unwrap().source, MoveSource::Heuristic);
    }

    #[test]
    fn test_rejected_moves_keep_human_turn() {
        let mut game = GameController::default();
        game.play_human(Pos::new(7, 7)).unwrap();
        game.play_machine().unwrap();
        let board = game.board().clone();

        assert_eq!(
            game.play_human(Pos::new(7, 7)),
            Err(TurnError::Occupied { pos: Pos::new(7, 7) })
        );
        assert_eq!(
            game.play_human(Pos::new(15, 2)),
            Err(TurnError::OutOfBounds { pos: Pos::new(15, 2) })
        );
        assert_eq!(
            game.play_human(Pos::new(-1, 2)),
            Err(TurnError::OutOfBounds { pos: Pos::new(-1, 2) })
        );
        assert_eq!(game.state(), GameState::HumanTurn);
        assert_eq!(game.board(), &board);
        assert_eq!(game.history().rounds(), 1);
    }

    #[test]
    fn test_turn_order_enforced() {
        let mut game = GameController::default();
        assert_eq!(game.play_machine(), Err(TurnError::NotMachineTurn));

        game.play_human(Pos::new(0, 0)).unwrap();
        assert_eq!(game.play_human(Pos::new(0, 1)), Err(TurnError::NotHumanTurn));
        assert_eq!(game.undo(), Err(TurnError::NotHumanTurn));
    }

    #[test]
    fn test_undo_with_empty_history_is_noop() {
        let mut game = GameController::default();
        assert_eq!(game.undo(), Ok(None));
        assert_eq!(game.handle(Command::Undo), Ok(GameState::HumanTurn));
        assert!(game.board().is_board_empty());
    }

    #[test]
    fn test_undo_round_trip_restores_board() {
        let mut game = GameController::default();
        game.play_human(Pos::new(7, 7)).unwrap();
        game.play_machine().unwrap();
        let before = game.board().clone();

        game.play_human(Pos::new(8, 8)).unwrap();
        game.play_machine().unwrap();
        let after = game.board().clone();
        let machine_reply = game.history().last_machine().unwrap();

        let (human, machine) = game.undo().unwrap().unwrap();
        assert_eq!(human, Pos::new(8, 8));
        assert_eq!(machine, machine_reply);
        assert_eq!(game.board(), &before);
        assert_eq!(game.state(), GameState::HumanTurn);
        assert_eq!(game.history().rounds(), 1);

        // Replaying the same two cells gives back the same position
        game.play_human(human).unwrap();
        game.play_machine().unwrap();
        assert_eq!(game.board(), &after);
    }

    #[test]
    fn test_undo_keeps_scripted_opening() {
        let mut game = GameController::new(GameConfig::machine_first());
        game.play_machine().unwrap();
        game.play_human(Pos::new(0, 0)).unwrap();
        game.play_machine().unwrap();

        assert!(game.undo().unwrap().is_some());
        assert_eq!(game.board().stone_count(), 1);
        assert_eq!(game.board().get(Pos::CENTER), Some(Stone::Machine));
        assert_eq!(game.last_move(), Some((Side::Machine, Pos::CENTER)));

        // Only the opening is left, and it cannot be undone
        assert_eq!(game.undo(), Ok(None));
        assert_eq!(game.board().stone_count(), 1);
    }

    fn controller_with(human: &[(i32, i32)], machine: &[(i32, i32)], state: GameState) -> GameController {
        let mut game = GameController::default();
        for &(r, c) in human {
            assert!(game.board.place(Pos::new(r, c), Side::Human));
        }
        for &(r, c) in machine {
            assert!(game.board.place(Pos::new(r, c), Side::Machine));
        }
        game.state = state;
        game
    }

    #[test]
    fn test_human_wins() {
        let mut game = controller_with(
            &[(3, 3), (3, 4), (3, 5), (3, 6)],
            &[(3, 2), (9, 9), (10, 10), (11, 11)],
            GameState::HumanTurn,
        );

        assert_eq!(game.play_human(Pos::new(3, 7)), Ok(GameState::Won(Side::Human)));
        assert_eq!(game.state().result_text(), Some("Human wins"));
        assert_eq!(
            game.winning_line().unwrap(),
            &[Pos::new(3, 3), Pos::new(3, 4), Pos::new(3, 5), Pos::new(3, 6), Pos::new(3, 7)]
        );
        assert_eq!(game.last_move(), Some((Side::Human, Pos::new(3, 7))));
    }

    #[test]
    fn test_machine_wins_and_game_is_terminal() {
        let mut game = controller_with(
            &[(10, 1), (0, 0), (14, 14), (0, 14)],
            &[(10, 2), (10, 3), (10, 4), (10, 5)],
            GameState::MachineTurn,
        );
        game.history.record_human(Pos::new(0, 14));

        assert_eq!(game.play_machine(), Ok(GameState::Won(Side::Machine)));
        assert_eq!(game.last_move(), Some((Side::Machine, Pos::new(10, 6))));
        assert_eq!(game.state().result_text(), Some("Machine wins"));

        let line = game.winning_line().unwrap();
        assert_eq!(line.len(), 5);
        assert!(line.iter().all(|&p| game.board().get(p) == Some(Stone::Machine)));

        assert_eq!(game.play_human(Pos::new(1, 1)), Err(TurnError::GameOver));
        assert_eq!(game.play_machine(), Err(TurnError::GameOver));
        assert_eq!(game.undo(), Err(TurnError::GameOver));
        assert_eq!(game.advance(), GameState::Won(Side::Machine));
    }

    #[test]
    fn test_machine_blocks_human_four() {
        let mut game = controller_with(&[(5, 5), (5, 6), (5, 7), (5, 8)], &[], GameState::MachineTurn);
        game.history.record_human(Pos::new(5, 8));

        assert_eq!(game.play_machine(), Ok(GameState::HumanTurn));
        assert_eq!(game.last_move(), Some((Side::Machine, Pos::new(5, 4))));
        assert!(game.last_machine_result().unwrap().score >= 100_000);
    }

    #[test]
    fn test_last_cell_without_five_is_draw() {
        // Rows alternate in pairs (HH MM HH ...), shifted by two every row,
        // which leaves no run longer than two anywhere
        let mut game = GameController::default();
        let last = Pos::new(14, 14);
        for idx in 0..225 {
            let pos = Pos::from_index(idx);
            if pos == last {
                continue;
            }
            let side = if ((pos.col + 2 * pos.row) / 2) % 2 == 0 { Side::Human } else { Side::Machine };
            assert!(game.board.place(pos, side));
        }
        assert_eq!(game.play_human(last), Ok(GameState::Draw));
        assert_eq!(game.state().result_text(), Some("Draw"));
        assert!(game.winning_line().is_none());
    }

    #[test]
    fn test_advance_only_moves_machine() {
        let mut game = GameController::default();
        assert_eq!(game.advance(), GameState::HumanTurn);
        assert!(game.board().is_board_empty());

        game.handle(Command::Place(Pos::new(7, 7))).unwrap();
        assert_eq!(game.advance(), GameState::HumanTurn);
        assert_eq!(game.board().stone_count(), 2);
        assert_eq!(game.last_move(), Some((Side::Machine, Pos::new(6, 6))));
    }

    #[test]
    fn test_advance_runs_machine_opening() {
        let mut game = GameController::new(GameConfig::machine_first());
        assert_eq!(game.advance(), GameState::HumanTurn);
        assert_eq!(game.board().get(Pos::CENTER), Some(Stone::Machine));
        assert_eq!(game.last_move(), Some((Side::Machine, Pos::CENTER)));

        // Nothing due on the human's turn
        assert_eq!(game.advance(), GameState::HumanTurn);
        assert_eq!(game.board().stone_count(), 1);
    }

    #[test]
    fn test_turn_passes_to_opponent() {
        assert_eq!(GameState::turn_of(Side::Human), GameState::HumanTurn);
        assert_eq!(GameState::turn_of(Side::Machine), GameState::MachineTurn);

        let mut game = GameController::default();
        assert_eq!(game.play_human(Pos::new(3, 3)), Ok(GameState::turn_of(Side::Machine)));
        assert_eq!(game.play_machine(), Ok(GameState::turn_of(Side::Human)));
    }

    #[test]
    fn test_reset_keeps_config() {
        let mut game = GameController::new(GameConfig::machine_first());
        game.play_machine().unwrap();
        game.reset();
        assert_eq!(game.state(), GameState::MachineTurn);
        assert!(game.board().is_board_empty());
        assert_eq!(game.last_move(), None);
    }
}
