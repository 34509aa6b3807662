//! Main application for the Gobang GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};
use tracing::debug;

use super::board_view::BoardView;
use super::theme::*;
use crate::cli::annotation;
use crate::engine::MoveSource;
use crate::game::{GameConfig, GameController, GameState};
use crate::notation::format_pos;
use crate::Side;

/// Main Gobang application
pub struct GobangApp {
    game: GameController,
    board_view: BoardView,
    show_debug: bool,
    message: Option<String>,
}

impl GobangApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self::with_config(config)
    }

    fn with_config(config: GameConfig) -> Self {
        Self {
            game: GameController::new(config),
            board_view: BoardView::default(),
            show_debug: true,
            message: None,
        }
    }

    fn new_game(&mut self, config: GameConfig) {
        debug!(opener = ?config.opener, "new game from GUI");
        *self = Self {
            show_debug: self.show_debug,
            ..Self::with_config(config)
        };
    }

    fn undo(&mut self) {
        self.message = match self.game.undo() {
            Ok(Some(_)) => None,
            Ok(None) => Some("Nothing to undo".to_string()),
            Err(err) => Some(err.to_string()),
        };
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (You first)").clicked() {
                        self.new_game(GameConfig::human_first());
                        ui.close_menu();
                    }
                    if ui.button("New Game (Machine first)").clicked() {
                        self.new_game(GameConfig::machine_first());
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Engine Panel (D)");
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new("GOBANG").size(22.0).strong().color(TEXT_PRIMARY));
                });
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_engine_card(ui);
                }

                if let Some(text) = self.game.state().result_text() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, text);
                }

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new().fill(CARD_BG).corner_radius(CornerRadius::same(8)).inner_margin(12.0)
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TURN").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let (status, color) = match self.game.state() {
                GameState::HumanTurn => ("Your turn", STATUS_OK),
                GameState::MachineTurn => ("Machine thinking...", STATUS_WARNING),
                GameState::Won(_) | GameState::Draw => ("Game Over", WIN_HIGHLIGHT),
            };
            ui.label(RichText::new(status).size(18.0).strong().color(color));

            if let Some(line) = annotation(self.game.last_move()) {
                ui.add_space(4.0);
                ui.label(RichText::new(line).size(12.0).color(TEXT_SECONDARY));
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let btn_frame = Frame::new().fill(BUTTON_BG).corner_radius(CornerRadius::same(6)).inner_margin(8.0);

            ui.horizontal(|ui| {
                btn_frame.show(ui, |ui| {
                    let undo = egui::Label::new(RichText::new("Undo (U)").size(12.0).color(TEXT_PRIMARY));
                    if ui.add(undo.sense(egui::Sense::click())).clicked() {
                        self.undo();
                    }
                });

                ui.add_space(4.0);

                btn_frame.show(ui, |ui| {
                    let restart = egui::Label::new(RichText::new("New Game (N)").size(12.0).color(TEXT_PRIMARY));
                    if ui.add(restart.sense(egui::Sense::click())).clicked() {
                        self.new_game(self.game.config());
                    }
                });
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Rounds: {}", self.game.history().rounds()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_engine_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ENGINE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = self.game.last_machine_result() else {
                ui.label(RichText::new("No machine move yet").size(10.0).color(TEXT_MUTED));
                return;
            };

            let source = match result.source {
                MoveSource::Opening => "Opening",
                MoveSource::Heuristic => "Heuristic",
            };
            ui.label(RichText::new(source).size(11.0).strong().color(STATUS_OK));
            ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
            ui.label(RichText::new(format!("{}µs", result.time_us)).size(10.0).color(TEXT_SECONDARY));

            if let Some(pos) = result.best_move {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("→ {}", format_pos(pos))).size(12.0).strong().color(WIN_HIGHLIGHT));
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, text: &str) {
        let accent = match self.game.state() {
            GameState::Won(Side::Human) => WIN_HIGHLIGHT,
            GameState::Won(Side::Machine) => LAST_MOVE_MARKER,
            _ => TEXT_PRIMARY,
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(text).size(18.0).strong().color(accent));
                    ui.add_space(12.0);

                    if ui.button("New Game").clicked() {
                        self.new_game(self.game.config());
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let last_move = self.game.last_move().map(|(_, pos)| pos);
            let accepting = self.game.state() == GameState::HumanTurn;

            let clicked = self.board_view.show(ui, self.game.board(), last_move, self.game.winning_line(), accepting);

            if let Some(pos) = clicked {
                self.message = self.game.play_human(pos).err().map(|err| err.to_string());
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (toggle_debug, undo, restart) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
            )
        });

        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if undo {
            self.undo();
        }
        if restart {
            self.new_game(self.game.config());
        }
    }
}

impl eframe::App for GobangApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // The machine's reply is a single bounded pass, run inline
        if self.game.state() == GameState::MachineTurn {
            self.game.advance();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.game.state() == GameState::MachineTurn {
            ctx.request_repaint();
        }
    }
}
