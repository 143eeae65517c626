use crate::CommandSender;
use crate::state::{ClientCommand, GameCommand, TicTacToeCommand};
use common::games::tictactoe::{BOARD_SIDE, Mark, TicTacToeSnapshot};
use eframe::egui;

const CELL_SIZE: f32 = 90.0;

pub struct TicTacToeGameUi;

impl TicTacToeGameUi {
    pub fn new() -> Self {
        Self
    }

    /// Returns the new computer-opponent setting when the player toggles it.
    pub fn render_game(
        &mut self,
        ui: &mut egui::Ui,
        snapshot: &TicTacToeSnapshot,
        command_sender: &CommandSender,
    ) -> Option<bool> {
        let game_state = &snapshot.game_state;
        let mut vs_cpu_changed = None;

        ui.vertical_centered(|ui| {
            ui.heading(game_state.status_text());
            if snapshot.cpu_thinking {
                ui.label("Computer is thinking...");
            }
            ui.add_space(10.0);

            let winning_line = game_state.winning_line();
            let board_width = (CELL_SIZE + 4.0) * BOARD_SIDE as f32;
            ui.allocate_ui(egui::vec2(board_width, board_width), |ui| {
                egui::Grid::new("tictactoe_board")
                    .spacing([4.0, 4.0])
                    .show(ui, |ui| {
                        for row in 0..BOARD_SIDE {
                            for col in 0..BOARD_SIDE {
                                let index = row * BOARD_SIDE + col;
                                let mark = game_state.board[index];
                                let highlighted = winning_line
                                    .as_ref()
                                    .is_some_and(|line| line.contains(index));

                                let mut text = egui::RichText::new(mark.symbol()).size(40.0);
                                if highlighted {
                                    text = text.color(egui::Color32::GREEN);
                                }

                                let enabled = mark == Mark::Empty
                                    && !game_state.is_over()
                                    && !snapshot.cpu_thinking;
                                let button = egui::Button::new(text)
                                    .min_size(egui::vec2(CELL_SIZE, CELL_SIZE));
                                if ui.add_enabled(enabled, button).clicked() {
                                    command_sender.send(ClientCommand::Game(GameCommand::TicTacToe(
                                        TicTacToeCommand::PlaceMark { index },
                                    )));
                                }
                            }
                            ui.end_row();
                        }
                    });
            });

            ui.add_space(10.0);
            ui.label(format!(
                "X wins: {}    O wins: {}",
                game_state.score.x_wins, game_state.score.o_wins
            ));

            let mut vs_cpu = snapshot.vs_cpu;
            if ui.checkbox(&mut vs_cpu, "Computer plays O").changed() {
                command_sender.send(ClientCommand::Game(GameCommand::TicTacToe(
                    TicTacToeCommand::SetVsCpu { enabled: vs_cpu },
                )));
                vs_cpu_changed = Some(vs_cpu);
            }

            if ui.button("Restart").clicked() {
                command_sender.send(ClientCommand::Game(GameCommand::TicTacToe(
                    TicTacToeCommand::Restart,
                )));
            }
        });

        vs_cpu_changed
    }
}
