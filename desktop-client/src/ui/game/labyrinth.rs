use crate::CommandSender;
use crate::state::{ClientCommand, GameCommand, LabyrinthCommand};
use common::games::labyrinth::{Cell, Direction, GameStatus, LabyrinthSnapshot, Position};
use eframe::egui;

const MAX_CELL_SIZE: f32 = 56.0;

pub struct LabyrinthGameUi;

impl LabyrinthGameUi {
    pub fn new() -> Self {
        Self
    }

    pub fn render_game(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        snapshot: &LabyrinthSnapshot,
        command_sender: &CommandSender,
    ) {
        let game_state = &snapshot.game_state;
        if game_state.status == GameStatus::Active {
            self.handle_input(ctx, command_sender);
        }

        ui.vertical_centered(|ui| {
            ui.heading(game_state.status_text());
            ui.label(format!(
                "Time: {} s    Moves: {}",
                snapshot.elapsed_text(),
                game_state.moves_made
            ));
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                let start = ui.add_enabled(
                    game_state.status != GameStatus::Active,
                    egui::Button::new("Start"),
                );
                if start.clicked() {
                    send(command_sender, LabyrinthCommand::Start);
                }
                let restart = ui.add_enabled(
                    game_state.status != GameStatus::NotStarted,
                    egui::Button::new("Restart"),
                );
                if restart.clicked() {
                    send(command_sender, LabyrinthCommand::Restart);
                }
            });
            ui.add_space(10.0);

            self.render_grid(ui, snapshot);

            ui.add_space(10.0);
            ui.label("Use the arrow keys to move");
        });
    }

    fn handle_input(&self, ctx: &egui::Context, command_sender: &CommandSender) {
        let directions: Vec<Direction> = ctx.input(|i| {
            [
                (egui::Key::ArrowUp, Direction::Up),
                (egui::Key::ArrowDown, Direction::Down),
                (egui::Key::ArrowLeft, Direction::Left),
                (egui::Key::ArrowRight, Direction::Right),
            ]
            .into_iter()
            .filter(|(key, _)| i.key_pressed(*key))
            .map(|(_, direction)| direction)
            .collect()
        });

        for direction in directions {
            send(command_sender, LabyrinthCommand::Move { direction });
        }
    }

    fn render_grid(&self, ui: &mut egui::Ui, snapshot: &LabyrinthSnapshot) {
        let layout = snapshot.game_state.layout();
        let rows = layout.rows();
        let cols = layout.cols();
        if rows == 0 || cols == 0 {
            return;
        }

        let available = ui.available_size();
        let cell_size = (available.x / cols as f32)
            .min((available.y - 40.0) / rows as f32)
            .clamp(12.0, MAX_CELL_SIZE);
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(cell_size * cols as f32, cell_size * rows as f32),
            egui::Sense::hover(),
        );
        let painter = ui.painter_at(rect);

        for row in 0..rows {
            for col in 0..cols {
                let pos = Position::new(row, col);
                let min = rect.min + egui::vec2(col as f32 * cell_size, row as f32 * cell_size);
                let cell_rect = egui::Rect::from_min_size(min, egui::vec2(cell_size, cell_size));

                let color = match layout.cell(pos) {
                    Some(Cell::Wall) | None => egui::Color32::from_rgb(60, 60, 70),
                    Some(Cell::Open) => egui::Color32::from_rgb(230, 230, 220),
                    Some(Cell::Start) => egui::Color32::from_rgb(180, 210, 250),
                    Some(Cell::Exit) => egui::Color32::from_rgb(150, 220, 150),
                };
                painter.rect_filled(cell_rect.shrink(1.0), 2.0, color);

                if pos == snapshot.game_state.player {
                    painter.circle_filled(
                        cell_rect.center(),
                        cell_size * 0.35,
                        egui::Color32::from_rgb(220, 80, 60),
                    );
                }
            }
        }
    }
}

fn send(command_sender: &CommandSender, command: LabyrinthCommand) {
    command_sender.send(ClientCommand::Game(GameCommand::Labyrinth(command)));
}
