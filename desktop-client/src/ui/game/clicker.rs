use crate::CommandSender;
use crate::state::{ClickerCommand, ClientCommand, GameCommand};
use common::games::clicker::{ClickerSnapshot, ClickerStatus};
use eframe::egui;

pub struct ClickerGameUi;

impl ClickerGameUi {
    pub fn new() -> Self {
        Self
    }

    pub fn render_game(
        &mut self,
        ui: &mut egui::Ui,
        snapshot: &ClickerSnapshot,
        command_sender: &CommandSender,
    ) {
        let running = snapshot.status == ClickerStatus::Running;

        ui.vertical_centered(|ui| {
            ui.heading(snapshot.status_text());
            ui.add_space(10.0);
            ui.label(format!(
                "Score: {}    Time left: {} s    Best: {}",
                snapshot.score, snapshot.time_left, snapshot.best
            ));
            ui.add_space(20.0);

            let click = egui::Button::new(egui::RichText::new("Click!").size(32.0))
                .min_size(egui::vec2(200.0, 120.0));
            if ui.add_enabled(running, click).clicked() {
                send(command_sender, ClickerCommand::Click);
            }

            ui.add_space(20.0);
            ui.horizontal(|ui| {
                if ui.add_enabled(!running, egui::Button::new("Start")).clicked() {
                    send(command_sender, ClickerCommand::Start);
                }
                if ui.add_enabled(!running, egui::Button::new("Reset")).clicked() {
                    send(command_sender, ClickerCommand::Reset);
                }
            });
        });
    }
}

fn send(command_sender: &CommandSender, command: ClickerCommand) {
    command_sender.send(ClientCommand::Game(GameCommand::Clicker(command)));
}
