use crate::CommandSender;
use crate::state::{ClientCommand, GameCommand, GuessNumberCommand};
use common::games::guess_number::GuessNumberSnapshot;
use eframe::egui;

pub struct GuessNumberGameUi {
    input: String,
}

impl GuessNumberGameUi {
    pub fn new() -> Self {
        Self {
            input: String::new(),
        }
    }

    pub fn render_game(
        &mut self,
        ui: &mut egui::Ui,
        snapshot: &GuessNumberSnapshot,
        command_sender: &CommandSender,
    ) {
        ui.vertical_centered(|ui| {
            ui.heading(&snapshot.hint);
            ui.label(format!("Attempts: {}", snapshot.attempts));
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                let response = ui.add_enabled(
                    !snapshot.finished,
                    egui::TextEdit::singleline(&mut self.input).desired_width(120.0),
                );
                let submitted_with_enter =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                let check = ui.add_enabled(!snapshot.finished, egui::Button::new("Check"));
                if submitted_with_enter || check.clicked() {
                    command_sender.send(ClientCommand::Game(GameCommand::GuessNumber(
                        GuessNumberCommand::Guess {
                            input: self.input.clone(),
                        },
                    )));
                    self.input.clear();
                    response.request_focus();
                }
            });

            ui.add_space(10.0);
            if ui.button("New number").clicked() {
                self.input.clear();
                command_sender.send(ClientCommand::Game(GameCommand::GuessNumber(
                    GuessNumberCommand::Restart,
                )));
            }
        });
    }
}
