use crate::CommandSender;
use crate::state::{AdventureCommand, ClientCommand, GameCommand};
use common::games::adventure::AdventureSnapshot;
use eframe::egui;

pub struct AdventureGameUi;

impl AdventureGameUi {
    pub fn new() -> Self {
        Self
    }

    pub fn render_game(
        &mut self,
        ui: &mut egui::Ui,
        snapshot: &AdventureSnapshot,
        command_sender: &CommandSender,
    ) {
        ui.vertical_centered(|ui| {
            match &snapshot.current {
                Some(text) => ui.heading(text),
                None => ui.heading("Press Generate to roll an adventure."),
            };
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if ui.button("Generate").clicked() {
                    send(command_sender, AdventureCommand::Generate);
                }
                let save = ui.add_enabled(snapshot.current.is_some(), egui::Button::new("Save"));
                if save.clicked() {
                    send(command_sender, AdventureCommand::Save);
                }
                if ui.button("Clear saved").clicked() {
                    send(command_sender, AdventureCommand::Clear);
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.label(egui::RichText::new("Saved adventures").strong());
        egui::ScrollArea::vertical().show(ui, |ui| {
            if snapshot.saved.is_empty() {
                ui.label("Nothing saved yet.");
            }
            for item in &snapshot.saved {
                ui.label(format!("• {}", item));
            }
        });
    }
}

fn send(command_sender: &CommandSender, command: AdventureCommand) {
    command_sender.send(ClientCommand::Game(GameCommand::Adventure(command)));
}
