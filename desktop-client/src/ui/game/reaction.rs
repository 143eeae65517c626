use crate::CommandSender;
use crate::state::{ClientCommand, GameCommand, ReactionCommand};
use common::games::reaction::ReactionSnapshot;
use eframe::egui;

const AREA_SIZE: egui::Vec2 = egui::vec2(420.0, 260.0);
const TARGET_SIZE: egui::Vec2 = egui::vec2(90.0, 44.0);

/// Keeps the target's on-screen offset for as long as it stays visible.
pub struct ReactionGameUi {
    target_offset: Option<egui::Vec2>,
}

impl ReactionGameUi {
    pub fn new() -> Self {
        Self {
            target_offset: None,
        }
    }

    pub fn render_game(
        &mut self,
        ui: &mut egui::Ui,
        snapshot: &ReactionSnapshot,
        command_sender: &CommandSender,
    ) {
        let active = snapshot.is_active();

        ui.vertical_centered(|ui| {
            ui.heading(snapshot.status_text());
            ui.label(format!(
                "Hits: {}    Average: {}    Time left: {} s",
                snapshot.hits,
                snapshot.format_average(),
                snapshot.time_left
            ));
            ui.add_space(10.0);

            let (area, _) = ui.allocate_exact_size(AREA_SIZE, egui::Sense::hover());
            ui.painter()
                .rect_filled(area, 6.0, egui::Color32::from_rgb(235, 235, 240));

            if snapshot.target_visible() {
                let offset = *self.target_offset.get_or_insert_with(random_offset);
                let target_rect = egui::Rect::from_min_size(area.min + offset, TARGET_SIZE);
                let target = egui::Button::new(egui::RichText::new("Hit!").size(20.0))
                    .fill(egui::Color32::from_rgb(230, 90, 70));
                if ui.put(target_rect, target).clicked() {
                    self.target_offset = None;
                    send(command_sender, ReactionCommand::Hit);
                }
            } else {
                self.target_offset = None;
            }

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.add_enabled(!active, egui::Button::new("Start")).clicked() {
                    send(command_sender, ReactionCommand::Start);
                }
                if ui.button("Reset").clicked() {
                    send(command_sender, ReactionCommand::Reset);
                }
            });
        });
    }
}

fn random_offset() -> egui::Vec2 {
    let max = AREA_SIZE - TARGET_SIZE;
    egui::vec2(
        rand::random_range(0.0..=max.x),
        rand::random_range(0.0..=max.y),
    )
}

fn send(command_sender: &CommandSender, command: ReactionCommand) {
    command_sender.send(ClientCommand::Game(GameCommand::Reaction(command)));
}
