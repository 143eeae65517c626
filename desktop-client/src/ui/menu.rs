use super::game::{GameUi, GameUiEvent};
use crate::CommandSender;
use crate::config::{Config, ConfigManager, FileContentConfigProvider, YamlConfigSerializer};
use crate::state::{AppState, ClientCommand, MenuCommand, ResultEntry, SharedState};
use common::games::GameType;
use common::log_warn;
use eframe::egui;

type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub struct MenuApp {
    shared_state: SharedState,
    command_sender: CommandSender,
    config_manager: ClientConfigManager,
    game_ui: Option<GameUi>,
}

impl MenuApp {
    pub fn new(
        shared_state: SharedState,
        command_sender: CommandSender,
        config_manager: ClientConfigManager,
        initial_game: Option<GameType>,
    ) -> Self {
        let mut app = Self {
            shared_state,
            command_sender,
            config_manager,
            game_ui: None,
        };
        if let Some(game) = initial_game {
            app.open_game(game);
        }
        app
    }

    fn open_game(&mut self, game: GameType) {
        self.command_sender
            .send(ClientCommand::Menu(MenuCommand::OpenGame(game)));
        self.update_config(|config| config.last_game = Some(game));
    }

    fn update_config(&self, update: impl FnOnce(&mut Config)) {
        if let Err(e) = self.config_manager.update_config(update) {
            log_warn!("Failed to save config: {}", e);
            self.shared_state.set_error(format!("Failed to save config: {}", e));
        }
    }

    fn render_menu(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading("Mini Games");
            ui.add_space(20.0);

            for game in GameType::ALL {
                let button = egui::Button::new(egui::RichText::new(game.title()).size(18.0))
                    .min_size(egui::vec2(260.0, 40.0));
                if ui.add(button).clicked() {
                    self.open_game(game);
                }
                ui.add_space(6.0);
            }
        });
    }

    fn render_in_game(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, game: GameType) {
        ui.horizontal(|ui| {
            if ui.button("< Back").clicked() {
                self.command_sender
                    .send(ClientCommand::Menu(MenuCommand::BackToMenu));
            }
            ui.heading(game.title());
        });
        ui.separator();

        if self.game_ui.as_ref().is_none_or(|game_ui| game_ui.game_type() != game) {
            self.game_ui = Some(GameUi::new(game));
        }

        let game_state = self.shared_state.get_game_state(game);
        let event = self
            .game_ui
            .as_mut()
            .and_then(|game_ui| game_ui.render_game(ui, ctx, &game_state, &self.command_sender));

        if let Some(GameUiEvent::VsCpuChanged(enabled)) = event {
            self.update_config(|config| config.tictactoe.vs_cpu = enabled);
        }
    }

    fn render_results(&self, ui: &mut egui::Ui) {
        ui.heading("Results");
        ui.separator();

        let results = self.shared_state.get_results();
        if results.is_empty() {
            ui.label("No finished games yet.");
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            for entry in &results {
                render_result_entry(ui, entry);
            }
        });
    }

    fn render_error(&self, ctx: &egui::Context) {
        let Some(error) = self.shared_state.get_error() else {
            return;
        };

        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(&error);
                ui.add_space(10.0);
                if ui.button("OK").clicked() {
                    self.shared_state.clear_error();
                }
            });
    }
}

fn render_result_entry(ui: &mut egui::Ui, entry: &ResultEntry) {
    ui.label(
        egui::RichText::new(format!(
            "{} {}",
            entry.finished_at.format("%H:%M:%S"),
            entry.game.title()
        ))
        .small()
        .weak(),
    );
    ui.label(&entry.summary);
    ui.add_space(4.0);
}

impl eframe::App for MenuApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        self.render_error(ctx);

        egui::SidePanel::right("results_panel")
            .resizable(false)
            .default_width(200.0)
            .show(ctx, |ui| {
                self.render_results(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| match self.shared_state.get_state() {
            AppState::Menu => self.render_menu(ui),
            AppState::InGame { game } => self.render_in_game(ui, ctx, game),
        });
    }
}
