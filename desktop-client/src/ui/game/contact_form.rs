use crate::CommandSender;
use crate::state::{ClientCommand, ContactFormCommand, GameCommand};
use common::contact_form::{ContactFormSnapshot, ContactFormStatus};
use eframe::egui;

pub struct ContactFormUi {
    name: String,
    email: String,
    message: String,
    seen_reset_token: u64,
}

impl ContactFormUi {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            seen_reset_token: 0,
        }
    }

    pub fn render_game(
        &mut self,
        ui: &mut egui::Ui,
        snapshot: &ContactFormSnapshot,
        command_sender: &CommandSender,
    ) {
        if snapshot.reset_token != self.seen_reset_token {
            self.seen_reset_token = snapshot.reset_token;
            self.name.clear();
            self.email.clear();
            self.message.clear();
        }

        let sending = snapshot.status == ContactFormStatus::Sending;

        ui.heading("Contact us");
        ui.add_space(10.0);

        ui.add_enabled_ui(!sending, |ui| {
            ui.label("Name");
            ui.text_edit_singleline(&mut self.name);
            field_error(ui, snapshot.errors.name.as_deref());

            ui.label("Email");
            ui.text_edit_singleline(&mut self.email);
            field_error(ui, snapshot.errors.email.as_deref());

            ui.label("Message");
            ui.text_edit_multiline(&mut self.message);
            field_error(ui, snapshot.errors.message.as_deref());

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("Send").clicked() {
                    command_sender.send(ClientCommand::Game(GameCommand::ContactForm(
                        ContactFormCommand::Submit {
                            name: self.name.clone(),
                            email: self.email.clone(),
                            message: self.message.clone(),
                        },
                    )));
                }
                if ui.button("Clear").clicked() {
                    command_sender.send(ClientCommand::Game(GameCommand::ContactForm(
                        ContactFormCommand::Reset,
                    )));
                }
            });
        });

        ui.add_space(10.0);
        let status = snapshot.status.text();
        match snapshot.status {
            ContactFormStatus::Invalid => {
                ui.label(egui::RichText::new(status).color(egui::Color32::RED));
            }
            ContactFormStatus::Sent => {
                ui.label(egui::RichText::new(status).color(egui::Color32::GREEN));
            }
            ContactFormStatus::Sending => {
                ui.label(status);
            }
            ContactFormStatus::Idle => {}
        }
    }
}

fn field_error(ui: &mut egui::Ui, error: Option<&str>) {
    if let Some(error) = error {
        ui.label(egui::RichText::new(error).color(egui::Color32::RED).small());
    }
}
