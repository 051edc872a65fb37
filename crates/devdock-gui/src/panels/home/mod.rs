//! Home panel: welcome heading and author profile

use devdock_core::{AppConfig, PanelLifecycle};
use eframe::egui;

use super::Panel;
use crate::state::SharedState;

/// Profile lines shown on the home page, with empty values removed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Profile {
    pub heading: String,
    pub author: Option<String>,
    pub email: Option<String>,
    pub github: Option<String>,
}

impl Profile {
    pub fn from_config(config: &AppConfig) -> Self {
        let heading = match config.project_name() {
            Some(project) => format!("Welcome to {project}"),
            None => "Welcome".to_string(),
        };

        Self {
            heading,
            author: config.author_name().map(str::to_string),
            email: config.contact_email().map(str::to_string),
            github: config.github_url().map(str::to_string),
        }
    }

    pub fn has_contact(&self) -> bool {
        self.author.is_some() || self.email.is_some() || self.github.is_some()
    }
}

pub struct HomePanel {
    state: SharedState,
}

impl HomePanel {
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }
}

impl PanelLifecycle for HomePanel {}

impl Panel for HomePanel {
    fn show(&mut self, ui: &mut egui::Ui) {
        let profile = Profile::from_config(&self.state.read().config);

        ui.heading(&profile.heading);
        ui.add_space(12.0);

        if !profile.has_contact() {
            ui.label(egui::RichText::new("No author profile configured").weak());
            return;
        }

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("About the Author").strong().size(18.0));
            ui.add_space(6.0);

            if let Some(author) = &profile.author {
                ui.horizontal(|ui| {
                    ui.label("👤");
                    ui.label(egui::RichText::new(author).strong());
                });
            }
            if let Some(email) = &profile.email {
                ui.horizontal(|ui| {
                    ui.label("✉");
                    ui.hyperlink_to(email, format!("mailto:{email}"));
                });
            }
            if let Some(github) = &profile.github {
                ui.horizontal(|ui| {
                    ui.label("🔗");
                    ui.hyperlink_to("GitHub Profile", github);
                });
            }
        });
    }
}
