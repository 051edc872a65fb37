//! Main application state and UI logic

use std::sync::mpsc::{self, Receiver, RecvError, TryRecvError};

use devdock_core::{AppConfig, LoadReport, Shell};
use devdock_tools::Capabilities;
use eframe::egui;
use tracing::{error, info};

use crate::panels::{self, BoxedPanel, StatusPanel};
use crate::state::{AppState, Severity, SharedState};
use crate::theme::Theme;

const NUMBER_KEYS: [egui::Key; 9] = [
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
    egui::Key::Num4,
    egui::Key::Num5,
    egui::Key::Num6,
    egui::Key::Num7,
    egui::Key::Num8,
    egui::Key::Num9,
];

/// DevDock GUI application
pub struct DevDockApp {
    /// Application state
    state: SharedState,

    /// UI theme
    theme: Theme,

    /// Menu entries and selection
    shell: Shell<BoxedPanel>,

    /// Result of the background menu load, until it arrives
    pending: Option<Receiver<LoadReport<BoxedPanel>>>,

    /// Status bar panel
    status: StatusPanel,
}

impl DevDockApp {
    /// Create new application and start loading the menu
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let theme = Theme::from(config.theme);
        theme.apply(&cc.egui_ctx);

        let state = AppState::shared(config);
        let pending = spawn_loader(cc.egui_ctx.clone(), state.clone(), Capabilities::default());

        Self {
            status: StatusPanel::new(state.clone()),
            state,
            theme,
            shell: Shell::new(),
            pending: Some(pending),
        }
    }

    /// Install the menu once the loader reports back
    fn poll_loader(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };

        let outcome = match rx.try_recv() {
            Ok(report) => Ok(report),
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err(RecvError),
        };
        self.pending = None;
        install_menu(&mut self.shell, &self.state, outcome);
    }

    /// Handle keyboard shortcuts
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Q)) {
            // Quit application
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        let pressed = ctx.input(|i| {
            if !i.modifiers.command {
                return None;
            }
            NUMBER_KEYS.iter().position(|key| i.key_pressed(*key))
        });
        if let Some(index) = pressed {
            self.shell.select_index(index);
        }
    }

    fn show_navigation(&mut self, ui: &mut egui::Ui) {
        ui.heading("DevDock");
        ui.separator();

        if self.shell.is_loading() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading panels...");
            });
            return;
        }

        let mut clicked = None;
        let selected = self.shell.selected_key().map(str::to_string);
        for (index, entry) in self.shell.entries().iter().enumerate() {
            let text = match &entry.icon {
                Some(icon) => format!("{icon}  {}", entry.label),
                None => entry.label.clone(),
            };
            let is_selected = selected.as_deref() == Some(entry.key.as_str());
            let response = ui.selectable_label(is_selected, text);
            let response = if index < NUMBER_KEYS.len() {
                response.on_hover_text(format!("Ctrl+{}", index + 1))
            } else {
                response
            };
            if response.clicked() {
                clicked = Some(entry.key.clone());
            }
        }

        if let Some(key) = clicked {
            self.shell.select(&key);
        }
    }
}

impl eframe::App for DevDockApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loader();

        // Handle shortcuts
        self.handle_shortcuts(ctx);

        // Top bar
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(project) = self.state.read().config.project_name() {
                    ui.strong(project);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(self.theme.toggle_label()).clicked() {
                        self.theme.toggle();
                        self.theme.apply(ctx);
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.status.show(ui);
        });

        // Navigation (left panel)
        egui::SidePanel::left("navigation")
            .default_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                self.show_navigation(ui);
            });

        // Active panel (center)
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.shell.is_loading() {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
                return;
            }

            match self.shell.active_mut() {
                Some(entry) => entry.render.show(ui),
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.label("No panels available");
                    });
                }
            }
        });
    }
}

/// Hand the loader's outcome to the shell and report it in the status bar
///
/// A loader that disconnected without a result leaves an empty menu and
/// an error status.
pub(crate) fn install_menu(
    shell: &mut Shell<BoxedPanel>,
    state: &SharedState,
    outcome: Result<LoadReport<BoxedPanel>, RecvError>,
) {
    let Ok(LoadReport { entries, failures }) = outcome else {
        error!("Menu loader exited without a result");
        shell.finish_loading(Vec::new());
        state.write().error("Failed to load panels");
        return;
    };

    let loaded = entries.len();
    shell.finish_loading(entries);

    let mut state = state.write();
    state.record_failures(&failures);
    if !failures.is_empty() {
        state.notify(
            Severity::Warning,
            format!("{loaded} panel(s) loaded, {} failed", failures.len()),
        );
    } else if loaded > 0 {
        state.set_status(format!("{loaded} panel(s) loaded"));
    } else {
        state.set_status("No panels available");
    }
}

/// Load the menu on a worker thread
///
/// The receiver disconnects without a value if the worker cannot start or
/// panics; a result sent after the app has closed is dropped.
fn spawn_loader(ctx: egui::Context, state: SharedState, caps: Capabilities) -> Receiver<LoadReport<BoxedPanel>> {
    let (tx, rx) = mpsc::channel();

    let spawned = std::thread::Builder::new()
        .name("menu-loader".to_string())
        .spawn(move || {
            let report = panels::discover(&state, &caps);
            if tx.send(report).is_err() {
                info!("Shell closed before the menu finished loading");
            }
            ctx.request_repaint();
        });

    if let Err(e) = spawned {
        error!(error = %e, "Failed to spawn menu loader");
    }

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::HomePanel;
    use devdock_core::{Error, MenuEntry, PanelFailure};

    fn entry(key: &str, state: &SharedState) -> MenuEntry<BoxedPanel> {
        MenuEntry {
            key: key.to_string(),
            label: key.to_string(),
            icon: None,
            order: None,
            render: Box::new(HomePanel::new(state.clone())),
        }
    }

    #[test]
    fn test_disconnected_loader_leaves_empty_menu_with_error() {
        let state = AppState::shared(AppConfig::default());
        let mut shell = Shell::new();

        install_menu(&mut shell, &state, Err(RecvError));

        assert!(!shell.is_loading());
        assert!(shell.entries().is_empty());
        assert!(shell.selected_key().is_none());
        let state = state.read();
        assert_eq!(state.status.severity, Severity::Error);
        assert_eq!(state.status.text, "Failed to load panels");
    }

    #[test]
    fn test_failures_are_reported() {
        let state = AppState::shared(AppConfig::default());
        let mut shell = Shell::new();
        let report = LoadReport {
            entries: vec![entry("home", &state)],
            failures: vec![PanelFailure {
                identifier: "Broken".into(),
                error: Error::panel_load("Broken", "boom"),
            }],
        };

        install_menu(&mut shell, &state, Ok(report));

        assert_eq!(shell.selected_key(), Some("home"));
        let state = state.read();
        assert_eq!(state.status.severity, Severity::Warning);
        assert_eq!(state.status.text, "1 panel(s) loaded, 1 failed");
        assert_eq!(state.load_failures.len(), 1);
        assert_eq!(state.load_failures[0].0, "Broken");
    }

    #[test]
    fn test_empty_menu_is_not_an_error() {
        let state = AppState::shared(AppConfig::default());
        let mut shell = Shell::new();

        install_menu(&mut shell, &state, Ok(LoadReport::empty()));

        assert!(!shell.is_loading());
        assert!(shell.selected_key().is_none());
        let state = state.read();
        assert_eq!(state.status.severity, Severity::Info);
        assert_eq!(state.status.text, "No panels available");
        assert!(state.load_failures.is_empty());
    }

    #[test]
    fn test_loaded_menu_selects_first_entry() {
        let state = AppState::shared(AppConfig::default());
        let mut shell = Shell::new();
        let report = LoadReport {
            entries: vec![entry("home", &state), entry("devtools", &state)],
            failures: Vec::new(),
        };

        install_menu(&mut shell, &state, Ok(report));

        assert_eq!(shell.selected_key(), Some("home"));
        assert_eq!(state.read().status.text, "2 panel(s) loaded");
    }
}
