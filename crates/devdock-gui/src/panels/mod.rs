//! UI panels
//!
//! Every menu panel lives in its own module next to a `meta.toml`
//! describing its menu entry. [`registry`] declares them; the declaration
//! order decides placement among panels without an explicit order.

mod dev_tools;
mod file_viewer;
mod home;
mod status;

pub use dev_tools::DevToolsPanel;
pub use file_viewer::FileViewerPanel;
pub use home::HomePanel;
pub use status::StatusPanel;

use devdock_core::{load_menu, LoadReport, PanelLifecycle, PanelRegistrationBuilder, PanelRegistry};
use devdock_tools::Capabilities;
use eframe::egui;
use tracing::error;

use crate::state::SharedState;

/// A menu panel's render unit
pub trait Panel: PanelLifecycle + Send {
    /// Draw the panel into the central area
    fn show(&mut self, ui: &mut egui::Ui);
}

pub type BoxedPanel = Box<dyn Panel>;

impl PanelLifecycle for BoxedPanel {
    fn on_mount(&mut self) {
        (**self).on_mount();
    }

    fn on_unmount(&mut self) {
        (**self).on_unmount();
    }
}

/// Declare all built-in panels
pub fn registry(state: &SharedState, caps: &Capabilities) -> devdock_core::Result<PanelRegistry<BoxedPanel>> {
    let mut registry = PanelRegistry::new();

    let home_state = state.clone();
    registry.register(
        PanelRegistrationBuilder::new()
            .id("Home")
            .metadata_toml(include_str!("home/meta.toml"))
            .factory(move || Ok(Box::new(HomePanel::new(home_state.clone())) as BoxedPanel))
            .build()?,
    )?;

    let tools_state = state.clone();
    let tools_caps = caps.clone();
    registry.register(
        PanelRegistrationBuilder::new()
            .id("DevTools")
            .metadata_toml(include_str!("dev_tools/meta.toml"))
            .factory(move || {
                Ok(Box::new(DevToolsPanel::new(tools_state.clone(), tools_caps.clone())) as BoxedPanel)
            })
            .build()?,
    )?;

    let viewer_state = state.clone();
    let viewer = caps.viewer.clone();
    registry.register(
        PanelRegistrationBuilder::new()
            .id("FileViewer")
            .metadata_toml(include_str!("file_viewer/meta.toml"))
            .factory(move || {
                Ok(Box::new(FileViewerPanel::new(viewer_state.clone(), viewer.clone())) as BoxedPanel)
            })
            .build()?,
    )?;

    Ok(registry)
}

/// Build the registry, apply configured overrides and load the menu
pub fn discover(state: &SharedState, caps: &Capabilities) -> LoadReport<BoxedPanel> {
    let mut registry = match registry(state, caps) {
        Ok(registry) => registry,
        Err(e) => {
            error!(error = %e, "Panel registry is invalid");
            return LoadReport::empty();
        }
    };

    let overrides = state.read().config.panels.clone();
    registry.apply_overrides(&overrides);

    load_menu(&registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use devdock_core::{AppConfig, MetadataOverride, MetadataSource};

    #[test]
    fn test_builtin_metadata_parses() {
        let state = AppState::shared(AppConfig::default());
        let registry = registry(&state, &Capabilities::default()).unwrap();

        for registration in registry.registrations() {
            assert!(
                matches!(registration.metadata, MetadataSource::Present(_)),
                "{} has invalid metadata",
                registration.identifier
            );
        }
    }

    #[test]
    fn test_default_menu() {
        let state = AppState::shared(AppConfig::default());
        let report = discover(&state, &Capabilities::default());

        assert_eq!(report.keys(), vec!["home", "devtools", "fileviewer"]);
        let labels: Vec<&str> = report.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "Development Tools", "File Viewer"]);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_config_can_hide_and_reorder() {
        let mut config = AppConfig::default();
        config.panels.insert(
            "fileviewer".into(),
            MetadataOverride {
                order: Some(-1),
                ..Default::default()
            },
        );
        config.panels.insert(
            "home".into(),
            MetadataOverride {
                hidden: Some(true),
                ..Default::default()
            },
        );

        let state = AppState::shared(config);
        let report = discover(&state, &Capabilities::default());
        assert_eq!(report.keys(), vec!["fileviewer", "devtools"]);
    }
}
