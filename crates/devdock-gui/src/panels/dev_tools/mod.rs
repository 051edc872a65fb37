//! Development tools panel
//!
//! A tab strip over small conversion utilities. Each tab keeps its own
//! input and output; failures are shown inline in the tab and mirrored to
//! the status bar.

mod base64_tab;
mod hash_tab;
mod image_tab;
mod svg_tab;
mod url_tab;
mod uuid_tab;

use devdock_core::PanelLifecycle;
use devdock_tools::{Capabilities, ToolResult};
use eframe::egui;

use self::base64_tab::Base64Tab;
use self::hash_tab::HashTab;
use self::image_tab::ImageTab;
use self::svg_tab::SvgTab;
use self::url_tab::UrlTab;
use self::uuid_tab::UuidTab;
use super::Panel;
use crate::state::SharedState;

/// Tool tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DevTab {
    #[default]
    Uuid,
    Base64,
    Hash,
    Url,
    Image,
    Svg,
}

impl DevTab {
    pub const ALL: [DevTab; 6] = [
        DevTab::Uuid,
        DevTab::Base64,
        DevTab::Hash,
        DevTab::Url,
        DevTab::Image,
        DevTab::Svg,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            DevTab::Uuid => "UUID Generator",
            DevTab::Base64 => "Base64 Converter",
            DevTab::Hash => "Hash Generator",
            DevTab::Url => "URL Encoder/Decoder",
            DevTab::Image => "Image ↔ Base64",
            DevTab::Svg => "SVG → PNG",
        }
    }
}

/// Direction of a two-way conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConvertMode {
    #[default]
    Encode,
    Decode,
}

impl ConvertMode {
    pub fn selector(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.selectable_value(self, ConvertMode::Encode, "Encode");
            ui.selectable_value(self, ConvertMode::Decode, "Decode");
        });
    }
}

/// Record the outcome of a tool action
///
/// Errors keep their detail inline and post `summary` to the status bar.
pub(crate) fn report(state: &SharedState, error: &mut Option<String>, result: ToolResult<()>, summary: &str) {
    match result {
        Ok(()) => *error = None,
        Err(e) => {
            *error = Some(format!("{summary}: {e}"));
            state.write().error(summary);
        }
    }
}

pub struct DevToolsPanel {
    state: SharedState,
    caps: Capabilities,
    tab: DevTab,
    uuid: UuidTab,
    base64: Base64Tab,
    hash: HashTab,
    url: UrlTab,
    image: ImageTab,
    svg: SvgTab,
}

impl DevToolsPanel {
    pub fn new(state: SharedState, caps: Capabilities) -> Self {
        Self {
            state,
            caps,
            tab: DevTab::default(),
            uuid: UuidTab::default(),
            base64: Base64Tab::default(),
            hash: HashTab::default(),
            url: UrlTab::default(),
            image: ImageTab::default(),
            svg: SvgTab::default(),
        }
    }
}

impl PanelLifecycle for DevToolsPanel {
    fn on_unmount(&mut self) {
        // Textures are re-uploaded on the next visit
        self.image.release_preview();
        self.svg.release_preview();
    }
}

impl Panel for DevToolsPanel {
    fn show(&mut self, ui: &mut egui::Ui) {
        ui.heading("Developer Tools");
        ui.add_space(4.0);

        ui.horizontal_wrapped(|ui| {
            for tab in DevTab::ALL {
                ui.selectable_value(&mut self.tab, tab, tab.title());
            }
        });
        ui.separator();

        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            match self.tab {
                DevTab::Uuid => self.uuid.show(ui, &self.state),
                DevTab::Base64 => self.base64.show(ui, &self.state, self.caps.base64.as_ref()),
                DevTab::Hash => self.hash.show(ui, &self.state, self.caps.digest.as_ref()),
                DevTab::Url => self.url.show(ui, &self.state, self.caps.percent.as_ref()),
                DevTab::Image => self.image.show(ui, &self.state, self.caps.base64.as_ref()),
                DevTab::Svg => self.svg.show(ui, &self.state),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AppState, Severity};
    use devdock_core::AppConfig;
    use devdock_tools::ToolError;

    #[test]
    fn test_report_error_reaches_status_bar() {
        let state = AppState::shared(AppConfig::default());
        let mut error = None;

        report(&state, &mut error, Err(ToolError::EmptyInput), "Invalid input for conversion");
        assert!(error.as_deref().unwrap().starts_with("Invalid input for conversion"));
        assert_eq!(state.read().status.severity, Severity::Error);

        report(&state, &mut error, Ok(()), "Invalid input for conversion");
        assert!(error.is_none());
    }

    #[test]
    fn test_default_tab() {
        let panel = DevToolsPanel::new(AppState::shared(AppConfig::default()), Capabilities::default());
        assert_eq!(panel.tab, DevTab::Uuid);
        assert_eq!(DevTab::ALL.len(), 6);
    }
}
