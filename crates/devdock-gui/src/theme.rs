//! UI theme configuration

use devdock_core::ThemeMode;
use eframe::egui;

/// UI Theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Check if dark theme
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Toggle between dark and light
    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
    }

    pub fn visuals(&self) -> egui::Visuals {
        if self.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        }
    }

    /// Install the visuals into the egui context
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_visuals(self.visuals());
    }

    /// Label for the toggle button, naming the theme it switches to
    pub fn toggle_label(&self) -> &'static str {
        if self.is_dark() {
            "☀ Light"
        } else {
            "🌙 Dark"
        }
    }
}

impl From<ThemeMode> for Theme {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::Light => Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut theme = Theme::from(ThemeMode::Dark);
        theme.toggle();
        assert_eq!(theme, Theme::Light);
        assert!(!theme.visuals().dark_mode);
    }

    #[test]
    fn test_default_matches_config_default() {
        assert_eq!(Theme::default(), Theme::from(ThemeMode::default()));
        assert!(Theme::default().is_dark());
    }
}
