//! Application state management

use std::sync::Arc;

use devdock_core::{AppConfig, PanelFailure};
use parking_lot::RwLock;
use tracing::{error, info, warn};

/// State shared between the shell and its panels
pub type SharedState = Arc<RwLock<AppState>>;

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// Message shown in the status bar
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub severity: Severity,
    pub text: String,
    pub timestamp: String,
}

impl StatusMessage {
    fn new(severity: Severity, text: String) -> Self {
        Self {
            severity,
            text,
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

/// Application state
pub struct AppState {
    /// Injected configuration
    pub config: AppConfig,

    /// Latest status message
    pub status: StatusMessage,

    /// Panels that failed to load, with the reason
    pub load_failures: Vec<(String, String)>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            status: StatusMessage::new(Severity::Info, "Loading panels...".to_string()),
            load_failures: Vec::new(),
        }
    }

    /// Wrap into the shared handle handed to panels
    pub fn shared(config: AppConfig) -> SharedState {
        Arc::new(RwLock::new(Self::new(config)))
    }

    /// Set status message
    pub fn notify(&mut self, severity: Severity, text: impl Into<String>) {
        let text = text.into();
        match severity {
            Severity::Error => error!(message = %text, "Status"),
            Severity::Warning => warn!(message = %text, "Status"),
            Severity::Info | Severity::Success => info!(message = %text, "Status"),
        }
        self.status = StatusMessage::new(severity, text);
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.notify(Severity::Info, text);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.notify(Severity::Success, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.notify(Severity::Error, text);
    }

    /// Remember panels that failed to load
    pub fn record_failures(&mut self, failures: &[PanelFailure]) {
        self.load_failures = failures
            .iter()
            .map(|f| (f.identifier.clone(), f.error.to_string()))
            .collect();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devdock_core::Error;

    #[test]
    fn test_notify_replaces_status() {
        let mut state = AppState::default();
        state.success("Copied to clipboard!");
        assert_eq!(state.status.severity, Severity::Success);
        assert_eq!(state.status.text, "Copied to clipboard!");

        state.error("Invalid input for conversion");
        assert_eq!(state.status.severity, Severity::Error);
    }

    #[test]
    fn test_record_failures() {
        let mut state = AppState::default();
        state.record_failures(&[PanelFailure {
            identifier: "Broken".into(),
            error: Error::panel_load("Broken", "boom"),
        }]);

        assert_eq!(state.load_failures.len(), 1);
        assert_eq!(state.load_failures[0].0, "Broken");
        assert!(state.load_failures[0].1.contains("boom"));
    }
}
