//! DevDock GUI
//!
//! egui shell hosting the registered utility panels

pub mod app;
pub mod panels;
pub mod state;
pub mod theme;
pub mod widgets;

// Re-export main app for easy access
pub use app::DevDockApp;
pub use state::{AppState, SharedState};
