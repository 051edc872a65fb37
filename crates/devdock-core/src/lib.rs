//! DevDock Core Library
//!
//! This crate provides the panel registry, the menu loader that turns
//! registered panels into an ordered navigation list, the shell state
//! machine that owns the current selection, plus configuration, logging
//! and error handling shared by the other DevDock crates.

pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod metadata;
pub mod registry;
pub mod shell;

pub use config::{AppConfig, ThemeMode};
pub use error::{Error, Result, ResultExt};
pub use loader::{derive_key, derive_label, load_menu, LoadReport, MenuEntry, PanelFailure};
pub use metadata::{EffectiveMetadata, MetadataOverride, MetadataSource, PanelMetadata};
pub use registry::{PanelFactory, PanelRegistration, PanelRegistrationBuilder, PanelRegistry};
pub use shell::{PanelLifecycle, Shell};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
