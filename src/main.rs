//! DevDock - utility panels in a single window
//!
//! Main entry point: assembles the configuration, then either launches the
//! GUI or prints the loaded menu.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use devdock_core::logging::{self, TracingConfig};
use devdock_core::{AppConfig, ThemeMode};
use devdock_gui::{panels, AppState, DevDockApp};
use devdock_tools::Capabilities;
use tracing::{debug, info};

/// DevDock - a menu of developer utilities
#[derive(Parser, Debug)]
#[command(name = "devdock")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to <config dir>/devdock/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Load the menu, print it and exit
    #[arg(long)]
    list_panels: bool,

    /// Output format for --list-panels
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Author name shown on the home page
    #[arg(long)]
    author_name: Option<String>,

    /// Contact e-mail shown on the home page
    #[arg(long)]
    contact_email: Option<String>,

    /// GitHub profile URL shown on the home page
    #[arg(long)]
    github_url: Option<String>,

    /// Project name used in the welcome heading
    #[arg(long)]
    project_name: Option<String>,

    /// Colour scheme: dark or light
    #[arg(long)]
    theme: Option<ThemeMode>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl Cli {
    /// Build the configuration: file, then environment, then flags
    fn load_config(&self) -> Result<AppConfig> {
        let mut config = AppConfig::load(self.config.as_deref()).context("Failed to load configuration")?;
        config
            .apply_process_env()
            .context("Invalid environment configuration")?;

        if let Some(v) = &self.author_name {
            config.author_name = Some(v.clone());
        }
        if let Some(v) = &self.contact_email {
            config.contact_email = Some(v.clone());
        }
        if let Some(v) = &self.github_url {
            config.github_url = Some(v.clone());
        }
        if let Some(v) = &self.project_name {
            config.project_name = Some(v.clone());
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }

        debug!(?config, "Configuration assembled");
        Ok(config)
    }
}

fn list_panels(config: AppConfig, format: OutputFormat) -> Result<()> {
    let state = AppState::shared(config);
    let report = panels::discover(&state, &Capabilities::default());

    match format {
        OutputFormat::Json => {
            let entries: Vec<_> = report
                .entries
                .iter()
                .map(|e| {
                    serde_json::json!({
                        "key": e.key,
                        "label": e.label,
                        "icon": e.icon,
                        "order": e.order,
                    })
                })
                .collect();
            let failures: Vec<_> = report
                .failures
                .iter()
                .map(|f| serde_json::json!({ "identifier": f.identifier, "error": f.error.to_string() }))
                .collect();
            let out = serde_json::json!({ "entries": entries, "failures": failures });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => {
            for (index, entry) in report.entries.iter().enumerate() {
                let order = entry.order.map_or_else(|| "-".to_string(), |o| o.to_string());
                let icon = entry.icon.as_deref().unwrap_or(" ");
                println!("{:>2}. {icon} {:<20} key={:<12} order={order}", index + 1, entry.label, entry.key);
            }
            for failure in &report.failures {
                println!("failed: {} ({})", failure.identifier, failure.error);
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_with_config(TracingConfig::from_verbosity(cli.verbose));

    let config = cli.load_config()?;

    if cli.list_panels {
        return list_panels(config, cli.format);
    }

    info!(version = devdock_core::VERSION, "Starting DevDock");

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([640.0, 400.0])
            .with_title("DevDock"),
        ..Default::default()
    };

    // Run the GUI application
    eframe::run_native(
        "DevDock",
        options,
        Box::new(move |cc| Ok(Box::new(DevDockApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {e}"))
}
