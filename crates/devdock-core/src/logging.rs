//! Logging and tracing setup for DevDock
//!
//! Structured logging uses the `tracing` crate. The subscriber is installed
//! once at startup; `RUST_LOG` always takes precedence over the configured
//! default level.

use std::sync::atomic::{AtomicBool, Ordering};

/// Whether tracing has been initialized
static TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Configuration for tracing initialization
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Default log level filter (e.g., "info", "debug", "warn")
    pub default_level: String,
    /// Show the target (module path) in log output
    pub show_target: bool,
    /// Show thread IDs in log output
    pub show_thread_ids: bool,
    /// Show source file in log output
    pub show_file: bool,
    /// Show line number in log output
    pub show_line_number: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_level: "warn,devdock=info".to_string(),
            show_target: true,
            show_thread_ids: false,
            show_file: false,
            show_line_number: false,
        }
    }
}

impl TracingConfig {
    /// Config for a `-v` count as passed on the command line
    pub fn from_verbosity(verbose: u8) -> Self {
        let default_level = match verbose {
            0 => "warn,devdock=info",
            1 => "info,devdock=debug",
            2 => "debug,devdock=trace",
            _ => "trace",
        };

        Self {
            default_level: default_level.to_string(),
            show_thread_ids: verbose >= 2,
            show_file: verbose >= 3,
            show_line_number: verbose >= 3,
            ..Self::default()
        }
    }
}

/// Initialize tracing with a custom configuration
///
/// Multiple calls are safe; only the first installs a subscriber.
pub fn init_with_config(config: TracingConfig) {
    if TRACING_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::Relaxed)
        .is_err()
    {
        return;
    }

    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_level));

    let fmt_layer = fmt::layer()
        .with_target(config.show_target)
        .with_thread_ids(config.show_thread_ids)
        .with_file(config.show_file)
        .with_line_number(config.show_line_number);

    // Another subscriber may already be installed, e.g. by a test harness.
    let _ = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_config_default() {
        let config = TracingConfig::default();
        assert!(config.default_level.contains("info"));
        assert!(config.show_target);
        assert!(!config.show_thread_ids);
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(TracingConfig::from_verbosity(0).default_level, "warn,devdock=info");
        assert!(TracingConfig::from_verbosity(1).default_level.contains("debug"));
        let loud = TracingConfig::from_verbosity(5);
        assert_eq!(loud.default_level, "trace");
        assert!(loud.show_line_number);
    }

    #[test]
    fn test_init_is_idempotent() {
        init_with_config(TracingConfig::default());
        init_with_config(TracingConfig::from_verbosity(3));
        assert!(TRACING_INITIALIZED.load(Ordering::SeqCst));
    }
}
