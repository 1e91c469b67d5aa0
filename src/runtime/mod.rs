//! Mode routing
//!
//! - Sample config: print a default `linkform.toml` and exit
//! - TUI: the interactive form (default)

use anyhow::Result;

use crate::config::{Args, StaticConfig};

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    SampleConfig,
    #[cfg(feature = "tui")]
    Tui,
    Unknown,
}

/// Detect which mode to run based on the parsed arguments
pub fn detect_mode(args: &Args) -> Mode {
    if args.sample_config {
        return Mode::SampleConfig;
    }

    #[cfg(feature = "tui")]
    return Mode::Tui;

    #[cfg(not(feature = "tui"))]
    Mode::Unknown
}

pub async fn run(args: Args) -> Result<()> {
    match detect_mode(&args) {
        Mode::SampleConfig => {
            print!("{}", StaticConfig::generate_sample_config());
            Ok(())
        }
        #[cfg(feature = "tui")]
        Mode::Tui => run_tui(args).await,
        Mode::Unknown => {
            anyhow::bail!("No interface available: linkform was built without the `tui` feature")
        }
    }
}

#[cfg(feature = "tui")]
async fn run_tui(args: Args) -> Result<()> {
    use anyhow::Context;
    use tracing::info;

    use crate::config::init_config;
    use crate::system::{init_logging, install_panic_hook};

    let config = init_config(&args.config);
    let _guard = init_logging(&config.logging).context("Failed to initialize logging")?;

    install_panic_hook();

    info!(
        "linkform v{} starting (location: {:?})",
        env!("CARGO_PKG_VERSION"),
        args.location
    );

    crate::interfaces::tui::run_tui(args.location, &config.ui)
        .await
        .map_err(|e| anyhow::anyhow!("TUI error: {}", e))
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_sample_config_mode() {
        let args = Args::parse_from(["linkform", "--sample-config"]);
        assert_eq!(detect_mode(&args), Mode::SampleConfig);
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_default_mode_is_tui() {
        let args = Args::parse_from(["linkform", "u=abc123"]);
        assert_eq!(detect_mode(&args), Mode::Tui);
    }
}
