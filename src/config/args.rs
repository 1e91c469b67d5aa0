//! Command-line arguments

use clap::Parser;

use super::constants::DEFAULT_CONFIG_PATH;

#[derive(Debug, Clone, Parser)]
#[command(name = "linkform", version, about = "Shorten URLs and follow short links from the terminal")]
pub struct Args {
    /// Page location to open, e.g. `https://short.url/?u=abc123`.
    /// A `u` query parameter triggers the redirect flow.
    pub location: Option<String>,

    /// Configuration file
    #[arg(short = 'c', long = "config", default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Print a sample configuration file and exit
    #[arg(long = "sample-config")]
    pub sample_config: bool,
}
