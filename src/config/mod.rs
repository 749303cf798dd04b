pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Parser)]
#[command(name = "event-portal")]
#[command(about = "Community event portal: browse upcoming events and register")]
pub struct CliConfig {
    /// Path to the TOML events file
    #[arg(short, long, default_value = "events.toml")]
    pub events_file: String,

    /// Override the registration service endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log process CPU/memory usage per phase
    #[arg(long)]
    pub monitor: bool,

    #[command(subcommand)]
    pub command: PortalCommand,
}

#[cfg(feature = "cli")]
#[derive(Debug, Subcommand)]
pub enum PortalCommand {
    /// Show events open for registration
    List {
        #[arg(long, value_enum, default_value = "text")]
        format: ListFormat,
    },

    /// Claim a seat for an event
    Register {
        /// Event name exactly as shown by `list`
        event: String,
    },

    /// Submit a signup form to the registration service
    Signup {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        event: String,
    },
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Text,
    Csv,
}
