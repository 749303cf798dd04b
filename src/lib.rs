pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, ListFormat, PortalCommand};

pub use adapters::http::HttpGateway;
pub use config::toml_config::PortalConfig;
pub use core::{inventory::EventInventory, portal::PortalEngine};
pub use domain::model::{Event, Signup, SubmissionReceipt};
pub use utils::error::{PortalError, Result};
