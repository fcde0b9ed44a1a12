pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};
pub use config::Settings;

pub use adapters::{
    http::HttpApiClient,
    session::{FileSessionStore, MemorySessionStore},
    terminal::TerminalSurface,
};
pub use app::{App, NavigationContext, Page};
pub use utils::error::{ClientError, Result};
