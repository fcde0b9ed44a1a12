#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::http::DEFAULT_API_BASE;
use crate::adapters::session::DEFAULT_SESSION_FILE;
use crate::domain::model::PriceFilter;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use toml_config::TomlConfig;

/// 合併後的最終設定：命令列 > 設定檔 > 預設值
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_base_url: String,
    pub session_path: String,
    pub default_max_price: Option<PriceFilter>,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            session_path: DEFAULT_SESSION_FILE.to_string(),
            default_max_price: None,
            verbose: false,
            json_logs: false,
        }
    }
}

impl Settings {
    pub fn from_toml(file: &TomlConfig) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            api_base_url: file.api.base_url.clone().unwrap_or(defaults.api_base_url),
            session_path: file.session.path.clone().unwrap_or(defaults.session_path),
            default_max_price: file.default_max_price()?,
            verbose: file.logging.verbose.unwrap_or(false),
            json_logs: file.logging.json.unwrap_or(false),
        })
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &cli::CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        file.validate()?;

        let mut settings = Self::from_toml(&file)?;
        if let Some(api_base) = &cli.api_base {
            settings.api_base_url = api_base.clone();
        }
        if let Some(session_file) = &cli.session_file {
            settings.session_path = session_file.clone();
        }
        settings.verbose |= cli.verbose;
        settings.json_logs |= cli.json_logs;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base_url)?;
        validate_path("session_file", &self.session_path)
    }
}
